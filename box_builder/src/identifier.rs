//! Swift identifiers used when naming generated declarations.

use std::fmt;

use crate::error::BoxBuilderError;

/// A validated Swift identifier (ASCII letters, digits and underscores, not
/// starting with a digit, and not a reserved word).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `value` as the identifier held by configuration key `field`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxBuilderError::InvalidIdentifier`] naming `field` when the
    /// value is empty, contains characters Swift does not accept, or is a
    /// reserved word.
    pub fn new(field: &'static str, value: impl Into<String>) -> Result<Self, BoxBuilderError> {
        let value = value.into();
        if is_identifier(&value) {
            Ok(Self(value))
        } else {
            Err(BoxBuilderError::InvalidIdentifier { field, value })
        }
    }

    /// Wraps a literal known to be a valid identifier.
    pub(crate) fn from_literal(value: &'static str) -> Self {
        debug_assert!(is_identifier(value), "{value:?} is not an identifier");
        Self(value.to_owned())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Words Swift reserves in declarations, statements, expressions and types.
/// None of them may name a declaration without backticks.
const RESERVED_WORDS: &[&str] = &[
    "_",
    "Any",
    "Protocol",
    "Self",
    "Type",
    "as",
    "associatedtype",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "precedencegroup",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let well_formed = chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric());
    well_formed && !RESERVED_WORDS.contains(&value)
}
