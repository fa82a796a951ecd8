//! A single `buildBlock` overload.

use crate::identifier::Identifier;

/// One overload of the combine function, accepting `arity` values of the
/// shared type parameter and returning them as an array.
///
/// Parameter names are the configured prefix followed by the zero-based
/// position (`v0`, `v1`, ...), so they are pairwise distinct and stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadSpec {
    arity: u32,
    parameter_names: Vec<String>,
    body_expression: Vec<String>,
}

impl OverloadSpec {
    /// Derives the overload for `arity` parameters named after `prefix`.
    #[must_use]
    pub fn new(arity: u32, prefix: &Identifier) -> Self {
        let parameter_names: Vec<String> = (0..arity)
            .map(|position| format!("{prefix}{position}"))
            .collect();
        let body_expression = parameter_names.clone();
        Self {
            arity,
            parameter_names,
            body_expression,
        }
    }

    /// Number of parameters the overload accepts.
    #[must_use]
    pub const fn arity(&self) -> u32 {
        self.arity
    }

    /// Parameter names in declaration order.
    #[must_use]
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Elements of the returned array literal, in order.
    #[must_use]
    pub fn body_expression(&self) -> &[String] {
        &self.body_expression
    }
}
