//! The rendered Swift extension holding every overload.

use std::fmt;

use crate::config::BoxBuilderConfig;
use crate::identifier::Identifier;
use crate::overload::OverloadSpec;

/// First line of every generated file.
pub const HEADER: &str = "/// Autogenerated by make-box-builder.";

const MEMBER_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";

/// The complete generated source: a header comment and one extension block
/// containing an overload per arity.
///
/// Rendering goes through [`fmt::Display`]:
///
/// ```text
/// /// Autogenerated by make-box-builder.
/// extension BoxBuilder {
///     // buildBlock for 1 child view(s).
///     public static func buildBlock<View>(_ v0: View) -> [View] {
///         return [v0]
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    extension_type: Identifier,
    function_name: Identifier,
    type_parameter: Identifier,
    overloads: Vec<OverloadSpec>,
}

impl GeneratedDocument {
    /// Derives one overload per arity allowed by `config`.
    #[must_use]
    pub fn build(config: &BoxBuilderConfig) -> Self {
        let overloads = config
            .arity_bound
            .arities()
            .map(|arity| OverloadSpec::new(arity, &config.parameter_prefix))
            .collect();
        Self {
            extension_type: config.extension_type.clone(),
            function_name: config.function_name.clone(),
            type_parameter: config.type_parameter.clone(),
            overloads,
        }
    }

    /// Overloads in emission order.
    #[must_use]
    pub fn overloads(&self) -> &[OverloadSpec] {
        &self.overloads
    }

    fn write_overload(&self, f: &mut fmt::Formatter<'_>, overload: &OverloadSpec) -> fmt::Result {
        let ty = &self.type_parameter;
        let name = &self.function_name;
        let parameters = overload
            .parameter_names()
            .iter()
            .map(|parameter| format!("_ {parameter}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            f,
            "{MEMBER_INDENT}// {name} for {} child view(s).",
            overload.arity()
        )?;
        writeln!(
            f,
            "{MEMBER_INDENT}public static func {name}<{ty}>({parameters}) -> [{ty}] {{"
        )?;
        writeln!(
            f,
            "{BODY_INDENT}return [{}]",
            overload.body_expression().join(", ")
        )?;
        writeln!(f, "{MEMBER_INDENT}}}")
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "extension {} {{", self.extension_type)?;
        for (index, overload) in self.overloads.iter().enumerate() {
            // Separate consecutive overloads; nothing trails the last one.
            if index > 0 {
                writeln!(f)?;
            }
            self.write_overload(f, overload)?;
        }
        writeln!(f, "}}")
    }
}

/// Renders the full document for `config`.
#[must_use]
pub fn render(config: &BoxBuilderConfig) -> String {
    GeneratedDocument::build(config).to_string()
}
