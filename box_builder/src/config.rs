//! Configuration for the overload generator.
//!
//! [`BoxBuilderSettings`] is the raw, serialisable shape merged from the
//! configuration layers. [`BoxBuilderSettings::validate`] turns it into the
//! immutable [`BoxBuilderConfig`] the generator consumes, rejecting bad
//! values before any text is produced.

use camino::Utf8PathBuf;
use codegen_support::{LayerSources, load_layered};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arity::ArityBound;
use crate::cli::Args;
use crate::error::BoxBuilderError;
use crate::identifier::Identifier;

/// Prefix for environment variables read by `make-box-builder`.
pub const ENV_PREFIX: &str = "BOX_BUILDER_";

const DEFAULT_EXTENSION_TYPE: &str = "BoxBuilder";
const DEFAULT_FUNCTION_NAME: &str = "buildBlock";
const DEFAULT_TYPE_PARAMETER: &str = "View";
const DEFAULT_PARAMETER_PREFIX: &str = "v";

/// Unvalidated settings as they appear in files, the environment and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxBuilderSettings {
    /// Exclusive upper bound on generated arity.
    pub arity_bound: u32,
    /// Type extended by the generated block.
    pub extension_type: String,
    /// Name shared by every overload.
    pub function_name: String,
    /// Generic parameter accepted and returned by each overload.
    pub type_parameter: String,
    /// Prefix for positional parameter names.
    pub parameter_prefix: String,
    /// File to write instead of stdout.
    pub output: Option<Utf8PathBuf>,
}

impl Default for BoxBuilderSettings {
    fn default() -> Self {
        Self {
            arity_bound: ArityBound::DEFAULT.get(),
            extension_type: DEFAULT_EXTENSION_TYPE.to_owned(),
            function_name: DEFAULT_FUNCTION_NAME.to_owned(),
            type_parameter: DEFAULT_TYPE_PARAMETER.to_owned(),
            parameter_prefix: DEFAULT_PARAMETER_PREFIX.to_owned(),
            output: None,
        }
    }
}

impl BoxBuilderSettings {
    /// Checks every value and produces the generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BoxBuilderError::InvalidArityBound`] for a bound below two
    /// and [`BoxBuilderError::InvalidIdentifier`] for a naming option Swift
    /// would not accept.
    pub fn validate(self) -> Result<BoxBuilderConfig, BoxBuilderError> {
        Ok(BoxBuilderConfig {
            arity_bound: ArityBound::new(self.arity_bound)?,
            extension_type: Identifier::new("extension_type", self.extension_type)?,
            function_name: Identifier::new("function_name", self.function_name)?,
            type_parameter: Identifier::new("type_parameter", self.type_parameter)?,
            parameter_prefix: Identifier::new("parameter_prefix", self.parameter_prefix)?,
            output: self.output,
        })
    }
}

/// Validated, immutable input to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxBuilderConfig {
    /// Exclusive upper bound on generated arity.
    pub arity_bound: ArityBound,
    /// Type extended by the generated block.
    pub extension_type: Identifier,
    /// Name shared by every overload.
    pub function_name: Identifier,
    /// Generic parameter accepted and returned by each overload.
    pub type_parameter: Identifier,
    /// Prefix for positional parameter names.
    pub parameter_prefix: Identifier,
    /// File to write instead of stdout.
    pub output: Option<Utf8PathBuf>,
}

impl BoxBuilderConfig {
    /// Default naming with the given bound, writing to stdout.
    #[must_use]
    pub fn with_arity_bound(arity_bound: ArityBound) -> Self {
        Self {
            arity_bound,
            extension_type: Identifier::from_literal(DEFAULT_EXTENSION_TYPE),
            function_name: Identifier::from_literal(DEFAULT_FUNCTION_NAME),
            type_parameter: Identifier::from_literal(DEFAULT_TYPE_PARAMETER),
            parameter_prefix: Identifier::from_literal(DEFAULT_PARAMETER_PREFIX),
            output: None,
        }
    }
}

impl Default for BoxBuilderConfig {
    fn default() -> Self {
        Self::with_arity_bound(ArityBound::DEFAULT)
    }
}

/// Resolves the configuration from defaults, the optional TOML file,
/// `BOX_BUILDER_*` environment variables and the parsed flags.
///
/// # Errors
///
/// Returns an error when a layer cannot be read or holds an invalid value.
pub fn load_config(args: &Args) -> Result<BoxBuilderConfig, BoxBuilderError> {
    let sources = LayerSources::new(ENV_PREFIX).with_config_path(args.config.as_deref());
    let settings: BoxBuilderSettings =
        load_layered(&BoxBuilderSettings::default(), &sources, &args.overrides)?;
    debug!(?settings, "resolved box builder settings");
    settings.validate()
}
