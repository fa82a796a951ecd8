//! Layered configuration loading.
//!
//! Sources are merged lowest precedence first: the caller's built-in
//! defaults, an optional TOML file, environment variables carrying the
//! application prefix, then command-line overrides. Override structs should
//! skip unset fields when serialised so that absent flags leave lower layers
//! intact.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::SupportError;

/// Suffix appended to the environment prefix to locate a configuration file.
const CONFIG_PATH_KEY: &str = "CONFIG_PATH";

/// Describes where the file and environment layers come from.
#[derive(Debug, Clone, Copy)]
pub struct LayerSources<'a> {
    env_prefix: &'a str,
    config_path: Option<&'a Utf8Path>,
}

impl<'a> LayerSources<'a> {
    /// Creates sources reading environment variables that start with
    /// `env_prefix` (for example `BOX_BUILDER_`).
    #[must_use]
    pub const fn new(env_prefix: &'a str) -> Self {
        Self {
            env_prefix,
            config_path: None,
        }
    }

    /// Uses `path` as the configuration file instead of consulting the
    /// `<PREFIX>CONFIG_PATH` environment variable.
    #[must_use]
    pub const fn with_config_path(mut self, path: Option<&'a Utf8Path>) -> Self {
        self.config_path = path;
        self
    }

    /// Returns the environment prefix.
    #[must_use]
    pub const fn env_prefix(&self) -> &'a str {
        self.env_prefix
    }

    /// Resolves the configuration file, preferring the explicit path.
    #[must_use]
    pub fn resolve_config_path(&self) -> Option<Utf8PathBuf> {
        self.config_path.map(Utf8Path::to_path_buf).or_else(|| {
            std::env::var(format!("{}{CONFIG_PATH_KEY}", self.env_prefix))
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(Utf8PathBuf::from)
        })
    }
}

/// Merges `defaults`, the file and environment layers described by
/// `sources`, and `overrides` into a single configuration value.
///
/// # Errors
///
/// Returns [`SupportError::MissingConfigFile`] when a configuration file was
/// requested but does not exist, and [`SupportError::Extract`] when a layer
/// holds a value that does not fit `T`.
pub fn load_layered<T, O>(
    defaults: &T,
    sources: &LayerSources<'_>,
    overrides: &O,
) -> Result<T, SupportError>
where
    T: Serialize + DeserializeOwned,
    O: Serialize,
{
    let mut figment = Figment::from(Serialized::defaults(defaults));

    if let Some(path) = sources.resolve_config_path() {
        if !path.is_file() {
            return Err(SupportError::MissingConfigFile(path));
        }
        debug!(path = %path, "merging configuration file");
        figment = figment.merge(Toml::file_exact(path.as_std_path()));
    }

    figment = figment
        .merge(Env::prefixed(sources.env_prefix).ignore(&[CONFIG_PATH_KEY]))
        .merge(Serialized::defaults(overrides));

    Ok(figment.extract()?)
}
