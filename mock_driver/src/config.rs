//! Configuration for the mock generation run.

use camino::Utf8PathBuf;
use codegen_support::{LayerSources, load_layered};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Args;
use crate::error::MockDriverError;

/// Prefix for environment variables read by `generate-mocks`.
pub const ENV_PREFIX: &str = "GENERATE_MOCKS_";

/// Everything the driver needs to build the external invocation.
///
/// Relative paths are resolved against `working_dir` (or the process working
/// directory), and each entry of `inputs` is resolved against `input_root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Mock generator executable.
    pub tool: Utf8PathBuf,
    /// Project identifier passed to `--testable`.
    pub project_name: String,
    /// File the generator overwrites with the mocks.
    pub output: Utf8PathBuf,
    /// Directory the input files are listed relative to.
    pub input_root: Utf8PathBuf,
    /// Files whose protocols receive mocks.
    pub inputs: Vec<Utf8PathBuf>,
    /// Directory relative paths are anchored at.
    pub working_dir: Option<Utf8PathBuf>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            tool: Utf8PathBuf::from("External/Cuckoo/run"),
            project_name: "Loftwing".to_owned(),
            output: Utf8PathBuf::from("Tests/LoftwingTests/GeneratedMocks.swift"),
            input_root: Utf8PathBuf::from("Sources/Loftwing"),
            inputs: vec![Utf8PathBuf::from("Layers/ActivitiesStackSpec.swift")],
            working_dir: None,
        }
    }
}

/// Resolves the configuration from defaults, the optional TOML file,
/// `GENERATE_MOCKS_*` environment variables and the parsed flags.
///
/// # Errors
///
/// Returns an error when a layer cannot be read or holds a value of the
/// wrong shape.
pub fn load_config(args: &Args) -> Result<MockConfig, MockDriverError> {
    let sources = LayerSources::new(ENV_PREFIX).with_config_path(args.config.as_deref());
    let config: MockConfig = load_layered(&MockConfig::default(), &sources, &args.overrides)?;
    debug!(?config, "resolved mock generation settings");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use clap::Parser;
    use test_helpers::figment::{figment_error, with_jail};

    use super::{MockConfig, load_config};
    use crate::cli::Args;

    #[test]
    fn no_flags_yield_the_loftwing_layout() -> anyhow::Result<()> {
        let config = with_jail(|_| {
            let args = Args::try_parse_from(["generate-mocks"]).map_err(figment_error)?;
            load_config(&args).map_err(figment_error)
        })?;
        assert_eq!(config, MockConfig::default());
        assert_eq!(config.project_name, "Loftwing");
        assert_eq!(config.inputs, vec![Utf8PathBuf::from("Layers/ActivitiesStackSpec.swift")]);
        Ok(())
    }

    #[test]
    fn repeated_input_flags_replace_the_list() -> anyhow::Result<()> {
        let config = with_jail(|jail| {
            jail.create_file(
                "mocks.toml",
                "project_name = \"FromFile\"\ninputs = [\"One.swift\"]\n",
            )?;
            jail.set_env("GENERATE_MOCKS_PROJECT_NAME", "FromEnv");
            let args = Args::try_parse_from([
                "generate-mocks",
                "--config",
                "mocks.toml",
                "--input",
                "A.swift",
                "--input",
                "B.swift",
            ])
            .map_err(figment_error)?;
            load_config(&args).map_err(figment_error)
        })?;
        assert_eq!(config.project_name, "FromEnv");
        assert_eq!(
            config.inputs,
            vec![Utf8PathBuf::from("A.swift"), Utf8PathBuf::from("B.swift")]
        );
        Ok(())
    }

    #[test]
    fn file_inputs_apply_without_flags() -> anyhow::Result<()> {
        let config = with_jail(|jail| {
            jail.create_file("mocks.toml", "inputs = [\"One.swift\", \"Two.swift\"]\n")?;
            jail.set_env("GENERATE_MOCKS_CONFIG_PATH", "mocks.toml");
            let args = Args::try_parse_from(["generate-mocks"]).map_err(figment_error)?;
            load_config(&args).map_err(figment_error)
        })?;
        assert_eq!(
            config.inputs,
            vec![Utf8PathBuf::from("One.swift"), Utf8PathBuf::from("Two.swift")]
        );
        Ok(())
    }
}
