//! Path resolution and argument layout for the mock generator.

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::MockConfig;
use crate::error::MockDriverError;
use crate::runner::Invocation;

/// A validated run with every path made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPlan {
    tool: Utf8PathBuf,
    project_name: String,
    output: Utf8PathBuf,
    inputs: Vec<Utf8PathBuf>,
    working_dir: Utf8PathBuf,
}

impl MockPlan {
    /// Resolves `config` against the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is unusable or the working
    /// directory cannot be read as UTF-8.
    pub fn from_config(config: &MockConfig) -> Result<Self, MockDriverError> {
        let cwd = std::env::current_dir().map_err(MockDriverError::WorkingDir)?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|path| {
            MockDriverError::NonUtf8WorkingDir(path.to_string_lossy().into_owned())
        })?;
        Self::resolve(config, &cwd)
    }

    /// Resolves `config` against `base`, which must be absolute.
    ///
    /// A configured working directory is itself resolved against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`MockDriverError::NoInputs`] when `inputs` is empty and
    /// [`MockDriverError::EmptyProjectName`] when the project name is blank.
    pub fn resolve(config: &MockConfig, base: &Utf8Path) -> Result<Self, MockDriverError> {
        if config.inputs.is_empty() {
            return Err(MockDriverError::NoInputs);
        }
        if config.project_name.trim().is_empty() {
            return Err(MockDriverError::EmptyProjectName);
        }

        let working_dir = config
            .working_dir
            .as_ref()
            .map_or_else(|| base.to_path_buf(), |dir| base.join(dir));
        let input_root = working_dir.join(&config.input_root);

        Ok(Self {
            tool: working_dir.join(&config.tool),
            project_name: config.project_name.clone(),
            output: working_dir.join(&config.output),
            inputs: config
                .inputs
                .iter()
                .map(|input| input_root.join(input))
                .collect(),
            working_dir,
        })
    }

    /// Builds `<tool> generate --testable <project> --output <output> <inputs>...`.
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        let mut args = vec![
            "generate".to_owned(),
            "--testable".to_owned(),
            self.project_name.clone(),
            "--output".to_owned(),
            self.output.to_string(),
        ];
        args.extend(self.inputs.iter().map(ToString::to_string));
        Invocation {
            program: self.tool.clone(),
            args,
            working_dir: self.working_dir.clone(),
        }
    }

    /// Absolute path of the generator executable.
    #[must_use]
    pub fn tool(&self) -> &Utf8Path {
        &self.tool
    }

    /// Absolute path the generator writes to.
    #[must_use]
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Absolute input paths, in configured order.
    #[must_use]
    pub fn inputs(&self) -> &[Utf8PathBuf] {
        &self.inputs
    }

    /// Directory the generator runs in.
    #[must_use]
    pub fn working_dir(&self) -> &Utf8Path {
        &self.working_dir
    }
}
