//! The seam between the driver and the external process.
//!
//! The driver only ever talks to a [`CommandRunner`]; [`ProcessRunner`]
//! backs it with a real subprocess while tests substitute recording fakes.

use std::fmt;
use std::process::Command;

use camino::Utf8PathBuf;

use crate::error::MockDriverError;

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to launch.
    pub program: Utf8PathBuf,
    /// Arguments in order.
    pub args: Vec<String>,
    /// Directory the command runs in.
    pub working_dir: Utf8PathBuf,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program.as_str())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a finished command left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, or `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error.
    pub stderr: Vec<u8>,
}

impl CommandOutcome {
    /// Whether the command exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Runs an [`Invocation`] to completion.
pub trait CommandRunner {
    /// Launches the command, waits for it, and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MockDriverError::Launch`] when the command cannot be
    /// started. A command that starts and fails is reported through
    /// [`CommandOutcome::exit_code`] instead.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutcome, MockDriverError>;
}

/// Runs commands as child processes with captured output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutcome, MockDriverError> {
        let output = Command::new(invocation.program.as_std_path())
            .args(&invocation.args)
            .current_dir(invocation.working_dir.as_std_path())
            .output()
            .map_err(|source| MockDriverError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(CommandOutcome {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
