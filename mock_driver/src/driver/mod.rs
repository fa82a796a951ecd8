//! One-shot mock generation.

use camino::Utf8Path;
use codegen_support::{ensure_dir, first_missing_dir, parent_dir, remove_dir_tree};
use tracing::{debug, info};

use crate::config::MockConfig;
use crate::error::MockDriverError;
use crate::plan::MockPlan;
use crate::runner::{CommandOutcome, CommandRunner};

/// Exit code reported when the tool's status cannot be passed through.
pub const FALLBACK_EXIT_CODE: u8 = 1;

/// The resolved plan together with what the tool did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockReport {
    /// The invocation that was run.
    pub plan: MockPlan,
    /// The tool's exit status and captured output.
    pub outcome: CommandOutcome,
}

impl MockReport {
    /// The tool's exit code as a process exit status.
    ///
    /// Signal terminations and codes outside `0..=255` map to
    /// [`FALLBACK_EXIT_CODE`], so a failure is never reported as success.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.outcome
            .exit_code
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(FALLBACK_EXIT_CODE)
    }
}

/// Resolves `config` and runs the mock generator once through `runner`.
///
/// The output file's directory is created beforehand, and removed again if
/// the tool cannot be launched; everything else is left to the tool. A non-zero exit is not an error: it is returned in the
/// report for the caller to propagate.
///
/// # Errors
///
/// Returns an error when the configuration is unusable, the output
/// directory cannot be created, or the tool cannot be launched.
pub fn generate_mocks<R>(config: &MockConfig, runner: &R) -> Result<MockReport, MockDriverError>
where
    R: CommandRunner + ?Sized,
{
    let plan = MockPlan::from_config(config)?;
    run_plan(plan, runner)
}

/// Runs an already resolved plan through `runner`.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or the
/// tool cannot be launched.
pub fn run_plan<R>(plan: MockPlan, runner: &R) -> Result<MockReport, MockDriverError>
where
    R: CommandRunner + ?Sized,
{
    let out_dir = parent_dir(plan.output());
    let created = first_missing_dir(out_dir).map(Utf8Path::to_path_buf);
    ensure_dir(out_dir)?;

    let invocation = plan.invocation();
    debug!(%invocation, working_dir = %invocation.working_dir, "invoking mock generator");
    let outcome = match runner.run(&invocation) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(created) = created
                && let Err(cleanup_err) = remove_dir_tree(&created)
            {
                debug!(dir = %created, error = %cleanup_err, "output directory left behind");
            }
            return Err(err);
        }
    };

    // The tool reports its own failures on stderr.
    if outcome.success() {
        info!(output = %plan.output(), inputs = plan.inputs().len(), "mocks generated");
    } else {
        info!(tool = %plan.tool(), status = ?outcome.exit_code, "mock generator failed");
    }
    Ok(MockReport { plan, outcome })
}
