//! CLI entrypoint for `generate-mocks`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use mock_driver::cli::Args;
use mock_driver::{CommandOutcome, ProcessRunner};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    codegen_support::init_tracing();
    run()
}

fn run() -> color_eyre::Result<ExitCode> {
    let args = Args::parse();
    let config = mock_driver::load_config(&args)?;
    let report = mock_driver::generate_mocks(&config, &ProcessRunner)?;
    forward_output(&report.outcome)?;
    Ok(ExitCode::from(report.exit_code()))
}

fn forward_output(outcome: &CommandOutcome) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&outcome.stdout)?;
    stdout.flush()?;
    let mut stderr = std::io::stderr().lock();
    stderr.write_all(&outcome.stderr)?;
    stderr.flush()
}
