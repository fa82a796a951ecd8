//! CLI entrypoint for `make-box-builder`.

use box_builder::BoxBuilderError;
use box_builder::cli::Args;
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    codegen_support::init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), BoxBuilderError> {
    let args = Args::parse();
    let config = box_builder::load_config(&args)?;
    box_builder::run(&config)
}
