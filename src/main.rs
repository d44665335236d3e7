//! tfjs-wizard: TensorFlow.js Conversion CLI
//!
//! Asks which model to convert and how, then runs the converter
//! (or prints its command line with `--dryrun`).

use anyhow::{Context, Result};
use clap::Parser;

use tfjs_wizard::cli::{run_wizard, Cli, SessionOutcome};
use tfjs_wizard::config::Settings;
use tfjs_wizard::report::display_output_files;
use tfjs_wizard::utils::{
    init_logging, print_banner, print_completion, print_dry_run, print_info, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let settings = Settings::from_env();
    tracing::debug!("Settings: {:?}", settings);

    print_banner(env!("CARGO_PKG_VERSION"));

    match run_wizard(&cli, &settings).context("Conversion wizard failed")? {
        SessionOutcome::DryRun { command } => {
            print_dry_run(&command);
        }
        SessionOutcome::Converted { output_path, files } => {
            print_success(&format!("Model saved to {}", output_path));
            if files.is_empty() {
                print_info("The output directory is empty");
            } else {
                display_output_files(&files);
            }
            print_completion();
        }
    }

    Ok(())
}
