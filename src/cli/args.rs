//! Command-line argument definitions using clap

use clap::Parser;

/// tfjs-wizard - Interactively collect TensorFlow.js converter options and convert a model.
///
/// The converter program and Python interpreter can be overridden with the
/// TFJS_CONVERTER and TFJS_PYTHON environment variables.
#[derive(Parser, Debug)]
#[command(name = "tfjs-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the generated converter command instead of running it
    #[arg(long = "dryrun", default_value = "false")]
    pub dry_run: bool,
}
