//! CLI module - argument parsing, prompt rendering and the wizard session

mod args;
mod prompts;
pub mod wizard;

pub use args::Cli;
pub use prompts::*;
pub use wizard::{run_wizard, SessionOutcome};
