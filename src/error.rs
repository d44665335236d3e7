//! Error types for the conversion wizard.
//!
//! Answer validation failures are not errors: validators return the reason
//! string directly and the question is asked again. Everything here aborts the
//! session.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a wizard session.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The model metadata could not be read (bad saved model, missing helper).
    #[error("Failed to read model metadata from {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// The metadata reader ran but printed something that is not metadata.
    #[error("Malformed model metadata: {0}")]
    MalformedMetadata(String),

    /// The converter program could not be started.
    #[error("Failed to start converter '{program}': {source}")]
    ConverterLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran and exited unsuccessfully.
    #[error("Converter exited with {status}: {stderr}")]
    ConverterFailed { status: String, stderr: String },

    /// Arguments were requested before a required answer was collected.
    #[error("Missing answer for '{0}'")]
    MissingAnswer(&'static str),

    /// The prompt renderer returned an index past the end of the choices.
    #[error("Selection {index} is out of range for '{key}'")]
    InvalidSelection { key: &'static str, index: usize },

    /// The prompt renderer failed to read from the terminal.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WizardError>;
