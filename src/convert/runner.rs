//! Running the external TensorFlow.js converter

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Result, WizardError};
use crate::utils::{create_spinner, finish_with_success, finish_with_warning};

/// Something that can convert a model given the converter arguments
pub trait Converter {
    fn convert(&self, args: &[String]) -> Result<()>;
}

/// Command line shown for a dry run
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Converter that launches the `tensorflowjs_converter` program
pub struct ExternalConverter {
    program: String,
}

impl ExternalConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Converter for ExternalConverter {
    fn convert(&self, args: &[String]) -> Result<()> {
        info!("Running {}", command_line(&self.program, args));

        let spinner = create_spinner("Converting model...");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                finish_with_warning(&spinner, "Converter could not be started");
                WizardError::ConverterLaunch {
                    program: self.program.clone(),
                    source,
                }
            })?;

        if !output.status.success() {
            finish_with_warning(&spinner, "Conversion failed");
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WizardError::ConverterFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        debug!("Converter output: {}", String::from_utf8_lossy(&output.stdout).trim());
        finish_with_success(&spinner, "Conversion complete");
        Ok(())
    }
}
