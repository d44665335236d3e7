//! Converter argument list

use tracing::debug;

use crate::error::{Result, WizardError};
use crate::questions::{Answer, AnswerSet, QuestionKey};

/// Translate the final answers into the converter's argument list.
///
/// Flags come first in key order: `--key` for a true confirmation (false ones
/// are left out), `--key=value` for everything else, unset answers skipped.
/// The input path and output path always close the list, in that order.
pub fn build_arguments(answers: &AnswerSet) -> Result<Vec<String>> {
    let input_path = answers
        .text(QuestionKey::InputPath)
        .ok_or(WizardError::MissingAnswer(QuestionKey::InputPath.as_str()))?;
    let output_path = answers
        .text(QuestionKey::OutputPath)
        .ok_or(WizardError::MissingAnswer(QuestionKey::OutputPath.as_str()))?;

    let mut flags: Vec<(QuestionKey, &Answer)> = answers
        .iter()
        .filter(|(key, _)| !matches!(key, QuestionKey::InputPath | QuestionKey::OutputPath))
        .collect();
    flags.sort_by_key(|(key, _)| key.as_str());

    let mut args: Vec<String> = flags
        .into_iter()
        .filter_map(|(key, answer)| match answer {
            Answer::Unset | Answer::Flag(false) => None,
            Answer::Flag(true) => Some(format!("--{}", key)),
            other => Some(format!("--{}={}", key, other)),
        })
        .collect();

    args.push(input_path.to_string());
    args.push(output_path.to_string());
    debug!("Converter arguments: {:?}", args);
    Ok(args)
}
