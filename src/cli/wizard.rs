//! Conversion wizard session
//!
//! Walks the question table in order and asks every visible question:
//!
//! 1. Ask for the input path and classify it
//! 2. Ask the remaining questions, skipping those whose predicate is false
//!    and select questions that have no choices
//! 3. Build the converter arguments
//! 4. Print them (dry run) or run the converter and list the output files
//!
//! The session owns the answer set; questions only ever see it by reference.

use std::path::Path;

use tracing::{debug, info};

use super::args::Cli;
use super::prompts::{DialoguerPrompter, Prompter};
use crate::config::Settings;
use crate::convert::{build_arguments, command_line, Converter, ExternalConverter};
use crate::error::{Result, WizardError};
use crate::model::{classify, MetadataReader, PythonMetadataReader};
use crate::questions::{
    question_graph, Answer, AnswerSet, QuestionKey, QuestionKind, QuestionSpec, SessionContext,
};
use crate::report::{list_output_files, OutputFile};

// ============================================================================
// Result Types
// ============================================================================

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Dry run: the command that would have been executed
    DryRun { command: String },
    /// Conversion ran; files found in the output directory
    Converted {
        output_path: String,
        files: Vec<OutputFile>,
    },
}

// ============================================================================
// Question Loop
// ============================================================================

/// Ask one question. `None` means a select question had nothing to choose from.
pub fn ask_question(
    spec: &QuestionSpec,
    ctx: &SessionContext,
    answers: &AnswerSet,
    prompter: &mut dyn Prompter,
    reader: &dyn MetadataReader,
) -> Result<Option<Answer>> {
    let message = spec.message(ctx, answers);

    match &spec.kind {
        QuestionKind::Input { default } => {
            let validate = |raw: &str| spec.check(answers, raw);
            let raw = prompter.input(&message, default.as_deref(), &validate)?;
            Ok(Some(spec.apply_filter(answers, &raw)))
        }
        QuestionKind::Confirm { default } => {
            let confirmed = prompter.confirm(&message, *default)?;
            Ok(Some(Answer::Flag(confirmed)))
        }
        QuestionKind::Select => {
            let choices = spec.resolve_choices(ctx, answers, reader)?;
            if choices.is_empty() {
                debug!("No choices for {}, skipping", spec.key);
                return Ok(None);
            }
            let index = prompter.select(&message, &choices)?;
            let choice = choices.into_iter().nth(index).ok_or(WizardError::InvalidSelection {
                key: spec.key.as_str(),
                index,
            })?;
            Ok(Some(choice.value))
        }
    }
}

/// Run the question table to completion and return the answers
pub fn run_session(prompter: &mut dyn Prompter, reader: &dyn MetadataReader) -> Result<AnswerSet> {
    let graph = question_graph();
    let Some((first, rest)) = graph.split_first() else {
        return Ok(AnswerSet::new());
    };

    let mut answers = AnswerSet::new();
    let mut ctx = SessionContext::default();

    if let Some(answer) = ask_question(first, &ctx, &answers, prompter, reader)? {
        answers.insert(first.key, answer);
    }

    let raw_path = answers.text(QuestionKey::InputPath).unwrap_or_default();
    let classification = classify(raw_path);
    match classification.format {
        Some(format) => info!("Detected input format {} for {}", format, classification.path),
        None => info!("Could not detect input format for {}", classification.path),
    }
    ctx.detected = classification.format;
    answers.insert(QuestionKey::InputPath, Answer::Text(classification.path));

    for spec in rest {
        if !spec.is_visible(&ctx, &answers) {
            debug!("Skipping {}", spec.key);
            continue;
        }
        if let Some(answer) = ask_question(spec, &ctx, &answers, prompter, reader)? {
            answers.insert(spec.key, answer);
        }
    }

    Ok(answers)
}

// ============================================================================
// Completion
// ============================================================================

/// Turn the answers into arguments, then print or convert
pub fn complete_session(
    answers: &AnswerSet,
    dry_run: bool,
    program: &str,
    converter: &dyn Converter,
) -> Result<SessionOutcome> {
    let arguments = build_arguments(answers)?;

    if dry_run {
        return Ok(SessionOutcome::DryRun {
            command: command_line(program, &arguments),
        });
    }

    converter.convert(&arguments)?;

    let output_path = answers
        .text(QuestionKey::OutputPath)
        .ok_or(WizardError::MissingAnswer(QuestionKey::OutputPath.as_str()))?
        .to_string();
    let files = list_output_files(Path::new(&output_path))?;
    Ok(SessionOutcome::Converted { output_path, files })
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard against the terminal, the TensorFlow metadata reader and
/// the configured converter
pub fn run_wizard(cli: &Cli, settings: &Settings) -> Result<SessionOutcome> {
    let mut prompter = DialoguerPrompter::default();
    let reader = PythonMetadataReader::new(settings.python.clone());
    let converter = ExternalConverter::new(settings.converter.clone());

    let answers = run_session(&mut prompter, &reader)?;
    complete_session(&answers, cli.dry_run, converter.program(), &converter)
}
