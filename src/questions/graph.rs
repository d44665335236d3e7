//! The ordered question table
//!
//! Every question is a declarative [`QuestionSpec`]: its kind, message,
//! visibility predicate, choices, validator and filter are plain functions of
//! the answers collected so far, so any prompt renderer can drive the table and
//! every predicate can be tested on its own.
//!
//! Order matters: later predicates read earlier answers.

use super::choices::{
    input_format_choices, output_format_choices, quantization_choices, signature_choices,
    tag_choices, Choice,
};
use super::validate::{
    validate_input_path, validate_nonempty_path, validate_output_path, validate_shard_size,
};
use super::{Answer, AnswerSet, QuestionKey};
use crate::error::Result;
use crate::model::{expand_path, first_with_extension, Format, MetadataReader};

/// Default weight shard size: 4 MiB
pub const DEFAULT_SHARD_SIZE_BYTES: u64 = 4 * 1024 * 1024;

/// Facts about the session that are not answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Format detected from the first input path, if any
    pub detected: Option<Format>,
}

type Predicate = fn(&SessionContext, &AnswerSet) -> bool;
type Message = fn(&SessionContext, &AnswerSet) -> String;
type Validator = fn(&AnswerSet, &str) -> std::result::Result<(), String>;
type Filter = fn(&AnswerSet, &str) -> Answer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text, validated then filtered into an answer
    Input { default: Option<String> },
    Confirm { default: bool },
    /// One of a list of choices
    Select,
}

/// Where a select question gets its choices
#[derive(Clone, Copy)]
pub enum ChoiceSource {
    None,
    Static(fn(&SessionContext, &AnswerSet) -> Vec<Choice>),
    /// Computed from model metadata; read failures abort the session
    Metadata(fn(&AnswerSet, &dyn MetadataReader) -> Result<Vec<Choice>>),
}

/// A question and everything needed to ask it
#[derive(Clone)]
pub struct QuestionSpec {
    pub key: QuestionKey,
    pub kind: QuestionKind,
    message: Message,
    when: Predicate,
    choices: ChoiceSource,
    validate: Validator,
    filter: Filter,
}

impl QuestionSpec {
    fn new(key: QuestionKey, kind: QuestionKind, message: Message) -> Self {
        Self {
            key,
            kind,
            message,
            when: always,
            choices: ChoiceSource::None,
            validate: accept,
            filter: keep_text,
        }
    }

    fn when(mut self, when: Predicate) -> Self {
        self.when = when;
        self
    }

    fn choices(mut self, choices: ChoiceSource) -> Self {
        self.choices = choices;
        self
    }

    fn validate(mut self, validate: Validator) -> Self {
        self.validate = validate;
        self
    }

    fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn is_visible(&self, ctx: &SessionContext, answers: &AnswerSet) -> bool {
        (self.when)(ctx, answers)
    }

    pub fn message(&self, ctx: &SessionContext, answers: &AnswerSet) -> String {
        (self.message)(ctx, answers)
    }

    pub fn resolve_choices(
        &self,
        ctx: &SessionContext,
        answers: &AnswerSet,
        reader: &dyn MetadataReader,
    ) -> Result<Vec<Choice>> {
        match self.choices {
            ChoiceSource::None => Ok(Vec::new()),
            ChoiceSource::Static(provider) => Ok(provider(ctx, answers)),
            ChoiceSource::Metadata(provider) => provider(answers, reader),
        }
    }

    pub fn check(&self, answers: &AnswerSet, raw: &str) -> std::result::Result<(), String> {
        (self.validate)(answers, raw)
    }

    pub fn apply_filter(&self, answers: &AnswerSet, raw: &str) -> Answer {
        (self.filter)(answers, raw)
    }
}

// ============================================================================
// Visibility predicates
// ============================================================================

pub fn always(_: &SessionContext, _: &AnswerSet) -> bool {
    true
}

pub fn has_output_format_choice(_: &SessionContext, answers: &AnswerSet) -> bool {
    answers.format_in(
        QuestionKey::InputFormat,
        &[Format::KerasSavedModel, Format::TfjsLayersModel],
    )
}

pub fn detection_failed(ctx: &SessionContext, _: &AnswerSet) -> bool {
    ctx.detected.is_none()
}

pub fn is_saved_model_input(_: &SessionContext, answers: &AnswerSet) -> bool {
    answers.input_format().is_some_and(Format::is_saved_model)
}

pub fn is_layers_model_output(_: &SessionContext, answers: &AnswerSet) -> bool {
    answers.format_in(QuestionKey::OutputFormat, &[Format::TfjsLayersModel])
}

pub fn is_layers_model_input(_: &SessionContext, answers: &AnswerSet) -> bool {
    answers.format_in(QuestionKey::InputFormat, &[Format::TfjsLayersModel])
}

pub fn is_graph_input(_: &SessionContext, answers: &AnswerSet) -> bool {
    answers.format_in(QuestionKey::InputFormat, &[Format::TfSavedModel, Format::TfHub])
}

// ============================================================================
// Validators and filters
// ============================================================================

fn accept(_: &AnswerSet, _: &str) -> std::result::Result<(), String> {
    Ok(())
}

fn keep_text(_: &AnswerSet, raw: &str) -> Answer {
    Answer::Text(raw.to_string())
}

fn expand_text(_: &AnswerSet, raw: &str) -> Answer {
    Answer::Text(expand_path(raw.trim()))
}

fn nonempty_path(_: &AnswerSet, raw: &str) -> std::result::Result<(), String> {
    validate_nonempty_path(raw)
}

fn input_path_for_format(answers: &AnswerSet, raw: &str) -> std::result::Result<(), String> {
    match answers.input_format() {
        Some(format) => validate_input_path(raw, format),
        None => validate_nonempty_path(raw),
    }
}

fn output_path(_: &AnswerSet, raw: &str) -> std::result::Result<(), String> {
    validate_output_path(raw)
}

fn shard_size(_: &AnswerSet, raw: &str) -> std::result::Result<(), String> {
    validate_shard_size(raw)
}

fn shard_size_bytes(_: &AnswerSet, raw: &str) -> Answer {
    raw.trim()
        .parse()
        .map(Answer::Number)
        .unwrap_or_else(|_| Answer::Text(raw.trim().to_string()))
}

/// Expand a re-entered input path for the chosen format.
///
/// A layers-model directory resolves to its first `.json` file.
pub fn expand_input_path(raw: &str, format: Option<Format>) -> String {
    let path = expand_path(raw.trim());
    if format == Some(Format::TfjsLayersModel) {
        let dir = std::path::Path::new(&path);
        if dir.is_dir() {
            if let Some(json) = first_with_extension(dir, "json") {
                return json.display().to_string();
            }
        }
    }
    path
}

fn expand_for_format(answers: &AnswerSet, raw: &str) -> Answer {
    Answer::Text(expand_input_path(raw, answers.input_format()))
}

// ============================================================================
// Messages
// ============================================================================

pub fn input_format_message(ctx: &SessionContext, _: &AnswerSet) -> String {
    let mut message = "What is your input model format? ".to_string();
    if ctx.detected.is_some() {
        message.push_str("(auto-detected format is marked with *)");
    } else {
        message.push_str("(model format cannot be detected.)");
    }
    message
}

pub fn input_path_message(_: &SessionContext, answers: &AnswerSet) -> String {
    let message = "The original path seems to be wrong, ";
    match answers.input_format() {
        Some(Format::KerasHdf5) => format!("{}what is the path of input HDF5 file?", message),
        Some(Format::TfHub) => format!("{}what is the TFHub module URL?", message),
        _ => format!("{}what is the directory that contains the model?", message),
    }
}

fn input_format_choices_for(ctx: &SessionContext, _: &AnswerSet) -> Vec<Choice> {
    input_format_choices(ctx.detected)
}

fn output_format_choices_for(_: &SessionContext, answers: &AnswerSet) -> Vec<Choice> {
    output_format_choices(answers)
}

fn quantization_choices_for(_: &SessionContext, _: &AnswerSet) -> Vec<Choice> {
    quantization_choices()
}

/// Build the question table in asking order
pub fn question_graph() -> Vec<QuestionSpec> {
    use QuestionKey::*;
    use QuestionKind::*;

    vec![
        QuestionSpec::new(InputPath, Input { default: None }, |_, _| {
            "Please provide the path of model file or the directory that contains model files. \n\
             If you are converting TFHub module please provide the URL."
                .to_string()
        })
        .validate(nonempty_path)
        .filter(expand_text),
        QuestionSpec::new(InputFormat, Select, input_format_message)
            .choices(ChoiceSource::Static(input_format_choices_for)),
        QuestionSpec::new(OutputFormat, Select, |_, _| {
            "What is your output format?".to_string()
        })
        .when(has_output_format_choice)
        .choices(ChoiceSource::Static(output_format_choices_for)),
        QuestionSpec::new(InputPath, Input { default: None }, input_path_message)
            .when(detection_failed)
            .validate(input_path_for_format)
            .filter(expand_for_format),
        QuestionSpec::new(SavedModelTags, Select, |_, _| {
            "What are the tags for the saved model?".to_string()
        })
        .when(is_saved_model_input)
        .choices(ChoiceSource::Metadata(tag_choices)),
        QuestionSpec::new(SignatureName, Select, |_, _| {
            "What is the signature name of the model?".to_string()
        })
        .when(is_saved_model_input)
        .choices(ChoiceSource::Metadata(signature_choices)),
        QuestionSpec::new(QuantizationBytes, Select, |_, _| {
            "Do you want to compress the model? (this will decrease the model precision.)"
                .to_string()
        })
        .choices(ChoiceSource::Static(quantization_choices_for)),
        QuestionSpec::new(
            WeightShardSizeByte,
            Input {
                default: Some(DEFAULT_SHARD_SIZE_BYTES.to_string()),
            },
            |_, _| "Please enter shard size (in bytes) of the weight files?".to_string(),
        )
        .when(is_layers_model_output)
        .validate(shard_size)
        .filter(shard_size_bytes),
        QuestionSpec::new(SplitWeightsByLayer, Confirm { default: false }, |_, _| {
            "Do you want to split weights by layers?".to_string()
        })
        .when(is_layers_model_input),
        QuestionSpec::new(SkipOpCheck, Confirm { default: false }, |_, _| {
            "Do you want to skip op validation? \n\
             This will allow conversion of unsupported ops, \n\
             you can implement them as custom ops in tfjs-converter."
                .to_string()
        })
        .when(is_graph_input),
        QuestionSpec::new(StripDebugOps, Confirm { default: true }, |_, _| {
            "Do you want to strip debug ops? \n\
             This will improve model execution performance."
                .to_string()
        })
        .when(is_graph_input),
        QuestionSpec::new(OutputPath, Input { default: None }, |_, _| {
            "Which directory do you want to save the converted model in?".to_string()
        })
        .validate(output_path)
        .filter(expand_text),
    ]
}
