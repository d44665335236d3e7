//! Choice providers for single-choice questions

use std::path::Path;

use super::{Answer, AnswerSet, QuestionKey};
use crate::error::Result;
use crate::model::{Format, MetadataReader, TensorInfo};

/// One selectable entry: what the user sees and what gets recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: Answer,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: Answer) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Quantization options, in display order
pub const QUANTIZATION_OPTIONS: [&str; 3] = [
    "No compression, no accuracy loss.",
    "2x compression, medium accuracy loss.",
    "4x compression, highest accuracy loss.",
];

/// Map a quantization option to the converter's `quantization_bytes` code.
///
/// The 2x option or anything mentioning 1/2 quantizes to 2 bytes, the 4x
/// option or 1/4 to 1 byte, everything else to none.
pub fn quantization_type(selection: &str) -> Option<u64> {
    if selection == QUANTIZATION_OPTIONS[1] || selection.contains("1/2") {
        Some(2)
    } else if selection == QUANTIZATION_OPTIONS[2] || selection.contains("1/4") {
        Some(1)
    } else {
        None
    }
}

/// Quantization choices with their converter codes
pub fn quantization_choices() -> Vec<Choice> {
    QUANTIZATION_OPTIONS
        .iter()
        .map(|label| {
            let value = match quantization_type(label) {
                Some(bytes) => Answer::Number(bytes),
                None => Answer::Unset,
            };
            Choice::new(*label, value)
        })
        .collect()
}

/// Input format choices with the detected format marked and listed first
pub fn input_format_choices(detected: Option<Format>) -> Vec<Choice> {
    let mut choices: Vec<(bool, Choice)> = Format::INPUTS
        .iter()
        .map(|&format| {
            let is_detected = Some(format) == detected;
            let name = if is_detected {
                format!("{} *", format.display_name())
            } else {
                format.display_name().to_string()
            };
            (is_detected, Choice::new(name, Answer::Format(format)))
        })
        .collect();
    // stable: the rest keep display order
    choices.sort_by_key(|(is_detected, _)| !is_detected);
    choices.into_iter().map(|(_, choice)| choice).collect()
}

/// Output formats available for the chosen input format
pub fn output_format_choices(answers: &AnswerSet) -> Vec<Choice> {
    answers
        .input_format()
        .map(Format::output_formats)
        .unwrap_or(&[])
        .iter()
        .map(|&format| Choice::new(format.display_name(), Answer::Format(format)))
        .collect()
}

fn saved_model_path(answers: &AnswerSet) -> Option<&str> {
    if answers.input_format().is_some_and(Format::is_saved_model) {
        answers.text(QuestionKey::InputPath)
    } else {
        None
    }
}

/// Tag sets of the saved model's meta-graphs, in file order
pub fn tag_choices(answers: &AnswerSet, reader: &dyn MetadataReader) -> Result<Vec<Choice>> {
    let Some(path) = saved_model_path(answers) else {
        return Ok(Vec::new());
    };
    let graphs = reader.read_metadata(Path::new(path))?;
    Ok(graphs
        .iter()
        .map(|graph| {
            let tags = graph.joined_tags();
            Choice::new(tags.clone(), Answer::Text(tags))
        })
        .collect())
}

/// Signatures of the meta-graph matching the selected tags
pub fn signature_choices(answers: &AnswerSet, reader: &dyn MetadataReader) -> Result<Vec<Choice>> {
    let (Some(path), Some(tags)) = (
        saved_model_path(answers),
        answers.text(QuestionKey::SavedModelTags),
    ) else {
        return Ok(Vec::new());
    };

    let graphs = reader.read_metadata(Path::new(path))?;
    let Some(graph) = graphs.iter().find(|g| g.joined_tags() == tags) else {
        return Ok(Vec::new());
    };

    Ok(graph
        .signatures
        .iter()
        .map(|sig| {
            Choice::new(
                format_signature(&sig.name, &sig.inputs, &sig.outputs),
                Answer::Text(sig.name.clone()),
            )
        })
        .collect())
}

/// Render a signature and its tensors as a multi-line choice label
pub fn format_signature(name: &str, inputs: &[TensorInfo], outputs: &[TensorInfo]) -> String {
    format!(
        "signature name: {}\n        inputs: \n{}        outputs: \n{}",
        name,
        format_tensors(inputs),
        format_tensors(outputs)
    )
}

fn format_tensors(tensors: &[TensorInfo]) -> String {
    tensors
        .iter()
        .map(|t| {
            let shape = match &t.shape {
                Some(dims) => format!("{:?}", dims),
                None => "Unknown".to_string(),
            };
            format!(
                "              name: {}, dtype: {}, shape: {}\n",
                t.name, t.dtype, shape
            )
        })
        .collect()
}
