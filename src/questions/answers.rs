//! Answer set accumulated over a session

use std::fmt;

use crate::model::Format;

/// Key of a question, also the converter flag name it turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    InputPath,
    InputFormat,
    OutputFormat,
    SavedModelTags,
    SignatureName,
    QuantizationBytes,
    WeightShardSizeByte,
    SplitWeightsByLayer,
    SkipOpCheck,
    StripDebugOps,
    OutputPath,
}

impl QuestionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKey::InputPath => "input_path",
            QuestionKey::InputFormat => "input_format",
            QuestionKey::OutputFormat => "output_format",
            QuestionKey::SavedModelTags => "saved_model_tags",
            QuestionKey::SignatureName => "signature_name",
            QuestionKey::QuantizationBytes => "quantization_bytes",
            QuestionKey::WeightShardSizeByte => "weight_shard_size_byte",
            QuestionKey::SplitWeightsByLayer => "split_weights_by_layer",
            QuestionKey::SkipOpCheck => "skip_op_check",
            QuestionKey::StripDebugOps => "strip_debug_ops",
            QuestionKey::OutputPath => "output_path",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
    Format(Format),
    Number(u64),
    /// Answered, but with nothing to pass on (e.g. "no compression")
    Unset,
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_format(&self) -> Option<Format> {
        match self {
            Answer::Format(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(s) => f.write_str(s),
            Answer::Flag(b) => write!(f, "{}", b),
            Answer::Format(format) => f.write_str(format.key()),
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Unset => Ok(()),
        }
    }
}

/// Answers keyed by question, in the order the questions were first answered.
///
/// Answering a key again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(QuestionKey, Answer)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: QuestionKey, answer: Answer) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = answer,
            None => self.entries.push((key, answer)),
        }
    }

    pub fn get(&self, key: QuestionKey) -> Option<&Answer> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, a)| a)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.get(key).is_some()
    }

    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        self.get(key).and_then(Answer::as_text)
    }

    pub fn format(&self, key: QuestionKey) -> Option<Format> {
        self.get(key).and_then(Answer::as_format)
    }

    /// Chosen input format, if the format question has been answered
    pub fn input_format(&self) -> Option<Format> {
        self.format(QuestionKey::InputFormat)
    }

    /// Whether the answer for `key` is one of `formats`; false when unanswered
    pub fn format_in(&self, key: QuestionKey, formats: &[Format]) -> bool {
        self.format(key).is_some_and(|f| formats.contains(&f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &Answer)> {
        self.entries.iter().map(|(k, a)| (*k, a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionKey::OutputPath, Answer::Text("/out".into()));
        answers.insert(QuestionKey::InputPath, Answer::Text("/in".into()));

        let keys: Vec<QuestionKey> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![QuestionKey::OutputPath, QuestionKey::InputPath]);
    }

    #[test]
    fn test_reanswer_replaces_in_place() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionKey::InputPath, Answer::Text("/a".into()));
        answers.insert(QuestionKey::InputFormat, Answer::Format(Format::TfHub));
        answers.insert(QuestionKey::InputPath, Answer::Text("/b".into()));

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.text(QuestionKey::InputPath), Some("/b"));
        assert_eq!(answers.iter().next().unwrap().0, QuestionKey::InputPath);
    }

    #[test]
    fn test_format_in_unanswered_is_false() {
        let answers = AnswerSet::new();
        assert!(!answers.format_in(QuestionKey::InputFormat, &[Format::TfHub]));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Format(Format::TfSavedModel).to_string(), "tf_saved_model");
        assert_eq!(Answer::Number(2).to_string(), "2");
        assert_eq!(Answer::Unset.to_string(), "");
    }
}
