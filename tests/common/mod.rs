//! Shared test utilities: scripted prompter, fake metadata and model fixtures

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tfjs_wizard::cli::{InputValidator, Prompter};
use tfjs_wizard::convert::Converter;
use tfjs_wizard::error::{Result, WizardError};
use tfjs_wizard::model::{MetaGraph, MetadataReader, Signature, TensorInfo};
use tfjs_wizard::questions::Choice;

/// A scripted reply to the next prompt
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Confirm(bool),
    Select(usize),
}

pub fn text(value: impl Into<String>) -> Reply {
    Reply::Text(value.into())
}

/// Prompter that answers from a script and records what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    /// Every message shown, in order (re-prompts included once)
    pub messages: Vec<String>,
    /// Validation reasons returned for rejected text replies
    pub rejections: Vec<String>,
    /// Choices offered by each select prompt
    pub offered: Vec<Vec<Choice>>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, message: &str) -> Reply {
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted at prompt: {}", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String> {
        self.messages.push(message.to_string());
        loop {
            let value = match self.next(message) {
                Reply::Text(v) if v.is_empty() => default.unwrap_or_default().to_string(),
                Reply::Text(v) => v,
                other => panic!("expected text reply for '{}', got {:?}", message, other),
            };
            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(reason) => self.rejections.push(reason),
            }
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        self.messages.push(message.to_string());
        match self.next(message) {
            Reply::Confirm(b) => Ok(b),
            other => panic!("expected confirm reply for '{}', got {:?}", message, other),
        }
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<usize> {
        self.messages.push(message.to_string());
        self.offered.push(choices.to_vec());
        match self.next(message) {
            Reply::Select(i) => Ok(i),
            other => panic!("expected select reply for '{}', got {:?}", message, other),
        }
    }
}

/// Metadata reader serving fixed meta-graphs
pub struct FakeMetadata {
    graphs: Vec<MetaGraph>,
    fail: bool,
    pub reads: Cell<usize>,
}

impl FakeMetadata {
    pub fn new(graphs: Vec<MetaGraph>) -> Self {
        Self {
            graphs,
            fail: false,
            reads: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            graphs: Vec::new(),
            fail: true,
            reads: Cell::new(0),
        }
    }
}

impl MetadataReader for FakeMetadata {
    fn read_metadata(&self, path: &Path) -> Result<Vec<MetaGraph>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail {
            return Err(WizardError::Metadata {
                path: path.to_path_buf(),
                message: "Error parsing message".to_string(),
            });
        }
        Ok(self.graphs.clone())
    }
}

/// Converter that writes a small layers model into the output directory
#[derive(Default)]
pub struct FakeConverter {
    pub calls: std::cell::RefCell<Vec<Vec<String>>>,
}

impl Converter for FakeConverter {
    fn convert(&self, args: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(args.to_vec());
        let output = PathBuf::from(args.last().expect("output path"));
        fs::create_dir_all(&output)?;
        fs::write(output.join("model.json"), "{}")?;
        fs::write(output.join("group1-shard1of1.bin"), vec![0u8; 8])?;
        Ok(())
    }
}

pub fn tensor(key: &str, dtype: &str, shape: Option<Vec<i64>>) -> TensorInfo {
    TensorInfo {
        key: key.to_string(),
        name: format!("{}:0", key),
        dtype: dtype.to_string(),
        shape,
    }
}

/// Two meta-graphs: `serve` with one signature, `serve,gpu` with two
pub fn sample_meta_graphs() -> Vec<MetaGraph> {
    vec![
        MetaGraph {
            tags: vec!["serve".to_string()],
            signatures: vec![Signature {
                name: "serving_default".to_string(),
                inputs: vec![tensor("x", "DT_FLOAT", Some(vec![-1, 3]))],
                outputs: vec![tensor("y", "DT_FLOAT", None)],
            }],
        },
        MetaGraph {
            tags: vec!["serve".to_string(), "gpu".to_string()],
            signatures: vec![
                Signature {
                    name: "predict".to_string(),
                    inputs: vec![tensor("images", "DT_UINT8", Some(vec![-1, 224, 224, 3]))],
                    outputs: vec![tensor("scores", "DT_FLOAT", Some(vec![-1, 1000]))],
                },
                Signature {
                    name: "classify".to_string(),
                    inputs: vec![tensor("images", "DT_UINT8", None)],
                    outputs: vec![tensor("classes", "DT_INT64", Some(vec![-1]))],
                },
            ],
        },
    ]
}

/// Directory holding a saved model (`saved_model.pb` plus variables)
pub fn saved_model_dir(temp: &TempDir) -> PathBuf {
    let dir = temp.path().join("saved");
    fs::create_dir_all(dir.join("variables")).unwrap();
    fs::write(dir.join("saved_model.pb"), b"\x08\x01").unwrap();
    dir
}

/// Directory holding a layers model; returns (directory, model.json path)
pub fn layers_model_dir(temp: &TempDir) -> (PathBuf, PathBuf) {
    let dir = temp.path().join("layers");
    fs::create_dir_all(&dir).unwrap();
    let json = dir.join("model.json");
    fs::write(&json, r#"{"format": "layers-model", "modelTopology": {}}"#).unwrap();
    fs::write(dir.join("group1-shard1of1.bin"), b"weights").unwrap();
    (dir, json)
}

pub fn display(path: &Path) -> String {
    path.display().to_string()
}
