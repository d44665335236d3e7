//! Saved model metadata (meta-graph tags and signatures)
//!
//! Reading a saved model's protobuf is delegated to TensorFlow through a short
//! Python helper which prints the meta-graphs as JSON.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WizardError};

/// Shape of a tensor, `None` when the rank is unknown
pub type TensorShape = Option<Vec<i64>>;

/// A tensor referenced by a signature input or output
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TensorInfo {
    /// Logical name inside the signature
    pub key: String,
    /// Graph tensor name, e.g. `serving_default_x:0`
    pub name: String,
    /// Data type name, e.g. `DT_FLOAT`
    pub dtype: String,
    #[serde(default)]
    pub shape: TensorShape,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signature {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<TensorInfo>,
    #[serde(default)]
    pub outputs: Vec<TensorInfo>,
}

/// One meta-graph of a saved model: its tag set and signatures, in file order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaGraph {
    pub tags: Vec<String>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

impl MetaGraph {
    /// Tags joined with commas, the form offered as a tag choice
    pub fn joined_tags(&self) -> String {
        self.tags.join(",")
    }
}

/// Reads the meta-graphs of a saved model
pub trait MetadataReader {
    fn read_metadata(&self, path: &Path) -> Result<Vec<MetaGraph>>;
}

const METADATA_SCRIPT: &str = r#"
import json, sys
from tensorflow.core.framework import types_pb2
from tensorflow.python.saved_model.loader_impl import parse_saved_model

def tensors(infos):
    out = []
    for key in infos:
        info = infos[key]
        shape = None
        if not info.tensor_shape.unknown_rank:
            shape = [d.size for d in info.tensor_shape.dim]
        out.append({"key": key, "name": info.name,
                    "dtype": types_pb2.DataType.Name(info.dtype), "shape": shape})
    return out

graphs = []
for graph in parse_saved_model(sys.argv[1]).meta_graphs:
    signatures = []
    for key in graph.signature_def:
        sig = graph.signature_def[key]
        signatures.append({"name": key, "inputs": tensors(sig.inputs),
                           "outputs": tensors(sig.outputs)})
    graphs.append({"tags": list(graph.meta_info_def.tags), "signatures": signatures})
print(json.dumps(graphs))
"#;

/// Metadata reader backed by the TensorFlow Python package
pub struct PythonMetadataReader {
    python_cmd: String,
}

impl PythonMetadataReader {
    pub fn new(python_cmd: impl Into<String>) -> Self {
        Self {
            python_cmd: python_cmd.into(),
        }
    }

    /// Saved model directory for a path that may point at the `.pb` file itself
    fn model_dir(path: &Path) -> PathBuf {
        if path.is_file() {
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            path.to_path_buf()
        }
    }
}

impl MetadataReader for PythonMetadataReader {
    fn read_metadata(&self, path: &Path) -> Result<Vec<MetaGraph>> {
        let dir = Self::model_dir(path);
        debug!("Reading saved model metadata from {}", dir.display());

        let output = Command::new(&self.python_cmd)
            .arg("-c")
            .arg(METADATA_SCRIPT)
            .arg(&dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| WizardError::Metadata {
                path: dir.clone(),
                message: format!("failed to start {}: {}", self.python_cmd, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WizardError::Metadata {
                path: dir,
                message: stderr.trim().lines().last().unwrap_or("unknown error").to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_metadata(&stdout)
    }
}

/// Parse the helper's output, skipping any log lines TensorFlow prints first.
pub fn parse_metadata(stdout: &str) -> Result<Vec<MetaGraph>> {
    let json = stdout
        .lines()
        .rev()
        .find(|line| line.trim_start().starts_with('['))
        .unwrap_or(stdout);
    serde_json::from_str(json)
        .map_err(|e| WizardError::MalformedMetadata(format!("{} - {}", e, json.trim())))
}
