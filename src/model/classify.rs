//! Input path classification
//!
//! Guesses the model format from a path or URL so the format question can
//! offer the detected format first.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::Format;

/// `format` value written by TensorFlow.js into a layers-model `model.json`
const LAYERS_MODEL_FORMAT: &str = "layers-model";

/// Result of classifying an input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Detected format, `None` when nothing matched
    pub format: Option<Format>,
    /// Path to use for the conversion (a layers-model directory resolves to its JSON file)
    pub path: String,
}

#[derive(Deserialize)]
struct ModelJson {
    format: Option<String>,
}

/// Whether the value looks like an `http://` or `https://` URL (case-insensitive)
pub fn is_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Expand a leading `~` and make a filesystem path absolute.
///
/// URLs and empty strings are returned as-is.
pub fn expand_path(raw: &str) -> String {
    if raw.is_empty() || is_url(raw) {
        return raw.to_string();
    }

    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            match dirs::home_dir() {
                Some(home) if rest.is_empty() => home,
                Some(home) => home.join(rest.trim_start_matches(|c: char| c == '/' || c == '\\')),
                None => PathBuf::from(raw),
            }
        }
        _ => PathBuf::from(raw),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    };
    absolute.display().to_string()
}

/// Whether the file name ends with `.{ext}`, ignoring case
pub fn has_extension(name: &str, ext: &str) -> bool {
    name.to_ascii_lowercase().ends_with(&format!(".{}", ext))
}

/// Entries of a directory sorted by file name.
///
/// Listing order is platform dependent, sorting keeps detection reproducible.
pub fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => return Vec::new(),
    };
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    entries
}

/// Whether any entry of the directory has the given extension
pub fn dir_contains_extension(dir: &Path, ext: &str) -> bool {
    first_with_extension(dir, ext).is_some()
}

/// First directory entry (by name) with the given extension
pub fn first_with_extension(dir: &Path, ext: &str) -> Option<PathBuf> {
    sorted_entries(dir).into_iter().find(|p| {
        p.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| has_extension(n, ext))
    })
}

/// Whether a JSON file declares `"format": "layers-model"`.
///
/// Unreadable or malformed files simply do not match.
pub fn is_layers_model_json(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<ModelJson>(&contents) {
        Ok(model) => model.format.as_deref() == Some(LAYERS_MODEL_FORMAT),
        Err(e) => {
            debug!("Ignoring malformed JSON {}: {}", path.display(), e);
            false
        }
    }
}

/// Detect the model format of a path or URL.
///
/// First match wins: URL, directory with a `.pb` file, directory with a
/// layers-model JSON, then a regular file by extension.
pub fn classify(raw: &str) -> Classification {
    let unchanged = |format| Classification {
        format,
        path: raw.to_string(),
    };

    if is_url(raw) {
        debug!("{} is a URL, assuming TFHub module", raw);
        return unchanged(Some(Format::TfHub));
    }

    let path = Path::new(raw);
    if path.is_dir() {
        if dir_contains_extension(path, "pb") {
            return unchanged(Some(Format::TfSavedModel));
        }

        let json_files = sorted_entries(path).into_iter().filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| has_extension(n, "json"))
        });
        for json in json_files {
            if json.is_file() && is_layers_model_json(&json) {
                debug!("Found layers model {}", json.display());
                return Classification {
                    format: Some(Format::TfjsLayersModel),
                    path: json.display().to_string(),
                };
            }
        }
        return unchanged(None);
    }

    if path.is_file() {
        let format = if has_extension(raw, "hdf5") {
            Some(Format::KerasHdf5)
        } else if has_extension(raw, "pb") {
            Some(Format::TfSavedModel)
        } else if has_extension(raw, "json") && is_layers_model_json(path) {
            Some(Format::TfjsLayersModel)
        } else {
            None
        };
        return unchanged(format);
    }

    unchanged(None)
}
