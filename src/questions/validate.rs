//! Answer validators
//!
//! Each validator returns `Ok(())` or the reason shown to the user when the
//! question is asked again. The only side effects are filesystem reads.

use std::path::Path;

use crate::model::{dir_contains_extension, expand_path, has_extension, is_url, Format};

/// Validate the first, format-agnostic input path answer
pub fn validate_nonempty_path(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Please enter a valid path".to_string())
    } else {
        Ok(())
    }
}

/// Validate an input path against the chosen input format
pub fn validate_input_path(value: &str, format: Format) -> Result<(), String> {
    let path = expand_path(value.trim());
    if path.is_empty() {
        return Err("Please enter a valid path".to_string());
    }

    if format == Format::TfHub {
        if !is_url(&path) {
            return Err(format!(
                "This is not a valid URL for TFHub module: {}, \
                 we expect a URL that starts with http(s)://",
                path
            ));
        }
        return Ok(());
    }

    let fs_path = Path::new(&path);
    if !fs_path.exists() {
        return Err(format!("Nonexistent path for the model: {}", path));
    }

    match format {
        Format::TfSavedModel | Format::KerasSavedModel => {
            require_dir_or_file_with(fs_path, &path, "pb")
        }
        Format::TfjsLayersModel => require_dir_or_file_with(fs_path, &path, "json"),
        Format::KerasHdf5 => {
            if fs_path.is_file() {
                Ok(())
            } else {
                Err(format!("The path provided is not a file: {}", path))
            }
        }
        Format::TfHub | Format::TfjsGraphModel => Ok(()),
    }
}

fn require_dir_or_file_with(fs_path: &Path, path: &str, ext: &str) -> Result<(), String> {
    if fs_path.is_dir() {
        if dir_contains_extension(fs_path, ext) {
            Ok(())
        } else {
            Err(format!(
                "Did not find a .{} file inside the directory: {}",
                ext, path
            ))
        }
    } else if has_extension(path, ext) {
        Ok(())
    } else {
        Err(format!(
            "The path provided is not a directory or .{} file: {}",
            ext, path
        ))
    }
}

/// Validate the output path: it must be given and must not exist yet
pub fn validate_output_path(value: &str) -> Result<(), String> {
    let path = expand_path(value.trim());
    if path.is_empty() {
        return Err("Please provide a valid output path".to_string());
    }
    if Path::new(&path).exists() {
        return Err(format!("The output path already exists: {}", path));
    }
    Ok(())
}

/// Validate the weight shard size (a positive byte count)
pub fn validate_shard_size(value: &str) -> Result<(), String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("Shard size must be greater than 0 bytes".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("'{}' is not a valid number of bytes", value.trim())),
    }
}
