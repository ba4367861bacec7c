//! Dashboard file reading, writing and naming

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Largest export file accepted for import
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

/// Longest name stem used for export file names
const MAX_STEM_CHARS: usize = 50;

/// Dashboard file errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Please select a JSON file: {0}")]
    NotJson(PathBuf),

    #[error("File is too large ({size} bytes). Please select a file smaller than 10MB.")]
    TooLarge { size: u64 },

    #[error("Error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON file. Please select a valid dashboard export. ({0})")]
    Parse(String),
}

/// Read and parse an export file, before any dashboard validation.
pub fn read_export(path: &Path) -> Result<Value, FileError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(FileError::NotJson(path.to_path_buf()));
    }

    let read_err = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_IMPORT_BYTES {
        return Err(FileError::TooLarge { size });
    }

    let contents = std::fs::read_to_string(path).map_err(read_err)?;
    serde_json::from_str(&contents).map_err(|e| FileError::Parse(e.to_string()))
}

/// Write a value as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), FileError> {
    let contents =
        serde_json::to_string_pretty(value).map_err(|e| FileError::Parse(e.to_string()))?;

    std::fs::write(path, contents).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// File name for an export record: `<Safe_Name>_dashboard_export.json`.
///
/// Characters other than ASCII letters, digits, whitespace, `-` and `_` are
/// removed, whitespace runs become `_`, and the stem is capped at 50 chars.
pub fn export_file_name(dashboard_name: &str) -> String {
    let kept: String = dashboard_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();

    let mut stem = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }

    let stem: String = stem.chars().take(MAX_STEM_CHARS).collect();
    if stem.is_empty() {
        "dashboard_dashboard_export.json".to_string()
    } else {
        format!("{}_dashboard_export.json", stem)
    }
}

/// File name for a legacy snapshot: `<name>_dashboard.json`, lowercased with
/// every non-alphanumeric character replaced by `_`.
pub fn legacy_file_name(dashboard_name: &str) -> String {
    let stem: String = dashboard_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_dashboard.json", stem)
}
