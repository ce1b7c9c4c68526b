//! Source file discovery and table naming.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CsvSqlError, Result};

/// Derive a table name from a source file name.
///
/// Takes the base name without extension and cuts it at the last underscore:
/// `orders_2024.csv` becomes `orders`. Names without an underscore, or whose
/// only underscore is the first character, are used whole.
pub fn derive_table_name(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.rsplit_once('_') {
        Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
        _ => stem,
    }
}

/// List regular files in `dir` whose extension matches `extension`.
///
/// The match ignores ASCII case. Results are sorted by file name so repeated
/// runs see the same order.
pub fn list_source_files(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| CsvSqlError::InputDirectory {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CsvSqlError::InputDirectory {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
