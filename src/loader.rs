//! Source directory scanning.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// File extension recognized as a command document.
pub const DOC_EXTENSION: &str = "md";

/// A markdown file read from the source directory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub file_name: String,
    pub content: String,
}

/// Read every `.md` file directly inside `dir` (non-recursive).
///
/// Files are returned sorted by name so the generated output does not depend
/// on directory listing order.
pub fn load_dir(dir: &Path) -> Result<Vec<SourceFile>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXTENSION) {
            continue;
        }
        if !path.is_file() {
            log::debug!("skipping {}: not a regular file", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = fs::read(&path).map_err(|source| Error::ReadFile {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|source| Error::Decode {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("loaded {} ({} bytes)", path.display(), content.len());
        files.push(SourceFile { file_name, content });
    }

    Ok(files)
}
