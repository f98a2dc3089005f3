//! Reading metadata documents from disk.

use std::path::{Path, PathBuf};

use moonrank_common::{Metadata, MoonrankError, Result};
use moonrank_ranker::SourceDocument;
use tracing::debug;

/// All `*.json` files directly inside `dir`, sorted by path.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| MoonrankError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MoonrankError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    debug!("found {} metadata files in {}", files.len(), dir.display());
    Ok(files)
}

pub fn load_documents(files: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path).map_err(|e| MoonrankError::io(path, e))?;
            Ok(SourceDocument::new(path.display().to_string(), bytes))
        })
        .collect()
}

/// Stable asset identifier: base58 of "<file name>:<asset name>".
pub fn stable_id(document: &SourceDocument, metadata: &Metadata) -> String {
    let base = Path::new(&document.source)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| document.source.clone());
    bs58::encode(format!("{base}:{}", metadata.name)).into_string()
}
