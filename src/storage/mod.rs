use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::theme::ThemeDocument;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write theme: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read theme: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to serialize theme")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse theme: {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Writes a theme document to one fixed file.
#[derive(Debug, Clone)]
pub struct ThemeWriter {
    path: PathBuf,
}

impl ThemeWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, document: &ThemeDocument) -> StorageResult<()> {
        write_theme(document, &self.path)
    }
}

/// Pretty-printed JSON with two-space indentation and no trailing newline.
pub fn serialize_theme(document: &ThemeDocument) -> StorageResult<String> {
    serde_json::to_string_pretty(document).map_err(StorageError::Serialize)
}

/// Creates or truncates `path` with the serialized document. The parent
/// directory must already exist.
pub fn write_theme(document: &ThemeDocument, path: &Path) -> StorageResult<()> {
    let serialized = serialize_theme(document)?;
    fs::write(path, serialized.as_bytes()).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = serialized.len(), "wrote theme");
    Ok(())
}

pub fn read_theme(path: &Path) -> StorageResult<ThemeDocument> {
    let serialized = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&serialized).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
