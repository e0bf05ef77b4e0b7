// src/error.rs - Failures surfaced to the status bar

use crate::buffer::BufferError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("Invalid path: '{0}'")]
    InvalidPath(String),
    #[error("Not a UTF-8 text file: {}", .0.display())]
    InvalidEncoding(PathBuf),
    #[error("No text selected")]
    EmptySelection,
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl EditorError {
    /// Classify a failed read or write of `path`.
    pub fn from_file(path: &Path, err: BufferError) -> Self {
        let BufferError::Io(source) = err else {
            return EditorError::Buffer(err);
        };
        match source.kind() {
            ErrorKind::NotFound => EditorError::FileNotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => EditorError::PermissionDenied(path.to_path_buf()),
            ErrorKind::InvalidData => EditorError::InvalidEncoding(path.to_path_buf()),
            ErrorKind::InvalidInput | ErrorKind::IsADirectory => {
                EditorError::InvalidPath(path.display().to_string())
            }
            _ => EditorError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
