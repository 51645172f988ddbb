//! Error types for the fallible edges of the crate.
//!
//! Drawing and style operations never fail; only file I/O, template parsing
//! and debugger property edits report errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or saving a [`ShapePainterTemplate`](crate::template::ShapePainterTemplate).
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to access template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid template json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while writing render output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rejected debugger property edit. State is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("invalid color {0:?}: expected at least three `;`-separated values")]
    InvalidColor(String),
}
