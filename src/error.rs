//! Error types for Tuyau
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tuyau operations
pub type TuyauResult<T> = Result<T, TuyauError>;

/// Main error type for Tuyau operations
#[derive(Error, Debug)]
pub enum TuyauError {
    /// Name does not carry enough underscore-separated segments
    #[error("malformed name '{name}' - expected at least {expected} underscore-separated segments, found {found}")]
    TooFewSegments {
        name: String,
        expected: usize,
        found: usize,
    },

    /// File name has no `.` extension
    #[error("malformed file name '{name}' - missing '.' extension")]
    MissingExtension { name: String },

    /// Increment segment is not a plain integer
    #[error("malformed file name '{name}' - increment segment '{segment}' is not a number")]
    InvalidIncrement { name: String, segment: String },

    /// Unknown sub-folder kind requested by name (CLI/string boundary)
    #[error("unknown folder kind '{kind}' - expected one of: {expected}")]
    UnknownFolderKind {
        kind: String,
        expected: &'static str,
    },

    /// Unknown texture channel requested by name
    #[error("unknown texture channel '{channel}' - expected one of: {expected}")]
    UnknownChannel {
        channel: String,
        expected: &'static str,
    },

    /// Unknown texture resolution requested by name
    #[error("unknown resolution '{value}' - expected 512, 1024, 2048, 4096 or 8192")]
    UnknownResolution { value: String },

    /// Work-file path is too shallow to split into pipeline folders
    #[error("path '{path}' is too shallow to locate a work file - expected <project>/<dpt>/<asset>/wip/<app>/<file>")]
    UnresolvableWorkPath { path: PathBuf },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Target folder already exists
    #[error("'{path}' already exists")]
    AlreadyExists { path: PathBuf },

    /// A required name was empty
    #[error("{what} is empty")]
    EmptyName { what: &'static str },

    /// Project is not present in the registry
    #[error("unknown project '{name}' - not in the project registry")]
    UnknownProject { name: String },

    /// Invalid config file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Corrupted bookkeeping file (tracker or registry)
    #[error("corrupted data file {file}: {message}")]
    CorruptedData { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
