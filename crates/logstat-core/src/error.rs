use std::path::PathBuf;
use thiserror::Error;

/// A line that does not conform to the access-log grammar.
///
/// Returned by the parser as a value, never raised: the caller decides
/// whether to count, log or silently drop the line. Carries no partial
/// data — either the whole line parses or none of it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line does not match the access log format")]
pub struct ParseRejection;

/// All errors produced by logstat outside the pure parsing core.
#[derive(Error, Debug)]
pub enum LogStatError {
    /// A log file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The given log path does not exist.
    #[error("Log path not found: {0}")]
    LogPathNotFound(PathBuf),

    /// No `.log` files were found under the given directory.
    #[error("No log files found in {0}")]
    NoLogFiles(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be serialised to JSON.
    #[error("Failed to render JSON report: {0}")]
    JsonRender(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the logstat crates.
pub type Result<T> = std::result::Result<T, LogStatError>;
