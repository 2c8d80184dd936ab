//! Error types for the MeSH CLI
//!
//! Every variant is user-facing and says what to check next.

use mesh_common::MeshError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Required file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// No heading registered at a tree number
    #[error("No term at tree number '{0}'. Run 'mesh hierarchy' to list the available tree numbers.")]
    PathNotFound(String),

    /// No heading with the given name
    #[error("Unknown term: '{0}'. Term names are case-sensitive.")]
    TermNotFound(String),

    /// Loading or indexing the vocabulary failed
    #[error("{0}")]
    Mesh(#[from] MeshError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// JSON output failed
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions.")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
