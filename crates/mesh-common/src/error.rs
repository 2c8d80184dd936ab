//! Error types for the MeSH browser

use thiserror::Error;

/// Result type alias for MeSH operations
pub type Result<T> = std::result::Result<T, MeshError>;

/// Main error type for MeSH operations
#[derive(Error, Debug)]
pub enum MeshError {
    /// A path identifier split into an empty segment
    #[error("Malformed path identifier '{path}'{}", term_suffix(.term))]
    MalformedPath { path: String, term: Option<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn term_suffix(term: &Option<String>) -> String {
    match term {
        Some(name) => format!(" on term '{}'", name),
        None => String::new(),
    }
}

impl MeshError {
    /// Create a malformed path error not yet tied to a term
    pub fn malformed_path(path: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            term: None,
        }
    }

    /// Attach the owning term name to a malformed path error
    pub fn for_term(self, name: &str) -> Self {
        match self {
            Self::MalformedPath { path, .. } => Self::MalformedPath {
                path,
                term: Some(name.to_string()),
            },
            other => other,
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
