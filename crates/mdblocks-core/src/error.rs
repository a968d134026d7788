//! Error types for mdblocks

use thiserror::Error;

/// Main error type for mdblocks operations
#[derive(Error, Debug)]
pub enum MdBlocksError {
    /// A setext underline (`===` or `---`) without a paragraph right above it
    #[error("Header syntax error on line {line}: setext underline must follow a paragraph")]
    HeaderSyntax { line: usize },

    /// The cursor reached a state the classifier should never produce
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mdblocks operations
pub type Result<T> = std::result::Result<T, MdBlocksError>;
