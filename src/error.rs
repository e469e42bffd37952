//! Error types for Notedex
//!
//! The interactive surfaces (query persistence, scroll sync, cursor
//! placement) deliberately degrade to no-ops instead of erroring, so the
//! taxonomy here is narrow: terminal I/O, catalog lookups, and output
//! encoding for the one-shot CLI commands.

use thiserror::Error;

/// Main error type for Notedex operations
#[derive(Error, Debug)]
pub enum NotedexError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("unknown topic path '{0}'")]
    UnknownTopic(String),

    #[error("invalid output format '{0}' (expected 'text' or 'json')")]
    InvalidOutputFormat(String),

    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for Notedex operations
pub type Result<T> = std::result::Result<T, NotedexError>;
