//! Error types for the urban intelligence router.

use thiserror::Error;

/// Result type alias using the router's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type.
///
/// Unmatched or empty utterances are never errors; they resolve to the
/// fallback response. These variants cover faults inside the router, its
/// handlers and the surfaces that host them.
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Router Errors
    // =========================================================================
    #[error("Invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown intent category: {0}")]
    UnknownCategory(String),

    // =========================================================================
    // Knowledge Base Errors
    // =========================================================================
    #[error("Missing knowledge base entry: {0}")]
    MissingKnowledge(String),

    #[error("Failed to load knowledge base: {0}")]
    KnowledgeLoad(String),

    // =========================================================================
    // Surface Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Gateway error: {0}")]
    Gateway(String),

    // =========================================================================
    // Generic Errors
    // =========================================================================
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a missing knowledge error.
    pub fn missing_knowledge(key: impl Into<String>) -> Self {
        Self::MissingKnowledge(key.into())
    }

    /// Create a knowledge load error.
    pub fn knowledge_load(msg: impl Into<String>) -> Self {
        Self::KnowledgeLoad(msg.into())
    }

    /// Create a gateway error.
    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
