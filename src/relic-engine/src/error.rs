//! Engine error type

/// Errors returned by index loading and relic queries
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown relic: {0}")]
    UnknownRelic(String),

    #[error("Unknown refinement: {0}")]
    UnknownRefinement(String),

    #[error("Unknown run strategy: {0}")]
    UnknownStrategy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),
}
