//! Ingestion error type

use relic_engine::EngineError;

/// Errors raised while fetching or parsing source data
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decompression failed: {0}")]
    Decompress(String),

    #[error("Invalid selector {selector}: {message}")]
    Selector { selector: &'static str, message: String },

    #[error("Export index has no {0} entry")]
    MissingExport(&'static str),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
