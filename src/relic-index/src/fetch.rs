//! Blocking HTTP and file source readers

use flate2::read::GzDecoder;
use relic_engine::RelicIndex;
use serde::de::DeserializeOwned;
use std::io::Read;

use crate::error::IngestError;

/// True when `source` should be fetched over HTTP rather than read from disk
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// GET `url` and return the body
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, IngestError> {
    tracing::info!(url, "fetching");

    let response = ureq::get(url).call().map_err(|e| IngestError::Http {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;

    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

/// GET `url` and decode the body as UTF-8 (lossy)
pub fn fetch_text(url: &str) -> Result<String, IngestError> {
    let body = fetch_bytes(url)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Read a URL or a local file path
pub fn read_source(source: &str) -> Result<Vec<u8>, IngestError> {
    if is_remote(source) {
        fetch_bytes(source)
    } else {
        tracing::info!(path = source, "reading");
        Ok(std::fs::read(source)?)
    }
}

/// Read a URL or local file as text
pub fn read_source_text(source: &str) -> Result<String, IngestError> {
    let bytes = read_source(source)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode gzip compressed JSON
pub fn decode_gzip_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, IngestError> {
    let mut json = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut json)
        .map_err(|e| IngestError::Decompress(format!("gzip: {e}")))?;
    Ok(serde_json::from_slice(&json)?)
}

/// GET a gzip compressed JSON document
pub fn fetch_gzip_json<T: DeserializeOwned>(url: &str) -> Result<T, IngestError> {
    decode_gzip_json(&fetch_bytes(url)?)
}

/// Load a published relic index from a URL or file
pub fn fetch_index(source: &str) -> Result<RelicIndex, IngestError> {
    let bytes = read_source(source)?;
    Ok(RelicIndex::from_bytes(&bytes)?)
}
