//! Property blocks: JSON-encoded property arrays, LZ4-compressed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::error::{GraphError, GraphResult};

/// Encode `props` as a JSON array and compress with LZ4 (prepend size for decompression).
pub fn compress_properties<T: Serialize>(props: &[T]) -> GraphResult<Vec<u8>> {
    let json = serde_json::to_vec(props).map_err(|e| GraphError::Property(e.to_string()))?;
    Ok(lz4_flex::compress_prepend_size(&json))
}

/// Decompress a property block and decode its JSON array.
pub fn decompress_properties<T: DeserializeOwned>(data: &[u8]) -> GraphResult<Vec<T>> {
    let json = lz4_flex::decompress_size_prepended(data)
        .map_err(|e| GraphError::Compression(e.to_string()))?;
    serde_json::from_slice(&json).map_err(|e| GraphError::Property(e.to_string()))
}
