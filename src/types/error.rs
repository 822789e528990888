//! Error types for the adjgraph library.

use thiserror::Error;

/// All recoverable errors that can occur in the adjgraph library.
///
/// Misuse of the in-memory API (foreign handles, pruned edge handles) is a
/// programming error and panics instead of producing one of these.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The input does not start with the .adjg magic.
    #[error("Not an .adjg archive (bad magic bytes)")]
    InvalidMagic,

    /// Archive written by an unknown format version.
    #[error("Unsupported .adjg format version: {0}")]
    UnsupportedVersion(u32),

    /// Node handle does not belong to the graph.
    #[error("Node {0} not found")]
    NodeNotFound(u64),

    /// Edge handle does not refer to a live edge.
    #[error("Edge {0} not found")]
    EdgeNotFound(u64),

    /// The stored graph configuration differs from the requested graph type.
    #[error("Graph configuration mismatch: file is {found}, expected {expected}")]
    ConfigMismatch { expected: String, found: String },

    /// Underlying read or write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A property block could not be decompressed.
    #[error("Compression error: {0}")]
    Compression(String),

    /// Node or edge property could not be encoded or decoded.
    #[error("Property encoding error: {0}")]
    Property(String),

    /// Archive ends before a section it declares.
    #[error("Archive is empty or truncated")]
    Truncated,

    /// Inconsistent archive contents, located by byte offset.
    #[error("Corrupt archive data at offset {0}")]
    Corrupt(u64),
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
