//! All data types for the adjgraph library.

pub mod error;
pub mod handle;
pub mod header;
pub mod kind;

pub use error::{GraphError, GraphResult};
pub use handle::{EdgeHandle, NodeHandle};
pub use header::{FileHeader, HEADER_SIZE};
pub use kind::{
    describe_config, Bidirectional, Directed, Direction, DirectionKind, Multi, Multiplicity,
    Simple, Undirected,
};

/// Magic bytes at the start of every .adjg file.
pub const ADJG_MAGIC: [u8; 4] = [0x41, 0x44, 0x4A, 0x47]; // "ADJG"

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
