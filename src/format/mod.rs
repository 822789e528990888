//! Binary file I/O for .adjg files.

pub mod compression;
pub mod mmap;
pub mod reader;
pub mod writer;

pub use mmap::{DegreeStats, MmapReader};
pub use reader::GraphReader;
pub use writer::GraphWriter;
