//! File header for .adjg binary files.

use std::io::{Read, Write};

use crate::types::error::{GraphError, GraphResult};
use crate::types::kind::{describe_config, DirectionKind};
use crate::types::{ADJG_MAGIC, FORMAT_VERSION};

/// Header of an .adjg file. Fixed size: 64 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
    /// Magic bytes: [0x41, 0x44, 0x4A, 0x47] ("ADJG").
    pub magic: [u8; 4],
    /// Format version (currently 1).
    pub version: u32,
    /// Directionality of the stored graph.
    pub direction: DirectionKind,
    /// Whether the stored graph keeps parallel edges.
    pub multi: bool,
    /// Total number of nodes in the file.
    pub node_count: u64,
    /// Total number of edges in the file.
    pub edge_count: u64,
    /// When the file was written (Unix epoch microseconds).
    pub created_at: u64,
    /// Byte offset where the edge table starts.
    pub edge_table_offset: u64,
    /// Byte offset where the node property block starts.
    pub node_props_offset: u64,
    /// Byte offset where the edge property block starts.
    pub edge_props_offset: u64,
}

/// The fixed size of a FileHeader on disk: 64 bytes.
pub const HEADER_SIZE: u64 = 64;

impl FileHeader {
    /// Create a new header for an empty graph of the given configuration.
    pub fn new(direction: DirectionKind, multi: bool) -> Self {
        Self {
            magic: ADJG_MAGIC,
            version: FORMAT_VERSION,
            direction,
            multi,
            node_count: 0,
            edge_count: 0,
            created_at: 0,
            edge_table_offset: HEADER_SIZE,
            node_props_offset: HEADER_SIZE,
            edge_props_offset: HEADER_SIZE,
        }
    }

    /// Human-readable configuration, e.g. `directed/multi`.
    pub fn config_name(&self) -> String {
        describe_config(self.direction, self.multi)
    }

    /// Write this header to the given writer. Writes exactly 64 bytes.
    ///
    /// Layout (all little-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04..0x08: version (u32, 4 bytes)
    /// - 0x08: direction tag (u8)
    /// - 0x09: multi flag (u8)
    /// - 0x0A..0x10: _reserved (6 bytes, written as 0)
    /// - 0x10..0x18: node_count (u64, 8 bytes)
    /// - 0x18..0x20: edge_count (u64, 8 bytes)
    /// - 0x20..0x28: created_at (u64, 8 bytes)
    /// - 0x28..0x30: edge_table_offset (u64, 8 bytes)
    /// - 0x30..0x38: node_props_offset (u64, 8 bytes)
    /// - 0x38..0x40: edge_props_offset (u64, 8 bytes)
    ///   Total: 64 bytes
    pub fn write_to(&self, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&[self.direction as u8, self.multi as u8])?;
        writer.write_all(&[0u8; 6])?; // _reserved
        writer.write_all(&self.node_count.to_le_bytes())?;
        writer.write_all(&self.edge_count.to_le_bytes())?;
        writer.write_all(&self.created_at.to_le_bytes())?;
        writer.write_all(&self.edge_table_offset.to_le_bytes())?;
        writer.write_all(&self.node_props_offset.to_le_bytes())?;
        writer.write_all(&self.edge_props_offset.to_le_bytes())?;
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 64 bytes.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Self> {
        let mut buf = [0u8; 64];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                GraphError::Truncated
            } else {
                GraphError::Io(e)
            }
        })?;

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != ADJG_MAGIC {
            return Err(GraphError::InvalidMagic);
        }

        let version = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        if version != FORMAT_VERSION {
            return Err(GraphError::UnsupportedVersion(version));
        }

        let direction = DirectionKind::from_u8(buf[8]).ok_or(GraphError::Corrupt(8))?;
        let multi = match buf[9] {
            0 => false,
            1 => true,
            _ => return Err(GraphError::Corrupt(9)),
        };
        // bytes 10..16 are reserved

        Ok(Self {
            magic,
            version,
            direction,
            multi,
            node_count: read_u64(&buf, 16),
            edge_count: read_u64(&buf, 24),
            created_at: read_u64(&buf, 32),
            edge_table_offset: read_u64(&buf, 40),
            node_props_offset: read_u64(&buf, 48),
            edge_props_offset: read_u64(&buf, 56),
        })
    }
}

/// Read a little-endian u64 at `offset`. The caller guarantees 8 bytes are available.
pub(crate) fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}
