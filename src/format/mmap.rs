//! Memory-mapped file access for .adjg files.

use std::collections::HashMap;
use std::path::Path;

use memmap2::Mmap;

use crate::types::error::{GraphError, GraphResult};
use crate::types::header::{read_u64, FileHeader, HEADER_SIZE};

use super::writer::{edge_table_end, EDGE_RECORD_SIZE};

/// Summary of an edge table, computed without decoding properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeStats {
    /// Largest out-degree (as stored, i.e. counting each edge at its source).
    pub max_out_degree: u64,
    /// Largest in-degree.
    pub max_in_degree: u64,
    /// Nodes with no incident edge at all.
    pub isolated: u64,
    /// Edges whose source equals their target.
    pub self_loops: u64,
}

/// Read-only memory-mapped access to an .adjg file.
pub struct MmapReader {
    mmap: Mmap,
    header: FileHeader,
}

impl MmapReader {
    /// Open an .adjg file for memory-mapped read access.
    pub fn open(path: &Path) -> GraphResult<Self> {
        let file = std::fs::File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if (mmap.len() as u64) < HEADER_SIZE {
            return Err(GraphError::Truncated);
        }

        let header = FileHeader::read_from(&mut std::io::Cursor::new(&mmap[..64]))?;

        edge_table_end(&header, mmap.len() as u64)?;

        Ok(Self { mmap, header })
    }

    /// Get the file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Total mapped size in bytes.
    pub fn file_size(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Read the `(source, target)` node indices of the `index`-th stored edge (O(1) access).
    pub fn edge_endpoints(&self, index: u64) -> GraphResult<(u64, u64)> {
        if index >= self.header.edge_count {
            return Err(GraphError::EdgeNotFound(index));
        }
        let offset = (self.header.edge_table_offset + index * EDGE_RECORD_SIZE) as usize;
        let source = read_u64(&self.mmap, offset);
        let target = read_u64(&self.mmap, offset + 8);
        if source >= self.header.node_count || target >= self.header.node_count {
            return Err(GraphError::Corrupt(offset as u64));
        }
        Ok((source, target))
    }

    /// Iterate over all stored edge records.
    pub fn edge_records(&self) -> impl Iterator<Item = GraphResult<(u64, u64)>> + '_ {
        (0..self.header.edge_count).map(move |i| self.edge_endpoints(i))
    }

    /// Degree statistics over the edge table.
    ///
    /// Memory is bounded by the nodes the table touches, not the header's node count.
    pub fn degree_stats(&self) -> GraphResult<DegreeStats> {
        // node index -> (out, in)
        let mut degrees: HashMap<u64, (u64, u64)> = HashMap::new();
        let mut stats = DegreeStats::default();

        for record in self.edge_records() {
            let (source, target) = record?;
            degrees.entry(source).or_default().0 += 1;
            degrees.entry(target).or_default().1 += 1;
            if source == target {
                stats.self_loops += 1;
            }
        }

        stats.max_out_degree = degrees.values().map(|d| d.0).max().unwrap_or(0);
        stats.max_in_degree = degrees.values().map(|d| d.1).max().unwrap_or(0);
        stats.isolated = self.header.node_count - degrees.len() as u64;
        Ok(stats)
    }
}
