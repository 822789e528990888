//! Writes .adjg files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::{FileHeader, HEADER_SIZE};
use crate::types::{now_micros, Direction, Multiplicity, ADJG_MAGIC, FORMAT_VERSION};

use super::compression::compress_properties;

/// Size of a single edge record on disk: 16 bytes.
pub(crate) const EDGE_RECORD_SIZE: u64 = 16;

/// Check where a header places the edge table and return the table's end offset.
///
/// Offsets come from untrusted input, so all arithmetic is checked.
pub(crate) fn edge_table_end(header: &FileHeader, file_len: u64) -> GraphResult<u64> {
    if header.node_count > u32::MAX as u64 {
        return Err(GraphError::Corrupt(16));
    }
    if header.edge_table_offset < HEADER_SIZE {
        return Err(GraphError::Corrupt(40));
    }
    let end = header
        .edge_count
        .checked_mul(EDGE_RECORD_SIZE)
        .and_then(|len| len.checked_add(header.edge_table_offset))
        .ok_or(GraphError::Truncated)?;
    if end > file_len {
        return Err(GraphError::Truncated);
    }
    Ok(end)
}

/// Writer for .adjg binary files.
///
/// Edges are written in `edges()` order, so pruned slots disappear and the
/// reloaded graph numbers its edges densely.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter;

impl GraphWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write a complete Graph to an .adjg file.
    pub fn write_to_file<D, M, N, E>(&self, graph: &Graph<D, M, N, E>, path: &Path) -> GraphResult<()>
    where
        D: Direction,
        M: Multiplicity,
        N: Serialize,
        E: Serialize,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)
    }

    /// Write a complete Graph to any writer.
    pub fn write_to<D, M, N, E>(
        &self,
        graph: &Graph<D, M, N, E>,
        writer: &mut impl Write,
    ) -> GraphResult<()>
    where
        D: Direction,
        M: Multiplicity,
        N: Serialize,
        E: Serialize,
    {
        let edge_count = graph.edge_count() as u64;

        // Step 1: Compress property blocks
        let node_block = compress_properties(graph.node_properties())?;
        let edge_props: Vec<&E> = graph
            .edges()
            .filter_map(|e| graph.edge_property(e))
            .collect();
        let edge_block = compress_properties(&edge_props)?;

        // Step 2: Calculate section offsets
        let edge_table_offset = HEADER_SIZE;
        let node_props_offset = edge_table_offset + edge_count * EDGE_RECORD_SIZE;
        let edge_props_offset = node_props_offset + node_block.len() as u64;

        // Step 3: Write header
        let header = FileHeader {
            magic: ADJG_MAGIC,
            version: FORMAT_VERSION,
            direction: D::KIND,
            multi: M::ALLOWS_PARALLEL,
            node_count: graph.node_count() as u64,
            edge_count,
            created_at: now_micros(),
            edge_table_offset,
            node_props_offset,
            edge_props_offset,
        };
        header.write_to(writer)?;

        // Step 4: Write edge table
        for edge in graph.edges() {
            let (source, target) = graph.endpoints(edge);
            writer.write_all(&(source.index() as u64).to_le_bytes())?; // 8 bytes
            writer.write_all(&(target.index() as u64).to_le_bytes())?; // 8 bytes
        }

        // Step 5: Write property blocks
        writer.write_all(&node_block)?;
        writer.write_all(&edge_block)?;

        writer.flush()?;
        debug!(
            "wrote {} graph: {} nodes, {} edges, {} bytes",
            header.config_name(),
            header.node_count,
            header.edge_count,
            edge_props_offset + edge_block.len() as u64
        );
        Ok(())
    }
}
