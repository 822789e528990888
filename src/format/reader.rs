//! Reads .adjg files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::header::{read_u64, FileHeader, HEADER_SIZE};
use crate::types::{describe_config, Direction, Multiplicity};

use super::compression::decompress_properties;
use super::writer::{edge_table_end, EDGE_RECORD_SIZE};

/// Reader for .adjg binary files.
pub struct GraphReader;

impl GraphReader {
    /// Read only the header of an .adjg file.
    pub fn read_header_from_file(path: &Path) -> GraphResult<FileHeader> {
        let mut file = std::fs::File::open(path)?;
        FileHeader::read_from(&mut file)
    }

    /// Read an .adjg file into a Graph.
    pub fn read_from_file<D, M, N, E>(path: &Path) -> GraphResult<Graph<D, M, N, E>>
    where
        D: Direction,
        M: Multiplicity,
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        let data = std::fs::read(path)?;
        let mut cursor = std::io::Cursor::new(data);
        Self::read_from(&mut cursor)
    }

    /// Read from any reader into a Graph.
    ///
    /// The stored configuration must match `D` and `M`.
    pub fn read_from<D, M, N, E>(reader: &mut impl Read) -> GraphResult<Graph<D, M, N, E>>
    where
        D: Direction,
        M: Multiplicity,
        N: DeserializeOwned,
        E: DeserializeOwned,
    {
        // Read all data into a buffer
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        if (data.len() as u64) < HEADER_SIZE {
            return Err(GraphError::Truncated);
        }

        // Parse header
        let header = FileHeader::read_from(&mut std::io::Cursor::new(&data[..64]))?;
        if header.direction != D::KIND || header.multi != M::ALLOWS_PARALLEL {
            return Err(GraphError::ConfigMismatch {
                expected: describe_config(D::KIND, M::ALLOWS_PARALLEL),
                found: header.config_name(),
            });
        }

        let table_end = edge_table_end(&header, data.len() as u64)?;
        if table_end > header.node_props_offset {
            return Err(GraphError::Corrupt(header.edge_table_offset));
        }
        let node_count = header.node_count as usize;
        let edge_count = header.edge_count as usize;

        // Read edge table; every record lies within data.
        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let offset = header.edge_table_offset as usize + i * EDGE_RECORD_SIZE as usize;
            let source = read_u64(&data, offset);
            let target = read_u64(&data, offset + 8);
            if source >= header.node_count || target >= header.node_count {
                return Err(GraphError::Corrupt(offset as u64));
            }
            edges.push((source as usize, target as usize));
        }

        // Read property blocks
        let node_start = header.node_props_offset as usize;
        let edge_start = header.edge_props_offset as usize;
        if node_start > edge_start || edge_start > data.len() {
            return Err(GraphError::Truncated);
        }
        let node_props: Vec<N> = decompress_properties(&data[node_start..edge_start])?;
        let edge_props: Vec<E> = decompress_properties(&data[edge_start..])?;
        if node_props.len() != node_count {
            return Err(GraphError::Corrupt(header.node_props_offset));
        }
        if edge_props.len() != edge_count {
            return Err(GraphError::Corrupt(header.edge_props_offset));
        }

        // Build graph from parts
        let graph = Graph::from_parts(
            node_props,
            edges
                .into_iter()
                .zip(edge_props)
                .map(|((source, target), prop)| (source, target, prop)),
        )?;

        // A simple graph file must not contain pairs that collapse on load
        if graph.edge_count() != edge_count {
            return Err(GraphError::Corrupt(header.edge_table_offset));
        }

        debug!(
            "read {} graph: {} nodes, {} edges",
            header.config_name(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
