//! Fluent API for building Graph instances.

use crate::types::{Direction, GraphResult, Multiplicity, NodeHandle};

use super::Graph;

/// Fluent builder collecting nodes and links before constructing a [`Graph`].
///
/// Links refer to nodes by the handles the builder returned; they are only
/// validated in [`GraphBuilder::build`].
pub struct GraphBuilder<D, M, N = (), E = ()> {
    nodes: Vec<N>,
    edges: Vec<(usize, usize, E)>,
    _config: std::marker::PhantomData<(D, M)>,
}

impl<D: Direction, M: Multiplicity, N, E> GraphBuilder<D, M, N, E> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            _config: std::marker::PhantomData,
        }
    }

    /// Add a node carrying `prop`.
    pub fn node(&mut self, prop: N) -> NodeHandle {
        self.nodes.push(prop);
        NodeHandle::from_index(self.nodes.len() - 1)
    }

    /// Add `count` nodes with the default property.
    pub fn nodes(&mut self, count: usize) -> Vec<NodeHandle>
    where
        N: Default,
    {
        (0..count).map(|_| self.node(N::default())).collect()
    }

    /// Add an edge carrying `prop`.
    pub fn link_with(&mut self, source: NodeHandle, target: NodeHandle, prop: E) -> &mut Self {
        self.edges.push((source.index(), target.index(), prop));
        self
    }

    /// Add an edge with the default property.
    pub fn link(&mut self, source: NodeHandle, target: NodeHandle) -> &mut Self
    where
        E: Default,
    {
        self.link_with(source, target, E::default())
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<D, M, N, E>> {
        Graph::from_parts(self.nodes, self.edges)
    }
}

impl<D: Direction, M: Multiplicity, N, E> Default for GraphBuilder<D, M, N, E> {
    fn default() -> Self {
        Self::new()
    }
}
