//! Core graph structure: node and edge storage with adjacency indexes.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::types::{
    Bidirectional, Directed, Direction, EdgeHandle, GraphError, GraphResult, Multi, Multiplicity,
    NodeHandle, Simple, Undirected,
};

use super::iter::{Edges, Nodes, OutEdges};

/// Stored endpoints and property of a live edge.
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub(crate) source: NodeHandle,
    pub(crate) target: NodeHandle,
    pub(crate) prop: E,
}

impl<E> EdgeSlot<E> {
    /// The endpoint that is not `node` (the source for a self-loop).
    fn opposite(&self, node: NodeHandle) -> NodeHandle {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// An adjacency-list graph whose directionality `D` and edge multiplicity `M`
/// are fixed by its type.
///
/// Nodes carry a property of type `N` and edges a property of type `E`; both
/// default to `()`. Nodes are never removed, edges can be pruned. In `Multi`
/// graphs every adjacency list keeps insertion order; in `Simple` graphs each
/// list is ordered by the opposite endpoint, which also makes duplicate
/// detection a binary search.
#[derive(Debug, Clone)]
pub struct Graph<D = Directed, M = Multi, N = (), E = ()> {
    /// Node properties, indexed by node handle.
    nodes: Vec<N>,
    /// Edge slots, indexed by edge handle. `None` once pruned.
    pub(crate) edges: Vec<Option<EdgeSlot<E>>>,
    /// Per-node out-edges (incident edges for undirected graphs).
    outgoing: Vec<Vec<EdgeHandle>>,
    /// Per-node in-edges. Only maintained for bidirectional graphs.
    incoming: Vec<Vec<EdgeHandle>>,
    /// Number of `Some` slots in `edges`.
    live_edges: usize,
    _config: PhantomData<(D, M)>,
}

/// Directed graph keeping parallel edges.
pub type DiGraph<N = (), E = ()> = Graph<Directed, Multi, N, E>;
/// Undirected graph keeping parallel edges.
pub type UnGraph<N = (), E = ()> = Graph<Undirected, Multi, N, E>;
/// Bidirectional graph keeping parallel edges.
pub type BiGraph<N = (), E = ()> = Graph<Bidirectional, Multi, N, E>;
/// Directed graph with at most one edge per ordered pair.
pub type SimpleDiGraph<N = (), E = ()> = Graph<Directed, Simple, N, E>;
/// Undirected graph with at most one edge per unordered pair.
pub type SimpleUnGraph<N = (), E = ()> = Graph<Undirected, Simple, N, E>;
/// Bidirectional graph with at most one edge per ordered pair.
pub type SimpleBiGraph<N = (), E = ()> = Graph<Bidirectional, Simple, N, E>;

impl<D: Direction, M: Multiplicity, N, E> Graph<D, M, N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            outgoing: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(if D::TRACKS_INCOMING { nodes } else { 0 }),
            live_edges: 0,
            _config: PhantomData,
        }
    }

    /// Create from node properties and `(source index, target index, property)`
    /// triples (used by reader and builder).
    ///
    /// In `Simple` graphs duplicate pairs collapse onto the first occurrence.
    pub fn from_parts(
        node_props: Vec<N>,
        edges: impl IntoIterator<Item = (usize, usize, E)>,
    ) -> GraphResult<Self> {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(node_props.len(), edges.size_hint().0);
        for prop in node_props {
            graph.add_node_with(prop);
        }

        let mut collapsed = 0usize;
        for (source, target, prop) in edges {
            // Checked on the raw index: node counts fit in u32, indices may not.
            for index in [source, target] {
                if index >= graph.node_count() {
                    return Err(GraphError::NodeNotFound(index as u64));
                }
            }
            let (_, inserted) = graph.add_edge_with(
                NodeHandle::from_index(source),
                NodeHandle::from_index(target),
                prop,
            );
            if !inserted {
                collapsed += 1;
            }
        }
        if collapsed > 0 {
            debug!("from_parts collapsed {} duplicate edges", collapsed);
        }

        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Whether the handle names a node of this graph.
    pub fn contains_node(&self, node: NodeHandle) -> bool {
        node.index() < self.nodes.len()
    }

    /// Whether the handle names a live (not pruned) edge of this graph.
    pub fn contains_edge(&self, edge: EdgeHandle) -> bool {
        matches!(self.edges.get(edge.index()), Some(Some(_)))
    }

    /// Add a node with the default property.
    pub fn add_node(&mut self) -> NodeHandle
    where
        N: Default,
    {
        self.add_node_with(N::default())
    }

    /// Add a node carrying `prop`, returns its handle.
    pub fn add_node_with(&mut self, prop: N) -> NodeHandle {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "node capacity exhausted"
        );
        let handle = NodeHandle::from_index(self.nodes.len());
        self.nodes.push(prop);
        self.outgoing.push(Vec::new());
        if D::TRACKS_INCOMING {
            self.incoming.push(Vec::new());
        }
        handle
    }

    /// Add an edge with the default property.
    ///
    /// Returns the edge handle and whether a new edge was created. In `Simple`
    /// graphs an existing pair yields its handle and `false`.
    ///
    /// # Panics
    /// Panics if either endpoint does not belong to this graph.
    pub fn add_edge(&mut self, source: NodeHandle, target: NodeHandle) -> (EdgeHandle, bool)
    where
        E: Default,
    {
        self.add_edge_with(source, target, E::default())
    }

    /// Add an edge carrying `prop`. A collapsed duplicate drops `prop` and
    /// keeps the existing edge's property.
    ///
    /// # Panics
    /// Panics if either endpoint does not belong to this graph.
    pub fn add_edge_with(
        &mut self,
        source: NodeHandle,
        target: NodeHandle,
        prop: E,
    ) -> (EdgeHandle, bool) {
        self.assert_node(source);
        self.assert_node(target);

        if !M::ALLOWS_PARALLEL {
            if let Ok(pos) = self.ordered_position(&self.outgoing[source.index()], source, target)
            {
                return (self.outgoing[source.index()][pos], false);
            }
        }

        assert!(
            self.edges.len() < u32::MAX as usize,
            "edge capacity exhausted"
        );
        let handle = EdgeHandle::from_index(self.edges.len());
        self.edges.push(Some(EdgeSlot {
            source,
            target,
            prop,
        }));
        self.live_edges += 1;

        self.attach_outgoing(source, target, handle);
        if D::SYMMETRIC && source != target {
            self.attach_outgoing(target, source, handle);
        }
        if D::TRACKS_INCOMING {
            self.attach_incoming(target, source, handle);
        }

        trace!("added edge {} ({} -> {})", handle, source, target);
        (handle, true)
    }

    /// Add an edge, reporting foreign endpoints as an error instead of panicking.
    pub fn try_add_edge(
        &mut self,
        source: NodeHandle,
        target: NodeHandle,
        prop: E,
    ) -> GraphResult<(EdgeHandle, bool)> {
        for node in [source, target] {
            if !self.contains_node(node) {
                return Err(GraphError::NodeNotFound(node.index() as u64));
            }
        }
        Ok(self.add_edge_with(source, target, prop))
    }

    /// Find an edge from `source` to `target` (either orientation if undirected).
    /// With parallel edges the earliest inserted one is returned.
    pub fn find_edge(&self, source: NodeHandle, target: NodeHandle) -> Option<EdgeHandle> {
        let list = self.outgoing.get(source.index())?;
        if M::ALLOWS_PARALLEL {
            list.iter()
                .copied()
                .find(|&e| self.slot(e).opposite(source) == target)
        } else {
            self.ordered_position(list, source, target)
                .ok()
                .map(|pos| list[pos])
        }
    }

    /// Remove every edge for which `pred` returns true; returns how many were removed.
    ///
    /// `pred` sees the graph as it was before pruning and is called exactly
    /// once per live edge. Handles of removed edges become invalid, all other
    /// handles are unaffected.
    pub fn prune_edges<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&Self, EdgeHandle) -> bool,
    {
        let doomed: Vec<EdgeHandle> = {
            let this: &Self = self;
            this.edges().filter(|&e| pred(this, e)).collect()
        };
        if doomed.is_empty() {
            return 0;
        }

        let mut removed = vec![false; self.edges.len()];
        for edge in &doomed {
            removed[edge.index()] = true;
            self.edges[edge.index()] = None;
        }
        for list in self.outgoing.iter_mut().chain(self.incoming.iter_mut()) {
            list.retain(|e| !removed[e.index()]);
        }
        self.live_edges -= doomed.len();

        debug!(
            "pruned {} edges, {} remaining",
            doomed.len(),
            self.live_edges
        );
        doomed.len()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> Nodes {
        Nodes::new(self.nodes.len())
    }

    /// All live edges in insertion order.
    pub fn edges(&self) -> Edges<'_, E> {
        Edges::new(&self.edges, self.live_edges)
    }

    /// Edges leaving `node`; for undirected graphs, all edges incident to it.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this graph.
    pub fn out_edges(&self, node: NodeHandle) -> OutEdges<'_> {
        self.assert_node(node);
        OutEdges::new(&self.outgoing[node.index()])
    }

    /// Concatenated out-edges of several nodes. An edge incident to two of the
    /// queried nodes of an undirected graph appears twice.
    pub fn out_edges_of(&self, nodes: impl IntoIterator<Item = NodeHandle>) -> Vec<EdgeHandle> {
        let mut result = Vec::new();
        for node in nodes {
            result.extend(self.out_edges(node));
        }
        result
    }

    /// Number of entries in the out-edge list of `node`.
    pub fn out_degree(&self, node: NodeHandle) -> usize {
        self.out_edges(node).len()
    }

    /// Stored source of `edge`.
    pub fn source(&self, edge: EdgeHandle) -> NodeHandle {
        self.slot(edge).source
    }

    /// Stored target of `edge`.
    pub fn target(&self, edge: EdgeHandle) -> NodeHandle {
        self.slot(edge).target
    }

    /// Stored `(source, target)` of `edge`.
    pub fn endpoints(&self, edge: EdgeHandle) -> (NodeHandle, NodeHandle) {
        let slot = self.slot(edge);
        (slot.source, slot.target)
    }

    /// The endpoint of `edge` that is not `node`; the target if `node` is the source.
    pub fn opposite(&self, edge: EdgeHandle, node: NodeHandle) -> NodeHandle {
        self.slot(edge).opposite(node)
    }

    /// Property of a node.
    pub fn node_property(&self, node: NodeHandle) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Mutable property of a node.
    pub fn node_property_mut(&mut self, node: NodeHandle) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Property of a live edge.
    pub fn edge_property(&self, edge: EdgeHandle) -> Option<&E> {
        self.edges
            .get(edge.index())
            .and_then(|slot| slot.as_ref())
            .map(|slot| &slot.prop)
    }

    /// Mutable property of a live edge.
    pub fn edge_property_mut(&mut self, edge: EdgeHandle) -> Option<&mut E> {
        self.edges
            .get_mut(edge.index())
            .and_then(|slot| slot.as_mut())
            .map(|slot| &mut slot.prop)
    }

    /// All node properties in node order.
    pub fn node_properties(&self) -> &[N] {
        &self.nodes
    }

    /// Call `visitor` for every node, in `nodes()` order.
    pub fn for_all_nodes<F>(&self, mut visitor: F)
    where
        F: FnMut(&Self, NodeHandle),
    {
        for node in self.nodes() {
            visitor(self, node);
        }
    }

    /// Call `visitor` for every live edge, in `edges()` order.
    pub fn for_all_edges<F>(&self, mut visitor: F)
    where
        F: FnMut(&Self, EdgeHandle),
    {
        for edge in self.edges() {
            visitor(self, edge);
        }
    }

    /// Call `visitor` for every out-edge of `node`, in `out_edges()` order.
    pub fn for_all_out_edges<F>(&self, node: NodeHandle, mut visitor: F)
    where
        F: FnMut(&Self, EdgeHandle),
    {
        for edge in self.out_edges(node) {
            visitor(self, edge);
        }
    }

    pub(crate) fn assert_node(&self, node: NodeHandle) {
        assert!(
            self.contains_node(node),
            "node {} does not belong to this graph ({} nodes)",
            node,
            self.nodes.len()
        );
    }

    fn slot(&self, edge: EdgeHandle) -> &EdgeSlot<E> {
        match self.edges.get(edge.index()) {
            Some(Some(slot)) => slot,
            _ => panic!("edge {} is not a live edge of this graph", edge),
        }
    }

    /// Binary search `list` (owned by `owner`, ordered by opposite endpoint) for `other`.
    fn ordered_position(
        &self,
        list: &[EdgeHandle],
        owner: NodeHandle,
        other: NodeHandle,
    ) -> Result<usize, usize> {
        list.binary_search_by_key(&other, |&e| self.slot(e).opposite(owner))
    }

    fn attach_outgoing(&mut self, owner: NodeHandle, other: NodeHandle, edge: EdgeHandle) {
        let pos = self.insert_position(&self.outgoing[owner.index()], owner, other);
        self.outgoing[owner.index()].insert(pos, edge);
    }

    fn attach_incoming(&mut self, owner: NodeHandle, other: NodeHandle, edge: EdgeHandle) {
        let pos = self.insert_position(&self.incoming[owner.index()], owner, other);
        self.incoming[owner.index()].insert(pos, edge);
    }

    fn insert_position(&self, list: &[EdgeHandle], owner: NodeHandle, other: NodeHandle) -> usize {
        if M::ALLOWS_PARALLEL {
            list.len()
        } else {
            match self.ordered_position(list, owner, other) {
                Ok(pos) | Err(pos) => pos,
            }
        }
    }
}

impl<M: Multiplicity, N, E> Graph<Bidirectional, M, N, E> {
    /// Edges arriving at `node`.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this graph.
    pub fn in_edges(&self, node: NodeHandle) -> OutEdges<'_> {
        self.assert_node(node);
        OutEdges::new(&self.incoming[node.index()])
    }

    /// Number of edges arriving at `node`.
    pub fn in_degree(&self, node: NodeHandle) -> usize {
        self.in_edges(node).len()
    }
}

impl<D: Direction, M: Multiplicity, N, E> Default for Graph<D, M, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same node properties and the same sequence of
/// `(source, target, property)` in `edges()` order. Edge handles are ignored.
impl<D: Direction, M: Multiplicity, N: PartialEq, E: PartialEq> PartialEq for Graph<D, M, N, E> {
    fn eq(&self, other: &Self) -> bool {
        if self.nodes != other.nodes || self.live_edges != other.live_edges {
            return false;
        }
        self.edges
            .iter()
            .flatten()
            .zip(other.edges.iter().flatten())
            .all(|(a, b)| a.source == b.source && a.target == b.target && a.prop == b.prop)
    }
}
