//! Breadth-first search with predicate-driven branch cancellation.

use std::collections::VecDeque;

use log::debug;

use crate::types::{Direction, Multiplicity, NodeHandle};

use super::Graph;

/// Per-node search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    /// Reached through accepted edges only; expanded.
    Valid,
    /// First reached through a rejected edge; never expanded.
    Invalid,
}

/// Result of a breadth-first search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfsOutcome {
    /// Valid nodes in visitor order, starting with the start node.
    pub visited: Vec<NodeHandle>,
    /// Nodes whose first discovery was through a rejected edge, in discovery order.
    pub pruned: Vec<NodeHandle>,
}

/// Breadth-first search from `start`.
///
/// Nodes are visited in non-decreasing distance, ties broken by `out_edges`
/// order. For every edge `(u, v)` scanned from an expanded node `u` where `v`
/// has not been seen yet, `edge_predicate(graph, u, v)` decides whether `v` is
/// valid. Valid nodes are passed to `node_visitor` exactly once and expanded;
/// invalid nodes are marked visited but never expanded, which cuts off every
/// subtree reachable only through them. The first discovery of a node fixes
/// its state, and edges towards already-seen nodes do not consult the
/// predicate. Undirected graphs are walked along incident edges.
///
/// # Panics
/// Panics if `start` does not belong to `graph`.
pub fn bfs_search<D, M, N, E, V, P>(
    graph: &Graph<D, M, N, E>,
    start: NodeHandle,
    mut node_visitor: V,
    mut edge_predicate: P,
) -> BfsOutcome
where
    D: Direction,
    M: Multiplicity,
    V: FnMut(&Graph<D, M, N, E>, NodeHandle),
    P: FnMut(&Graph<D, M, N, E>, NodeHandle, NodeHandle) -> bool,
{
    graph.assert_node(start);

    let mut state = vec![Visit::Unvisited; graph.node_count()];
    let mut outcome = BfsOutcome::default();
    let mut queue: VecDeque<NodeHandle> = VecDeque::new();

    state[start.index()] = Visit::Valid;
    outcome.visited.push(start);
    node_visitor(graph, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.out_edges(current) {
            let neighbor = graph.opposite(edge, current);
            if state[neighbor.index()] != Visit::Unvisited {
                continue;
            }

            if edge_predicate(graph, current, neighbor) {
                state[neighbor.index()] = Visit::Valid;
                outcome.visited.push(neighbor);
                node_visitor(graph, neighbor);
                queue.push_back(neighbor);
            } else {
                state[neighbor.index()] = Visit::Invalid;
                outcome.pruned.push(neighbor);
            }
        }
    }

    debug!(
        "bfs from {}: {} visited, {} pruned",
        start,
        outcome.visited.len(),
        outcome.pruned.len()
    );
    outcome
}

impl<D: Direction, M: Multiplicity, N, E> Graph<D, M, N, E> {
    /// Method form of [`bfs_search`].
    pub fn bfs_search<V, P>(&self, start: NodeHandle, node_visitor: V, edge_predicate: P) -> BfsOutcome
    where
        V: FnMut(&Self, NodeHandle),
        P: FnMut(&Self, NodeHandle, NodeHandle) -> bool,
    {
        bfs_search(self, start, node_visitor, edge_predicate)
    }

    /// Nodes reachable from `start` in BFS order, with no visitor and no pruning.
    pub fn bfs_reachable(&self, start: NodeHandle) -> Vec<NodeHandle> {
        bfs_search(self, start, |_, _| {}, |_, _, _| true).visited
    }
}
