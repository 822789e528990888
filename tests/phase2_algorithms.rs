//! Phase 2 tests: breadth-first search, connected components and pruning
//! working together.

use adjgraph::graph::{
    bfs_search, BiGraph, DiGraph, Graph, SimpleUnGraph, UnGraph,
};
use adjgraph::types::NodeHandle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Helper: a directed chain a -> b -> c -> ... of `len` nodes.
fn chain(len: usize) -> (DiGraph, Vec<NodeHandle>) {
    let mut g: DiGraph = Graph::new();
    let nodes: Vec<NodeHandle> = (0..len).map(|_| g.add_node()).collect();
    for pair in nodes.windows(2) {
        g.add_edge(pair[0], pair[1]);
    }
    (g, nodes)
}

/// Helper: a random undirected multigraph with a fixed seed.
fn random_graph(seed: u64, nodes: usize, edges: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g: UnGraph = Graph::with_capacity(nodes, edges);
    let handles: Vec<NodeHandle> = (0..nodes).map(|_| g.add_node()).collect();
    for _ in 0..edges {
        let s = handles[rng.gen_range(0..nodes)];
        let t = handles[rng.gen_range(0..nodes)];
        g.add_edge(s, t);
    }
    g
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_accept_all_reaches_chain() {
    let (g, nodes) = chain(4);
    let mut seen = Vec::new();
    let outcome = bfs_search(&g, nodes[0], |_, n| seen.push(n), |_, _, _| true);

    assert_eq!(seen, nodes);
    assert_eq!(outcome.visited, nodes);
    assert!(outcome.pruned.is_empty());
}

#[test]
fn test_bfs_rejected_step_cancels_branch() {
    // A -> B -> C with the step A -> B refused: only A is visited.
    let (g, nodes) = chain(3);
    let (a, b, c) = (nodes[0], nodes[1], nodes[2]);

    let mut seen = Vec::new();
    let outcome = g.bfs_search(
        a,
        |_, n| seen.push(n),
        |_, u, v| !(u == a && v == b),
    );

    assert_eq!(seen, vec![a]);
    assert_eq!(outcome.pruned, vec![b]);
    assert!(!outcome.visited.contains(&c));
}

#[test]
fn test_bfs_visits_by_distance() {
    // a -> b, a -> c, b -> d, c -> e
    let mut g: DiGraph = Graph::new();
    let a = g.add_node();
    let b = g.add_node();
    let c = g.add_node();
    let d = g.add_node();
    let e = g.add_node();
    g.add_edge(b, d);
    g.add_edge(a, b);
    g.add_edge(c, e);
    g.add_edge(a, c);

    assert_eq!(g.bfs_reachable(a), vec![a, b, c, d, e]);
}

#[test]
fn test_bfs_each_node_visited_once() {
    let g = random_graph(7, 40, 200);
    let start = g.nodes().next().unwrap();

    let mut seen = Vec::new();
    g.bfs_search(start, |_, n| seen.push(n), |_, _, _| true);

    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(unique.len(), seen.len());
}

#[test]
fn test_bfs_directed_ignores_reverse_edges() {
    let mut g: BiGraph = Graph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_edge(b, a);

    assert_eq!(g.bfs_reachable(a), vec![a]);
    assert_eq!(g.bfs_reachable(b), vec![b, a]);
}

#[test]
fn test_bfs_predicate_sees_graph_state() {
    let mut g: DiGraph<u32, ()> = Graph::new();
    let a = g.add_node_with(0);
    let b = g.add_node_with(5);
    let c = g.add_node_with(1);
    g.add_edge(a, b);
    g.add_edge(a, c);

    let outcome = g.bfs_search(
        a,
        |_, _| {},
        |graph, _, v| graph.node_property(v).copied().unwrap_or(0) < 3,
    );
    assert_eq!(outcome.visited, vec![a, c]);
    assert_eq!(outcome.pruned, vec![b]);
}

#[test]
#[should_panic]
fn test_bfs_foreign_start_panics() {
    let g: DiGraph = Graph::new();
    let (_, nodes) = chain(2);
    g.bfs_reachable(nodes[1]);
}

// ==================== Component Tests ====================

#[test]
fn test_two_components_and_edges() {
    // Nodes {1,2,3,4}, edges (1,2), (3,4).
    let mut g: UnGraph = Graph::new();
    let n1 = g.add_node();
    let n2 = g.add_node();
    let n3 = g.add_node();
    let n4 = g.add_node();
    let (e12, _) = g.add_edge(n1, n2);
    let (e34, _) = g.add_edge(n3, n4);

    let coloring = g.connected_components();
    assert_eq!(coloring.count(), 2);
    assert_eq!(coloring.as_slice(), &[0, 0, 1, 1]);

    let components = g.components();
    assert_eq!(components, vec![vec![n1, n2], vec![n3, n4]]);
    assert_eq!(g.component_edges(&components[0]), vec![e12]);
    assert_eq!(g.component_edges(&components[1]), vec![e34]);
}

#[test]
fn test_isolated_nodes_are_singleton_components() {
    let mut g: DiGraph = Graph::new();
    for _ in 0..3 {
        g.add_node();
    }
    let components = g.components();
    assert_eq!(components.len(), 3);
    assert!(components.iter().all(|c| c.len() == 1));
}

#[test]
fn test_coloring_is_idempotent() {
    let g = random_graph(11, 60, 45);
    assert_eq!(g.connected_components(), g.connected_components());
}

#[test]
fn test_random_coloring_invariants() {
    for seed in 0..5 {
        let g = random_graph(seed, 80, 70);
        let coloring = g.connected_components();

        // Every edge joins nodes of the same component.
        for e in g.edges() {
            let (s, t) = g.endpoints(e);
            assert_eq!(coloring.component_of(s), coloring.component_of(t));
        }

        // Ids are contiguous and the partition covers each node exactly once.
        let partition = coloring.partition();
        assert_eq!(partition.len(), coloring.count());
        let total: usize = partition.iter().map(Vec::len).sum();
        assert_eq!(total, g.node_count());
        assert!(partition.iter().all(|c| !c.is_empty()));

        // A component is exactly what BFS reaches from any of its members.
        for component in &partition {
            let mut reached = g.bfs_reachable(component[0]);
            reached.sort();
            assert_eq!(&reached, component);
        }

        // Component edges partition the edge set.
        let edge_total: usize = partition.iter().map(|c| g.component_edges(c).len()).sum();
        assert_eq!(edge_total, g.edge_count());
    }
}

// ==================== Pruning Interplay ====================

#[test]
fn test_pruning_splits_component() {
    let mut g: SimpleUnGraph = Graph::new();
    let a = g.add_node();
    let b = g.add_node();
    let c = g.add_node();
    g.add_edge(a, b);
    let (bc, _) = g.add_edge(b, c);
    assert_eq!(g.connected_components().count(), 1);

    let removed = g.prune_edges(|_, e| e == bc);
    assert_eq!(removed, 1);
    assert_eq!(g.components(), vec![vec![a, b], vec![c]]);
    assert_eq!(g.bfs_reachable(a), vec![a, b]);
}

#[test]
fn test_prune_self_loops() {
    let mut g: UnGraph = Graph::new();
    let a = g.add_node();
    let b = g.add_node();
    g.add_edge(a, a);
    g.add_edge(a, b);
    g.add_edge(b, b);

    let removed = g.prune_edges(|graph, e| {
        let (s, t) = graph.endpoints(e);
        s == t
    });
    assert_eq!(removed, 2);
    assert_eq!(g.out_degree(a), 1);
    assert_eq!(g.out_degree(b), 1);
}
