//! The graph store, its iterators and the algorithms that read it.

pub mod builder;
pub mod components;
pub mod iter;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use components::Coloring;
pub use iter::{Edges, Nodes, OutEdges};
pub use store::{BiGraph, DiGraph, Graph, SimpleBiGraph, SimpleDiGraph, SimpleUnGraph, UnGraph};
pub use traversal::{bfs_search, BfsOutcome};
