//! adjgraph — generic in-memory adjacency graph.
//!
//! Nodes and edges are addressed by small copyable handles. Directionality
//! (directed, undirected, bidirectional) and edge multiplicity (parallel edges
//! kept or collapsed) are type parameters of [`Graph`]. On top of the store sit
//! breadth-first search with predicate-driven branch cancellation, connected
//! components and predicate-driven edge pruning, plus a binary `.adjg` archive
//! format and a few collaborators (progress, profiling, colors) for callers.

pub mod cli;
pub mod format;
pub mod graph;
pub mod profiling;
pub mod progress;
pub mod types;
pub mod vis;

// Re-export commonly used types at the crate root
pub use format::{DegreeStats, GraphReader, GraphWriter, MmapReader};
pub use graph::{
    bfs_search, BfsOutcome, BiGraph, Coloring, DiGraph, Graph, GraphBuilder, SimpleBiGraph,
    SimpleDiGraph, SimpleUnGraph, UnGraph,
};
pub use profiling::{DurationUnit, Profiler};
pub use progress::{LogProgressBar, ProgressBar, ProgressPool};
pub use types::{
    Bidirectional, Directed, Direction, DirectionKind, EdgeHandle, FileHeader, GraphError,
    GraphResult, Multi, Multiplicity, NodeHandle, Simple, Undirected,
};
