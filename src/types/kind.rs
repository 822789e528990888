//! Type-level graph configuration: directionality and edge multiplicity.

use serde::Serialize;

/// Runtime name of a directionality tag, as stored in archive headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum DirectionKind {
    /// Edges are visible from their source only.
    Directed = 0,
    /// Edges are visible from both endpoints.
    Undirected = 1,
    /// Directed edges with an additional reverse adjacency.
    Bidirectional = 2,
}

impl DirectionKind {
    /// Convert a u8 value to a DirectionKind, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Directed),
            1 => Some(Self::Undirected),
            2 => Some(Self::Bidirectional),
            _ => None,
        }
    }

    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "dir" => Some(Self::Directed),
            "undirected" | "undir" => Some(Self::Undirected),
            "bidirectional" | "bidir" => Some(Self::Bidirectional),
            _ => None,
        }
    }
}

impl std::fmt::Display for DirectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Directionality tag of a graph type.
pub trait Direction: Copy + Default + std::fmt::Debug + 'static {
    /// Runtime name of this tag.
    const KIND: DirectionKind;
    /// Whether an edge is visible from its target as well as its source.
    const SYMMETRIC: bool;
    /// Whether incoming adjacency lists are maintained.
    const TRACKS_INCOMING: bool;
}

/// Directed edges, visible from the source only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Undirected edges, visible from either endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

/// Directed edges that also expose reverse adjacency via `in_edges`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

impl Direction for Directed {
    const KIND: DirectionKind = DirectionKind::Directed;
    const SYMMETRIC: bool = false;
    const TRACKS_INCOMING: bool = false;
}

impl Direction for Undirected {
    const KIND: DirectionKind = DirectionKind::Undirected;
    const SYMMETRIC: bool = true;
    const TRACKS_INCOMING: bool = false;
}

impl Direction for Bidirectional {
    const KIND: DirectionKind = DirectionKind::Bidirectional;
    const SYMMETRIC: bool = false;
    const TRACKS_INCOMING: bool = true;
}

/// Edge multiplicity tag of a graph type.
pub trait Multiplicity: Copy + Default + std::fmt::Debug + 'static {
    /// Whether parallel edges between the same pair are kept.
    const ALLOWS_PARALLEL: bool;
}

/// Parallel edges are retained, each with its own handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multi;

/// At most one edge per node pair; duplicates collapse onto the existing edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simple;

impl Multiplicity for Multi {
    const ALLOWS_PARALLEL: bool = true;
}

impl Multiplicity for Simple {
    const ALLOWS_PARALLEL: bool = false;
}

/// Human-readable description of a configuration, e.g. `undirected/simple`.
pub fn describe_config(direction: DirectionKind, multi: bool) -> String {
    format!(
        "{}/{}",
        direction.name(),
        if multi { "multi" } else { "simple" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_kind_roundtrip() {
        for val in 0u8..=2 {
            let kind = DirectionKind::from_u8(val).unwrap();
            assert_eq!(kind as u8, val);
            assert_eq!(DirectionKind::from_name(kind.name()), Some(kind));
        }
        assert!(DirectionKind::from_u8(3).is_none());
    }

    #[test]
    fn test_describe_config() {
        assert_eq!(
            describe_config(DirectionKind::Undirected, false),
            "undirected/simple"
        );
        assert_eq!(describe_config(Directed::KIND, true), "directed/multi");
    }
}
