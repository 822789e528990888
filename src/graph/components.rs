//! Connected components, ignoring edge direction.

use log::debug;
use serde::Serialize;

use crate::types::{Direction, EdgeHandle, Multiplicity, NodeHandle};

use super::Graph;

/// Component assignment for every node of a graph.
///
/// A snapshot: later mutation of the graph does not update it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coloring {
    /// node index -> component id, ids contiguous in `0..count`.
    colors: Vec<usize>,
    count: usize,
}

impl Coloring {
    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `node`, or None if the node postdates this coloring.
    pub fn component_of(&self, node: NodeHandle) -> Option<usize> {
        self.colors.get(node.index()).copied()
    }

    /// Component ids indexed by node index.
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Group nodes by component id; nodes ascend within each component.
    ///
    /// Ids are assigned by a scan over nodes in index order, so ascending
    /// index order is also the order in which that scan reached each node.
    pub fn partition(&self) -> Vec<Vec<NodeHandle>> {
        let mut components = vec![Vec::new(); self.count];
        for (index, &color) in self.colors.iter().enumerate() {
            components[color].push(NodeHandle::from_index(index));
        }
        components
    }
}

/// Union-Find with union by rank and path halving.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return;
        }
        match self.rank[root_i].cmp(&self.rank[root_j]) {
            std::cmp::Ordering::Less => self.parent[root_i] = root_j,
            std::cmp::Ordering::Greater => self.parent[root_j] = root_i,
            std::cmp::Ordering::Equal => {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

impl<D: Direction, M: Multiplicity, N, E> Graph<D, M, N, E> {
    /// Color every node with its component id.
    ///
    /// Edge direction is ignored. Ids are handed out in order of first
    /// appearance while scanning nodes in insertion order, so component 0
    /// always holds the first node.
    pub fn connected_components(&self) -> Coloring {
        let n = self.node_count();
        let mut uf = UnionFind::new(n);
        for slot in self.edges.iter().flatten() {
            uf.union(slot.source.index(), slot.target.index());
        }

        const UNSEEN: usize = usize::MAX;
        let mut root_color = vec![UNSEEN; n];
        let mut colors = Vec::with_capacity(n);
        let mut count = 0;
        for index in 0..n {
            let root = uf.find(index);
            if root_color[root] == UNSEEN {
                root_color[root] = count;
                count += 1;
            }
            colors.push(root_color[root]);
        }

        debug!("{} components over {} nodes", count, n);
        Coloring { colors, count }
    }

    /// Out-parameter form: overwrite `coloring` with per-node component ids
    /// and return the number of components.
    pub fn connected_components_into(&self, coloring: &mut Vec<usize>) -> usize {
        let result = self.connected_components();
        coloring.clear();
        coloring.extend_from_slice(result.as_slice());
        result.count()
    }

    /// The full partition, ordered by component id.
    pub fn components(&self) -> Vec<Vec<NodeHandle>> {
        self.connected_components().partition()
    }

    /// Edges with both endpoints in `component`, in `edges()` order.
    ///
    /// `component` is expected to come from [`Graph::components`] on the
    /// unchanged graph.
    pub fn component_edges(&self, component: &[NodeHandle]) -> Vec<EdgeHandle> {
        let mut member = vec![false; self.node_count()];
        for node in component {
            if let Some(flag) = member.get_mut(node.index()) {
                *flag = true;
            }
        }
        self.edges()
            .filter(|&e| {
                let (source, target) = self.endpoints(e);
                member[source.index()] && member[target.index()]
            })
            .collect()
    }
}
