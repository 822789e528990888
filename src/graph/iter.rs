//! Lazy handle sequences returned by the query surface.

use std::iter::FusedIterator;

use crate::types::{EdgeHandle, NodeHandle};

use super::store::EdgeSlot;

/// All nodes of a graph, in insertion order.
#[derive(Debug, Clone)]
pub struct Nodes {
    range: std::ops::Range<usize>,
}

impl Nodes {
    pub(crate) fn new(count: usize) -> Self {
        Self { range: 0..count }
    }
}

impl Iterator for Nodes {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        self.range.next().map(NodeHandle::from_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Nodes {
    fn next_back(&mut self) -> Option<NodeHandle> {
        self.range.next_back().map(NodeHandle::from_index)
    }
}

impl ExactSizeIterator for Nodes {}
impl FusedIterator for Nodes {}

/// All live edges of a graph, in insertion order. Pruned slots are skipped.
#[derive(Debug)]
pub struct Edges<'a, E> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Option<EdgeSlot<E>>>>,
    remaining: usize,
}

impl<'a, E> Edges<'a, E> {
    pub(crate) fn new(slots: &'a [Option<EdgeSlot<E>>], live: usize) -> Self {
        Self {
            slots: slots.iter().enumerate(),
            remaining: live,
        }
    }
}

impl<E> Iterator for Edges<'_, E> {
    type Item = EdgeHandle;

    fn next(&mut self) -> Option<EdgeHandle> {
        for (index, slot) in self.slots.by_ref() {
            if slot.is_some() {
                self.remaining -= 1;
                return Some(EdgeHandle::from_index(index));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Edges<'_, E> {}
impl<E> FusedIterator for Edges<'_, E> {}

impl<E> Clone for Edges<'_, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

/// Edges of one adjacency list (out-edges, or in-edges of a bidirectional graph).
#[derive(Debug, Clone)]
pub struct OutEdges<'a> {
    inner: std::slice::Iter<'a, EdgeHandle>,
}

impl<'a> OutEdges<'a> {
    pub(crate) fn new(list: &'a [EdgeHandle]) -> Self {
        Self { inner: list.iter() }
    }
}

impl Iterator for OutEdges<'_> {
    type Item = EdgeHandle;

    fn next(&mut self) -> Option<EdgeHandle> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for OutEdges<'_> {
    fn next_back(&mut self) -> Option<EdgeHandle> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for OutEdges<'_> {}
impl FusedIterator for OutEdges<'_> {}
