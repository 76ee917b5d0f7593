/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Single-pass traversal over a list of vertex containers.

use std::{collections::HashMap, slice};

use super::container::VertexContainer;
use crate::types::basic::VertexID;

/// A forward-only cursor over the real vertices referenced by a list of container ids.
///
/// Placeholders (ids that were only referenced as a parent) and ids without a container are skipped, so
/// callers only ever see vertices that were actually added to the forest. The iterator borrows the forest,
/// so the forest cannot be mutated while the iterator is alive.
///
/// Besides implementing [`Iterator`], `VertexIterator` offers the explicit [`has_next`](Self::has_next) /
/// [`next_vertex`](Self::next_vertex) pair. Once exhausted, `next_vertex` keeps returning `None`.
pub struct VertexIterator<'a, V> {
    containers: &'a HashMap<VertexID, VertexContainer<V>>,
    ids: slice::Iter<'a, VertexID>,
    next: Option<&'a V>,
}

impl<'a, V> VertexIterator<'a, V> {
    pub(crate) fn new(containers: &'a HashMap<VertexID, VertexContainer<V>>, ids: &'a [VertexID]) -> Self {
        let mut iter = Self {
            containers,
            ids: ids.iter(),
            next: None,
        };
        iter.preload();
        iter
    }

    pub(crate) fn empty(containers: &'a HashMap<VertexID, VertexContainer<V>>) -> Self {
        Self::new(containers, &[])
    }

    /// Whether a call to [`next_vertex`](Self::next_vertex) would return a vertex.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_vertex(&mut self) -> Option<&'a V> {
        let vertex = self.next.take();
        if vertex.is_some() {
            self.preload();
        }
        vertex
    }

    fn preload(&mut self) {
        let containers = self.containers;
        self.next = self
            .ids
            .by_ref()
            .find_map(|id| containers.get(id).and_then(VertexContainer::vertex));
    }
}

impl<'a, V> Iterator for VertexIterator<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_vertex()
    }
}
