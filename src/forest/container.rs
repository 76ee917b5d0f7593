/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Bookkeeping unit for a single vertex id.

use crate::types::basic::{Level, VertexID};

/// Everything the forest knows about one vertex id.
///
/// A container exists for every id that was either added as a vertex, or referenced as the parent of
/// an added vertex. In the latter case the container is a "placeholder": `vertex` is `None` and `level`
/// is the parent level reported by the first child.
pub(crate) struct VertexContainer<V> {
    pub(crate) id: VertexID,
    pub(crate) level: Level,
    pub(crate) vertex: Option<V>,

    /// Parent reported by `vertex` when it was added. `None` for placeholders and for vertices that were
    /// added as roots, since the parent of a root must not be dereferenced.
    pub(crate) parent: Option<(VertexID, Level)>,

    pub(crate) children: Vec<VertexID>,
}

impl<V> VertexContainer<V> {
    /// Create a placeholder container.
    pub(crate) fn new(id: VertexID, level: Level) -> Self {
        Self {
            id,
            level,
            vertex: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        self.vertex.is_none()
    }

    pub(crate) fn vertex(&self) -> Option<&V> {
        self.vertex.as_ref()
    }

    /// Store `vertex` in this container. Returns whether the container was a placeholder before the call.
    pub(crate) fn set_vertex(&mut self, vertex: V, parent: Option<(VertexID, Level)>) -> bool {
        let was_placeholder = self.is_placeholder();
        self.vertex = Some(vertex);
        if parent.is_some() {
            self.parent = parent;
        }
        was_placeholder
    }

    /// Register `child` as a child of this container. Registering the same child twice is a no-op.
    pub(crate) fn add_child(&mut self, child: VertexID) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}
