/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The [`LeveledForest`] type and its pruning error.

use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    error::Error,
    fmt::{self, Display, Formatter},
    mem,
    sync::mpsc::Sender,
    time::SystemTime,
};

use super::{
    container::VertexContainer,
    invariants::{check_vertex, InvalidVertexError},
    iterator::VertexIterator,
};
use crate::{
    events::{AddVertexEvent, Event, PruneEvent},
    types::{
        basic::{Level, VertexID},
        vertex::Vertex,
    },
};

/// An in-memory index of vertices, organized by id and by level, that supports pruning all vertices
/// below a monotonically increasing lowest level.
///
/// See the [module-level documentation](super) for the model.
pub struct LeveledForest<V: Vertex> {
    vertices: HashMap<VertexID, VertexContainer<V>>,
    vertices_by_level: BTreeMap<Level, Vec<VertexID>>,
    lowest_level: Level,

    /// Number of containers that hold a real vertex.
    size: u64,

    pub(crate) event_publisher: Option<Sender<Event>>,
}

impl<V: Vertex> LeveledForest<V> {
    /// Create an empty forest whose lowest level is 0.
    pub fn new() -> Self {
        Self::with_lowest_level(Level::new(0))
    }

    /// Create an empty forest whose lowest level is `lowest_level`. Vertices at `lowest_level` are
    /// treated as roots.
    pub fn with_lowest_level(lowest_level: Level) -> Self {
        Self {
            vertices: HashMap::new(),
            vertices_by_level: BTreeMap::new(),
            lowest_level,
            size: 0,
            event_publisher: None,
        }
    }

    pub(crate) fn with_event_publisher(lowest_level: Level, event_publisher: Option<Sender<Event>>) -> Self {
        Self {
            event_publisher,
            ..Self::with_lowest_level(lowest_level)
        }
    }

    /// Get the level below which every vertex has been pruned.
    pub fn lowest_level(&self) -> Level {
        self.lowest_level
    }

    /// Get the number of vertices in the forest. Ids that are only referenced as parents are not counted.
    pub fn size(&self) -> u64 {
        self.size
    }

    /* ↓↓↓ Verifying and adding ↓↓↓ */

    /// Check whether `vertex` is consistent with the vertices already in the forest.
    ///
    /// Never mutates the forest. The individual checks are documented in
    /// [`invariants`](super::invariants).
    pub fn verify_vertex(&self, vertex: &V) -> Result<(), InvalidVertexError> {
        check_vertex(&self.vertices, self.lowest_level, vertex)
    }

    /// Add `vertex` to the forest.
    ///
    /// # Precondition
    ///
    /// `vertex` must pass [`verify_vertex`](Self::verify_vertex). Adding an unverified, inconsistent vertex
    /// does not panic, but leaves the forest in an unspecified state.
    ///
    /// # Behavior
    ///
    /// - Vertices below the lowest level are ignored.
    /// - Vertices at the lowest level are roots: their parent is not looked up.
    /// - Otherwise, the vertex is registered as a child of its parent. If the parent is unknown, a
    ///   placeholder is created for it. Parents below the lowest level are not registered.
    /// - Adding the same vertex twice has the same effect as adding it once.
    pub fn add_vertex(&mut self, vertex: V) {
        let level = vertex.level();
        if level < self.lowest_level {
            return;
        }

        let id = vertex.id();
        let parent = if level > self.lowest_level {
            Some(vertex.parent())
        } else {
            None
        };

        let is_new = self.get_or_create_container(id, level).set_vertex(vertex, parent);
        if is_new {
            self.size += 1;
            Event::publish(
                &self.event_publisher,
                Event::AddVertex(AddVertexEvent {
                    timestamp: SystemTime::now(),
                    vertex: id,
                    level,
                }),
            );
        }

        if let Some((parent_id, parent_level)) = parent {
            if parent_level >= self.lowest_level {
                self.get_or_create_container(parent_id, parent_level)
                    .add_child(id);
            }
        }
    }

    /// Verify `vertex`, then add it if it is valid.
    pub fn verify_and_add(&mut self, vertex: V) -> Result<(), InvalidVertexError> {
        self.verify_vertex(&vertex)?;
        self.add_vertex(vertex);
        Ok(())
    }

    fn get_or_create_container(&mut self, id: VertexID, level: Level) -> &mut VertexContainer<V> {
        match self.vertices.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.vertices_by_level.entry(level).or_default().push(id);
                entry.insert(VertexContainer::new(id, level))
            }
        }
    }

    /* ↓↓↓ Queries ↓↓↓ */

    /// Whether a vertex with `id` was added to the forest (and not yet pruned). Ids that are only
    /// referenced as parents are not considered to be in the forest.
    pub fn has_vertex(&self, id: &VertexID) -> bool {
        self.get_vertex(id).is_some()
    }

    pub fn get_vertex(&self, id: &VertexID) -> Option<&V> {
        self.vertices.get(id).and_then(VertexContainer::vertex)
    }

    /// Iterate over the children of `id`. This works for ids that are only referenced as parents, and
    /// returns an empty iterator for ids the forest does not know.
    pub fn get_children(&self, id: &VertexID) -> VertexIterator<'_, V> {
        match self.vertices.get(id) {
            Some(container) => VertexIterator::new(&self.vertices, &container.children),
            None => VertexIterator::empty(&self.vertices),
        }
    }

    pub fn get_number_of_children(&self, id: &VertexID) -> usize {
        self.get_children(id).count()
    }

    /// Iterate over the vertices at `level`. Placeholders at `level` are skipped.
    pub fn get_vertices_at_level(&self, level: Level) -> VertexIterator<'_, V> {
        match self.vertices_by_level.get(&level) {
            Some(ids) => VertexIterator::new(&self.vertices, ids),
            None => VertexIterator::empty(&self.vertices),
        }
    }

    pub fn get_number_of_vertices_at_level(&self, level: Level) -> usize {
        self.get_vertices_at_level(level).count()
    }

    /* ↓↓↓ Pruning ↓↓↓ */

    /// Remove every vertex and placeholder at or below `level`, and raise the lowest level to `level + 1`.
    ///
    /// Vertices at the new lowest level become roots, regardless of whether their parent was ever added.
    ///
    /// Pruning at a level that was already pruned is a no-op. Pruning at a level that would lower the lowest
    /// level fails with [`PruneTooLowError`] and leaves the forest unchanged.
    ///
    /// Pruning at [`Level::MAX`] removes everything but leaves the lowest level at `Level::MAX`, so vertices
    /// at `Level::MAX` added afterwards are accepted as roots.
    pub fn prune_at_level(&mut self, level: Level) -> Result<(), PruneTooLowError> {
        let new_lowest_level = level.checked_next();
        if let Some(new_lowest_level) = new_lowest_level {
            if new_lowest_level < self.lowest_level {
                return Err(PruneTooLowError {
                    requested_level: level,
                    lowest_level: self.lowest_level,
                });
            }
        }

        let pruned_levels = match new_lowest_level {
            Some(new_lowest_level) => {
                let retained_levels = self.vertices_by_level.split_off(&new_lowest_level);
                mem::replace(&mut self.vertices_by_level, retained_levels)
            }
            None => mem::take(&mut self.vertices_by_level),
        };

        let mut pruned_vertices = 0;
        for id in pruned_levels.into_values().flatten() {
            if let Some(container) = self.vertices.remove(&id) {
                if !container.is_placeholder() {
                    pruned_vertices += 1;
                }
            }
        }
        self.size -= pruned_vertices;

        let new_lowest_level = new_lowest_level.unwrap_or(Level::MAX);
        if new_lowest_level > self.lowest_level {
            self.lowest_level = new_lowest_level;
            Event::publish(
                &self.event_publisher,
                Event::Prune(PruneEvent {
                    timestamp: SystemTime::now(),
                    lowest_level: new_lowest_level,
                    pruned_vertices,
                }),
            );
        }

        Ok(())
    }
}

impl<V: Vertex> Default for LeveledForest<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// An attempt was made to prune at a level that would lower the forest's lowest level. This violates the
/// invariant that the lowest level must be monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneTooLowError {
    /// The level the caller tried to prune at.
    pub requested_level: Level,

    /// The forest's lowest level at the time of the call.
    pub lowest_level: Level,
}

impl Display for PruneTooLowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot prune at level {}: every level below {} has already been pruned",
            self.requested_level, self.lowest_level
        )
    }
}

impl Error for PruneTooLowError {}
