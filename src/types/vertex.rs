/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The capability set that a block proposal must expose to be stored in a
//! [`LeveledForest`](crate::forest::LeveledForest).

use std::{rc::Rc, sync::Arc};

use super::basic::{Level, VertexID};

/// A node in the forest: something with an identity, a level, and a reference to a parent.
///
/// ## Contract
///
/// - `id` must be unique, and `level` and `parent` must return the same values for the entire lifetime of
///   an id.
/// - The level of the parent must be strictly lower than `level`. The forest rejects vertices that break
///   this rule in [`verify_vertex`](crate::forest::LeveledForest::verify_vertex).
/// - `parent` is **never** called by the forest on a vertex whose level equals the forest's
///   [lowest level](crate::forest::LeveledForest::lowest_level). Such vertices are roots, and
///   implementations may choose not to know their parent.
pub trait Vertex {
    fn id(&self) -> VertexID;

    fn level(&self) -> Level;

    /// Returns the id and the level of this vertex's parent.
    fn parent(&self) -> (VertexID, Level);
}

impl<V: Vertex + ?Sized> Vertex for Arc<V> {
    fn id(&self) -> VertexID {
        (**self).id()
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn parent(&self) -> (VertexID, Level) {
        (**self).parent()
    }
}

impl<V: Vertex + ?Sized> Vertex for Rc<V> {
    fn id(&self) -> VertexID {
        (**self).id()
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn parent(&self) -> (VertexID, Level) {
        (**self).parent()
    }
}
