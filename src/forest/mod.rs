/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The leveled forest: an in-memory index of all known block proposals.
//!
//! # The Leveled Forest
//!
//! Consensus receives block proposals out of order. A proposal may arrive before its parent, several
//! proposals may extend the same parent, and some parents may never arrive at all. The
//! [`LeveledForest`] keeps track of every proposal it is given as a [`Vertex`](crate::types::Vertex)
//! in a forest of trees, where each vertex is placed at a **level** (its view or height). A vertex's
//! level is always strictly greater than its parent's level.
//!
//! # Containers and placeholders
//!
//! Internally, every id the forest has ever heard of has a container. This includes ids that were only
//! *referenced* as the parent of some added vertex. Containers of such ids are called placeholders:
//! they have a level (the one reported by the child) and a list of children, but no vertex. Queries
//! never return placeholders, but children can be looked up through them. This way, the forest never
//! needs to represent a missing parent, and lookups are always well-defined.
//!
//! # The lowest level
//!
//! The forest keeps a watermark called the [lowest level](LeveledForest::lowest_level). Everything
//! below it has been pruned, and vertices exactly at it are roots, whose parents are never looked up.
//! [Pruning](LeveledForest::prune_at_level) raises the lowest level and irreversibly removes every
//! container below it. Surviving vertices whose parents are removed stay valid.
//!
//! # Usage
//!
//! The forest is designed to be owned and driven by a single thread. The driver first calls
//! [`verify_vertex`](LeveledForest::verify_vertex) on a candidate, then
//! [`add_vertex`](LeveledForest::add_vertex) if it passes:
//!
//! ```ignore
//! let mut forest = LeveledForest::new();
//! forest.verify_vertex(&block)?;
//! forest.add_vertex(block);
//!
//! for child in forest.get_children(&parent_id) {
//!     // ...
//! }
//!
//! forest.prune_at_level(finalized_level)?;
//! ```

pub(crate) mod container;

pub mod invariants;

pub mod iterator;

pub mod leveled_forest;

pub use invariants::InvalidVertexError;
pub use iterator::VertexIterator;
pub use leveled_forest::{LeveledForest, PruneTooLowError};
