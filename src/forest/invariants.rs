/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Checks that keep the forest internally consistent.
//!
//! The forest stores whatever it is given in [`add_vertex`](super::LeveledForest::add_vertex). These
//! checks decide **whether** a candidate vertex can be added without breaking the following invariants:
//! 1. The level of a vertex is strictly greater than the level of its parent. This rules out cycles
//!    without any global cycle detection.
//! 2. Every id has exactly one level. Vertices re-added under a known id must carry the same level and
//!    parent as before, and vertices referencing a known parent must agree on that parent's level.
//!
//! Ids that the forest does not know about yet are never a reason for rejection: parents routinely
//! arrive after their children.
//!
//! None of the functions in this module mutate the forest.

use std::{
    collections::HashMap,
    error::Error,
    fmt::{self, Display, Formatter},
};

use super::container::VertexContainer;
use crate::types::{
    basic::{Level, VertexID},
    vertex::Vertex,
};

/// Check `candidate` against the containers already in the forest.
///
/// ## Order of checks
///
/// 1. Candidates below `lowest_level` pass trivially, since adding them is a no-op.
/// 2. Candidates at `lowest_level` are roots: only the level recorded for their id (if any) is checked,
///    and `candidate.parent()` is not called.
/// 3. Otherwise, the candidate's parent level must be strictly lower than its own level,
///    its parent must not be itself,
/// 4. the candidate must agree with the container stored under its id (if any), and
/// 5. the candidate must agree with the container stored under its parent's id (if any).
pub(crate) fn check_vertex<V: Vertex>(
    containers: &HashMap<VertexID, VertexContainer<V>>,
    lowest_level: Level,
    candidate: &V,
) -> Result<(), InvalidVertexError> {
    let level = candidate.level();
    if level < lowest_level {
        return Ok(());
    }

    let id = candidate.id();
    if level == lowest_level {
        return match containers.get(&id) {
            Some(container) => check_level(container, level),
            None => Ok(()),
        };
    }

    let (parent_id, parent_level) = candidate.parent();
    if parent_level >= level {
        return Err(InvalidVertexError::NonIncreasingLevel {
            vertex: id,
            level,
            parent_level,
        });
    }

    if parent_id == id {
        return Err(InvalidVertexError::SelfParent { vertex: id });
    }

    if let Some(container) = containers.get(&id) {
        check_level(container, level)?;
        check_parent(container, (parent_id, parent_level))?;
    }

    if let Some(parent_container) = containers.get(&parent_id) {
        if parent_container.level != parent_level {
            return Err(InvalidVertexError::ParentLevelMismatch {
                vertex: id,
                parent: parent_id,
                recorded_parent_level: parent_container.level,
                parent_level,
            });
        }
    }

    Ok(())
}

/// Holds for both real and placeholder containers.
fn check_level<V>(container: &VertexContainer<V>, level: Level) -> Result<(), InvalidVertexError> {
    if container.level != level {
        return Err(InvalidVertexError::LevelMismatch {
            vertex: container.id,
            recorded_level: container.level,
            level,
        });
    }
    Ok(())
}

/// Placeholders and roots have no recorded parent and pass trivially.
fn check_parent<V>(
    container: &VertexContainer<V>,
    parent: (VertexID, Level),
) -> Result<(), InvalidVertexError> {
    match container.parent {
        Some(recorded_parent) if recorded_parent != parent => Err(InvalidVertexError::ParentMismatch {
            vertex: container.id,
            recorded_parent,
            parent,
        }),
        _ => Ok(()),
    }
}

/// Enumerates the ways in which a candidate vertex can be inconsistent with the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidVertexError {
    /// The vertex's parent level is not strictly lower than the vertex's own level.
    NonIncreasingLevel {
        vertex: VertexID,
        level: Level,
        parent_level: Level,
    },

    /// The vertex names itself as its parent.
    SelfParent { vertex: VertexID },

    /// The forest already knows the vertex's id, either as a vertex or as the parent of another vertex,
    /// but at a different level.
    LevelMismatch {
        vertex: VertexID,
        recorded_level: Level,
        level: Level,
    },

    /// A vertex with the same id was already added, but with a different parent.
    ParentMismatch {
        vertex: VertexID,
        recorded_parent: (VertexID, Level),
        parent: (VertexID, Level),
    },

    /// The forest already knows the vertex's parent, but at a different level than the one the vertex
    /// reports for it.
    ParentLevelMismatch {
        vertex: VertexID,
        parent: VertexID,
        recorded_parent_level: Level,
        parent_level: Level,
    },
}

impl Display for InvalidVertexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidVertexError::NonIncreasingLevel {
                vertex,
                level,
                parent_level,
            } => write!(
                f,
                "vertex {} at level {} has a parent at level {}, which is not lower",
                vertex, level, parent_level
            ),
            InvalidVertexError::SelfParent { vertex } => {
                write!(f, "vertex {} names itself as its parent", vertex)
            }
            InvalidVertexError::LevelMismatch {
                vertex,
                recorded_level,
                level,
            } => write!(
                f,
                "vertex {} has level {}, but was previously recorded at level {}",
                vertex, level, recorded_level
            ),
            InvalidVertexError::ParentMismatch {
                vertex,
                recorded_parent,
                parent,
            } => write!(
                f,
                "vertex {} has parent ({}, {}), but was previously added with parent ({}, {})",
                vertex, parent.0, parent.1, recorded_parent.0, recorded_parent.1
            ),
            InvalidVertexError::ParentLevelMismatch {
                vertex,
                parent,
                recorded_parent_level,
                parent_level,
            } => write!(
                f,
                "vertex {} reports parent {} at level {}, but the parent is recorded at level {}",
                vertex, parent, parent_level, recorded_parent_level
            ),
        }
    }
}

impl Error for InvalidVertexError {}
