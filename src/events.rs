/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Definitions of the events emitted by a [`LeveledForest`](crate::forest::LeveledForest).
//!
//! An event for a given action indicates that the action has been completed, i.e., the forest has
//! already changed by the time the event is received.
//!
//! Events are sent through an [`std::sync::mpsc`] channel to the
//! [event bus](crate::managed_forest::ManagedForest), which runs the registered handlers on a
//! background thread. This keeps handler code off the thread that drives the forest.

use std::sync::mpsc::Sender;
use std::time::SystemTime;

use crate::types::basic::{Level, VertexID};

pub enum Event {
    AddVertex(AddVertexEvent),
    Prune(PruneEvent),
}

impl Event {
    /// Send `event` if there is a publisher. A publisher whose receiving end has been dropped is ignored.
    pub(crate) fn publish(event_publisher: &Option<Sender<Event>>, event: Event) {
        if let Some(event_publisher) = event_publisher {
            let _ = event_publisher.send(event);
        }
    }
}

/// A vertex was stored in the forest for the first time. Re-adding a known vertex does not emit this
/// event.
pub struct AddVertexEvent {
    pub timestamp: SystemTime,
    pub vertex: VertexID,
    pub level: Level,
}

/// The forest's lowest level was raised to `lowest_level`, dropping every vertex below it.
pub struct PruneEvent {
    pub timestamp: SystemTime,
    pub lowest_level: Level,
    /// Number of real (non-placeholder) vertices removed.
    pub pruned_vertices: u64,
}
