/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Methods to build a [`LeveledForest`] together with the event handlers that observe it.
//!
//! The forest is a plain data structure and can be created directly with [`LeveledForest::new`]. This
//! module is for drivers that also want to observe what happens to the forest, either by registering
//! their own handlers or by logging events.
//!
//! ## Starting a managed forest
//!
//! ```ignore
//! let configuration =
//!     Configuration::builder()
//!     .initial_lowest_level(Level::new(0))
//!     .log_events(true)
//!     .build();
//!
//! let mut managed_forest: ManagedForest<Block> =
//!     ForestSetup::builder()
//!     .configuration(configuration)
//!     .on_prune(prune_handler)
//!     .build()
//!     .start();
//!
//! managed_forest.forest_mut().verify_and_add(block)?;
//! ```
//!
//! ### Required setters
//! - `.configuration(...)`
//!
//! ### Optional setters
//!
//! The optional setters are for registering user-defined event handlers for events from
//! [crate::events]:
//! - `.on_add_vertex(...)`
//! - `.on_prune(...)`
//!
//! Handlers run on a background "event bus" thread, which is only started if at least one handler is
//! registered or `log_events` is set.

use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use typed_builder::TypedBuilder;

use crate::config::Configuration;
use crate::event_bus::*;
use crate::events::*;
use crate::forest::LeveledForest;
use crate::types::vertex::Vertex;

/// Stores the configuration and the event handlers required to start a [ManagedForest].
#[derive(TypedBuilder)]
#[builder(builder_method(doc = "
    Create a builder for building a [ForestSetup]. On the builder call the following methods to construct a valid [ForestSetup].

    Required:
    - `.configuration(...)`

    Optional:
    - `.on_add_vertex(...)`
    - `.on_prune(...)`
"))]
pub struct ForestSetup {
    // Required parameters
    #[builder(setter(doc = "Set the [configuration](Configuration) of the forest. Required."))]
    configuration: Configuration,
    // Optional parameters
    #[builder(default, setter(transform = |handler: impl Fn(&AddVertexEvent) + Send + 'static| Some(Box::new(handler) as HandlerPtr<AddVertexEvent>),
    doc = "Register a handler closure to be invoked after a vertex is added to the forest for the first time. Optional."))]
    on_add_vertex: Option<HandlerPtr<AddVertexEvent>>,
    #[builder(default, setter(transform = |handler: impl Fn(&PruneEvent) + Send + 'static| Some(Box::new(handler) as HandlerPtr<PruneEvent>),
    doc = "Register a handler closure to be invoked after the lowest level of the forest is raised. Optional."))]
    on_prune: Option<HandlerPtr<PruneEvent>>,
}

impl ForestSetup {
    /// Creates the forest, and starts the event bus thread if there are any handlers to run.
    pub fn start<V: Vertex>(self) -> ManagedForest<V> {
        let event_handlers = EventHandlers::new(
            self.configuration.log_events,
            self.on_add_vertex,
            self.on_prune,
        );

        if event_handlers.is_empty() {
            return ManagedForest {
                forest: LeveledForest::with_lowest_level(self.configuration.initial_lowest_level),
                event_bus: None,
                event_bus_shutdown: None,
            };
        }

        let (event_publisher, event_subscriber) = mpsc::channel();
        let (event_bus_shutdown, event_bus_shutdown_receiver) = mpsc::channel();
        let event_bus = start_event_bus(event_handlers, event_subscriber, event_bus_shutdown_receiver);

        ManagedForest {
            forest: LeveledForest::with_event_publisher(
                self.configuration.initial_lowest_level,
                Some(event_publisher),
            ),
            event_bus: Some(event_bus),
            event_bus_shutdown: Some(event_bus_shutdown),
        }
    }
}

/// A [`LeveledForest`] plus a handle to the thread running its event handlers. When this value is dropped,
/// the event bus handles every event published so far and then shuts down.
pub struct ManagedForest<V: Vertex> {
    forest: LeveledForest<V>,
    event_bus: Option<JoinHandle<()>>,
    event_bus_shutdown: Option<Sender<()>>,
}

impl<V: Vertex> ManagedForest<V> {
    pub fn forest(&self) -> &LeveledForest<V> {
        &self.forest
    }

    pub fn forest_mut(&mut self) -> &mut LeveledForest<V> {
        &mut self.forest
    }
}

impl<V: Vertex> Drop for ManagedForest<V> {
    fn drop(&mut self) {
        // Disconnect the event channel first so that the event bus sees every event published so far.
        self.forest.event_publisher.take();

        if let Some(shutdown) = self.event_bus_shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(event_bus) = self.event_bus.take() {
            if event_bus.join().is_err() {
                log::error!("The event bus thread panicked while handling an event.");
            }
        }
    }
}
