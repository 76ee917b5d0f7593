/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Background thread that invokes event handlers on events published by the forest.

use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::events::*;
use crate::logging::Logger;

pub(crate) type HandlerPtr<T> = Box<dyn Fn(&T) + Send>;

/// How long the event bus waits for an event before checking its shutdown signal again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) struct EventHandlers {
    pub(crate) add_vertex_handlers: Vec<HandlerPtr<AddVertexEvent>>,
    pub(crate) prune_handlers: Vec<HandlerPtr<PruneEvent>>,
}

impl EventHandlers {
    /// Collect the user-provided handlers, plus the default loggers if `log_events` is set.
    pub(crate) fn new(
        log_events: bool,
        add_vertex_handler: Option<HandlerPtr<AddVertexEvent>>,
        prune_handler: Option<HandlerPtr<PruneEvent>>,
    ) -> EventHandlers {
        let mut handlers = EventHandlers {
            add_vertex_handlers: add_vertex_handler.into_iter().collect(),
            prune_handlers: prune_handler.into_iter().collect(),
        };

        if log_events {
            handlers.add_vertex_handlers.push(AddVertexEvent::get_logger());
            handlers.prune_handlers.push(PruneEvent::get_logger());
        }

        handlers
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.add_vertex_handlers.is_empty() && self.prune_handlers.is_empty()
    }

    pub(crate) fn fire_handlers(&self, event: Event) {
        match event {
            Event::AddVertex(add_vertex_event) => self
                .add_vertex_handlers
                .iter()
                .for_each(|handler| handler(&add_vertex_event)),

            Event::Prune(prune_event) => self
                .prune_handlers
                .iter()
                .for_each(|handler| handler(&prune_event)),
        }
    }
}

/// Start a thread that fires `event_handlers` on every event received from `event_subscriber`.
///
/// The thread exits when either `shutdown_signal` fires or every publisher has been dropped. In both
/// cases, events that were already published are handled before the thread exits.
pub(crate) fn start_event_bus(
    event_handlers: EventHandlers,
    event_subscriber: Receiver<Event>,
    shutdown_signal: Receiver<()>,
) -> JoinHandle<()> {
    thread::spawn(move || loop {
        match shutdown_signal.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => {
                while let Ok(event) = event_subscriber.try_recv() {
                    event_handlers.fire_handlers(event)
                }
                return;
            }
            Err(TryRecvError::Empty) => (),
        }

        match event_subscriber.recv_timeout(POLL_INTERVAL) {
            Ok(event) => event_handlers.fire_handlers(event),
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => return,
        }
    })
}
