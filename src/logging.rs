/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Functions that log out events.
//!
//! The logs defined in this module are printed if the user enabled them via the forest's
//! [configuration](crate::config::Configuration).
//!
//! This crate logs using the [log](https://docs.rs/log/latest/log/) crate. To get these messages
//! printed onto a terminal or to a file, set up a
//! [logging implementation](https://docs.rs/log/latest/log/#available-logging-implementations).
//!
//! ## Log message format
//!
//! Log messages are CSVs (Comma Separated Values) with at least two values. The first two values are
//! always:
//! 1. The name of the [event](crate::events) in PascalCase (defined in this module as constants).
//! 2. The time the event was emitted (as number of seconds since the Unix Epoch).
//!
//! The rest of the values differ depending on the kind of event. For example, the following snippet
//! is how an [AddVertex](crate::events::AddVertexEvent) is printed:
//!
//! ```text
//! AddVertex, 1701329264, fNGCJyk, 12
//! ```
//!
//! In the snippet:
//! - The third value is the first seven characters of the Base64 encoding of the id of the vertex.
//! - The fourth value is the level of the vertex.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use std::time::SystemTime;

use crate::events::*;

// Names of each event in PascalCase for printing:
pub const ADD_VERTEX: &str = "AddVertex";
pub const PRUNE: &str = "Prune";

/// Implemented by event types. Used to get a closure that logs the event.
pub(crate) trait Logger {
    /// Returns a pointer to the default logging handler for a given event type.
    fn get_logger() -> Box<dyn Fn(&Self) + Send>;
}

impl Logger for AddVertexEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |add_vertex_event: &AddVertexEvent| {
            log::info!(
                "{}, {}, {}, {}",
                ADD_VERTEX,
                secs_since_unix_epoch(add_vertex_event.timestamp),
                first_seven_base64_chars(&add_vertex_event.vertex.bytes()),
                add_vertex_event.level
            )
        };
        Box::new(logger)
    }
}

impl Logger for PruneEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |prune_event: &PruneEvent| {
            log::info!(
                "{}, {}, {}, {}",
                PRUNE,
                secs_since_unix_epoch(prune_event.timestamp),
                prune_event.lowest_level,
                prune_event.pruned_vertices
            )
        };
        Box::new(logger)
    }
}

// Get a more readable representation of a bytesequence by base64-encoding it and taking the first 7 characters.
pub(crate) fn first_seven_base64_chars(bytes: &[u8]) -> String {
    let encoded = STANDARD_NO_PAD.encode(bytes);
    if encoded.len() > 7 {
        encoded[0..7].to_string()
    } else {
        encoded
    }
}

// Timestamps before the Unix Epoch are printed as 0.
pub(crate) fn secs_since_unix_epoch(timestamp: SystemTime) -> u64 {
    timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_seven_base64_chars_truncates() {
        assert_eq!(first_seven_base64_chars(&[0u8; 32]), "AAAAAAA");
        assert_eq!(first_seven_base64_chars(&[255u8]), "/w");
    }

    #[test]
    fn secs_since_unix_epoch_handles_early_timestamps() {
        let later = SystemTime::UNIX_EPOCH + Duration::from_secs(1701329264);
        assert_eq!(secs_since_unix_epoch(later), 1701329264);

        let earlier = SystemTime::UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(secs_since_unix_epoch(earlier), 0);
    }
}
