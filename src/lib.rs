/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! A leveled forest of block proposals for HotStuff-style BFT consensus.
//!
//! Consensus engines receive block proposals out of order, over competing forks, and need to discard
//! history once it is finalized. This crate provides the in-memory index that sits between the network
//! and the fork-choice logic:
//! - [`types`]: the [`Vertex`](types::Vertex) trait that block proposals implement, and the
//!   [`VertexID`](types::VertexID) and [`Level`](types::Level) types that identify and order them.
//! - [`forest`]: the [`LeveledForest`](forest::LeveledForest) itself.
//! - [`events`], [`config`] and [`managed_forest`]: observing the forest through event handlers and
//!   logs.
//!
//! The forest does not decide finality, validate signatures or certificates, or persist anything. The
//! code that drives it decides which vertices to add and which level to prune at.

pub mod types;

pub mod forest;

pub mod events;

pub mod config;

pub mod managed_forest;

pub(crate) mod event_bus;

pub(crate) mod logging;
