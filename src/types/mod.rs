/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Types and traits that are shared between the [leveled forest](crate::forest) and the code that
//! drives it.
//!
//! The forest never sees concrete block proposals. It consumes them through the [`Vertex`]
//! trait, and indexes them by the inert [`VertexID`] and [`Level`] newtypes defined in [`basic`].

pub mod basic;

pub mod vertex;

pub use basic::{Level, VertexID};
pub use vertex::Vertex;
