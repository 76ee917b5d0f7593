/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! "Inert" types used to identify and order vertices.
//!
//! These types follow the newtype pattern: they are sent around, compared, and used as map keys,
//! but have no active behavior of their own.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use borsh::{BorshDeserialize, BorshSerialize};
use std::fmt::{self, Debug, Display, Formatter};

/// Globally unique identifier of a vertex, most often the hash of the block proposal that the vertex
/// represents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, BorshDeserialize, BorshSerialize)]
pub struct VertexID([u8; 32]);

impl VertexID {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl Display for VertexID {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD_NO_PAD.encode(self.0))
    }
}

impl Debug for VertexID {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "VertexID({})", self)
    }
}

/// Position of a vertex in the forest, e.g., the view or height of a block proposal.
///
/// The level of a vertex is always strictly greater than the level of its parent.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshDeserialize,
    BorshSerialize,
)]
pub struct Level(u64);

impl Level {
    pub const MAX: Level = Level(u64::MAX);

    pub const fn new(int: u64) -> Self {
        Self(int)
    }

    pub const fn int(&self) -> u64 {
        self.0
    }

    /// The level directly above this one, or `None` if this is [`Level::MAX`].
    pub const fn checked_next(&self) -> Option<Level> {
        match self.0.checked_add(1) {
            Some(int) => Some(Level(int)),
            None => None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for Level {
    fn from(int: u64) -> Self {
        Level::new(int)
    }
}
