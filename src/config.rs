/*
    Copyright © 2023, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! User-defined parameters of a [managed forest](crate::managed_forest::ManagedForest).

use typed_builder::TypedBuilder;

use crate::types::basic::Level;

/// Stores the user-defined parameters required to start a forest, that is:
/// 1. The initial lowest level. Vertices at this level are roots. When bootstrapping from genesis this is
///    0, when bootstrapping from a later finalized block, it is the level of that block.
/// 2. The "Log Events" flag. If set to "true", every [event](crate::events) is logged using the
///    [log](https://docs.rs/log/latest/log/) crate.
#[derive(TypedBuilder, Clone, Debug)]
#[builder(builder_method(doc = "
    Create a builder for building a [Configuration]. On the builder call the following methods to construct a valid [Configuration].

    Required:
    - `.log_events(...)`

    Optional:
    - `.initial_lowest_level(...)`
"))]
pub struct Configuration {
    #[builder(
        default = Level::new(0),
        setter(doc = "Set the lowest level of the forest when it starts. Optional, defaults to 0.")
    )]
    pub initial_lowest_level: Level,
    #[builder(setter(doc = "Enable logging? Required."))]
    pub log_events: bool,
}
