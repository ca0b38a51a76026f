// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Query Engine and the pieces around it.
//!
//! `engine` scores and ranks, `dedup` collapses hits on the same destination,
//! `loader` owns the lazily fetched index, and `state` models the search box
//! the results are shown in.

pub mod dedup;
pub mod engine;
pub mod loader;
pub mod state;

pub use dedup::ResultMerger;
pub use engine::*;
pub use loader::*;
pub use state::*;
