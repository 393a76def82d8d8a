//! Fetch boundary
//!
//! # Overview
//!
//! The paging state machine never talks to a backend itself. This module
//! defines the contract it drives instead: a [`PageRequest`] describes
//! one page fetch, a [`PageOf`] is what came back, and a [`PageSource`]
//! is anything that can turn one into the other.
//!
//! [`StaticSource`] is an in-memory source for tests, demos, and data
//! that is already loaded.

mod source;
mod types;

pub use source::{PageSource, StaticSource};
pub use types::{PageOf, PageRequest, MAX_ITEMS_PARAM, START_FROM_PARAM};
