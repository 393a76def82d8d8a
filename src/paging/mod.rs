//! Paging state machine
//!
//! # Overview
//!
//! Cursor APIs only hand out forward continuation tokens, so backward
//! navigation has to be reconstructed on the client: the start key of
//! every page entered is recorded on the way forward and replayed on the
//! way back. [`PagingState`] owns that bookkeeping as a small immutable
//! state machine; applying a fetched page produces a new state and never
//! mutates the old one.
//!
//! The state machine knows nothing about transport. Callers fetch pages
//! however they like and feed the observed item count and continuation
//! cursor back in. The `browse` module wires this up to a `PageSource`
//! for the common case.

mod state;

pub use state::PagingState;
