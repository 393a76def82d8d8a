//! List browsing sessions
//!
//! # Overview
//!
//! [`ListSession`] wires the pieces together for the common case: it
//! owns a paging state, the active filter set, and the items currently
//! on display, and drives a [`PageSource`] to move between pages.
//!
//! Fetches are sequenced one at a time through `&mut self`; a failed
//! fetch leaves the whole session exactly as it was.
//!
//! [`PageSource`]: crate::fetch::PageSource

mod session;

pub use session::ListSession;
