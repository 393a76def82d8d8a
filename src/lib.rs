//! # pagekit
//!
//! A minimal, Rust-native toolkit for driving cursor-paginated list
//! APIs, including backward navigation over forward-only cursors.
//!
//! ## Features
//!
//! - **Pure paging state**: page index, start-key stack, and next cursor
//!   as an immutable state machine with explicit transitions
//! - **Backward navigation**: start keys recorded on the way forward and
//!   replayed on the way back, no backend support required
//! - **Typed fetch boundary**: `PageSource` trait between navigation and
//!   transport, with an in-memory source for tests and demos
//! - **Verbatim failures**: backend error payloads decoded into a typed
//!   union and surfaced exactly as the server sent them
//! - **Session driver**: one type owning state, filters, and the items
//!   on display, with a page stream for bulk reads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{ListSession, Result, StaticSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = StaticSource::new(fetch_zone_names());
//!     let mut session = ListSession::new(source, 100);
//!
//!     // First page
//!     session.refresh().await?;
//!     render(session.items(), session.page_label());
//!
//!     // Forward, then back again
//!     if session.can_go_next() {
//!         session.next_page().await?;
//!     }
//!     if session.can_go_prev() {
//!         session.prev_page().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ListSession                          │
//! │  refresh() / search()      next_page() / prev_page()        │
//! │  items()  page_label()     into_pages() → Stream            │
//! └───────────────┬──────────────────────────┬──────────────────┘
//!                 │                          │
//!      ┌──────────┴──────────┐    ┌──────────┴──────────┐
//!      │     PagingState     │    │     PageSource      │
//!      │ page index          │    │ fetch_page(request) │
//!      │ start-key stack     │    │  → PageOf<Item>     │
//!      │ next cursor         │    │  → ApiFailure       │
//!      └─────────────────────┘    └─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paging state machine
pub mod paging;

/// Fetch requests, responses, and sources
pub mod fetch;

/// Session driver tying state, filters, and items together
pub mod browse;

/// Memoized fetch cache
pub mod cache;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ApiFailure, Error, FailureBody, Result};
pub use types::*;

// Re-export commonly used types
pub use browse::ListSession;
pub use cache::MemoCache;
pub use fetch::{PageOf, PageRequest, PageSource, StaticSource};
pub use paging::PagingState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
