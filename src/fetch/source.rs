//! Page sources
//!
//! A [`PageSource`] is the seam between navigation and transport. The
//! crate drives it; implementations own everything about how a page is
//! actually produced.

use super::types::{PageOf, PageRequest};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;

// ============================================================================
// Page Source Trait
// ============================================================================

/// Asynchronous supplier of pages from a listing endpoint
///
/// Implementations own every transport concern. The contract the rest of
/// the crate relies on:
///
/// - items come back in a stable listing order
/// - the continuation cursor resumes immediately after the last item of
///   the page it came with
/// - a cursor handed out earlier stays usable for the life of the
///   listing, or the fetch fails with a clear error
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type this source lists
    type Item;

    /// Fetch one page
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageOf<Self::Item>>;
}

// ============================================================================
// Static Source
// ============================================================================

/// Filter parameter name plus its match predicate
type FilterHook<T> = (String, fn(&T, &str) -> bool);

/// In-memory [`PageSource`] over a fixed list of items
///
/// Cursors are decimal offsets into the backing list, which keeps pages
/// stable across fetches and makes the source a convenient stand-in for
/// a real backend in tests and demos. An optional filter hook applies
/// one request filter before slicing, the way a backend would apply it
/// server-side.
#[derive(Clone)]
pub struct StaticSource<T> {
    items: Vec<T>,
    filter: Option<FilterHook<T>>,
}

impl<T> StaticSource<T> {
    /// Source over `items`, ignoring all request filters
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            filter: None,
        }
    }

    /// Source that honors the `param` request filter via `matches`
    pub fn with_filter(
        items: Vec<T>,
        param: impl Into<String>,
        matches: fn(&T, &str) -> bool,
    ) -> Self {
        Self {
            items,
            filter: Some((param.into(), matches)),
        }
    }

    /// Number of items behind the source, before any filtering
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source holds no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matching(&self, request: &PageRequest) -> Vec<&T> {
        match &self.filter {
            Some((param, matches)) => match request.filters.get(param) {
                Some(needle) => self
                    .items
                    .iter()
                    .filter(|item| matches(item, needle))
                    .collect(),
                None => self.items.iter().collect(),
            },
            None => self.items.iter().collect(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> PageSource for StaticSource<T> {
    type Item = T;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageOf<T>> {
        let matching = self.matching(request);
        let start = match &request.start_from {
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|_| Error::bad_cursor(cursor.clone(), "not a decimal offset"))?,
            None => 0,
        };
        let end = matching.len().min(start.saturating_add(request.max_items));
        let items: Vec<T> = matching
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|item| (*item).clone())
            .collect();
        let next_cursor = (end < matching.len()).then(|| end.to_string());
        Ok(PageOf::new(items, next_cursor))
    }
}

impl<T> fmt::Debug for StaticSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSource")
            .field("items", &self.items.len())
            .field("filter", &self.filter.as_ref().map(|(param, _)| param))
            .finish()
    }
}
