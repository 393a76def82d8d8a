//! Session driver for one paginated list view

use crate::error::Result;
use crate::fetch::{PageOf, PageRequest, PageSource};
use crate::paging::PagingState;
use crate::types::StringMap;
use futures::stream::{self, Stream};
use std::fmt;
use tracing::{debug, warn};

/// Drives one list view over a [`PageSource`]
///
/// The session is the stateful counterpart of [`PagingState`]: it holds
/// the items on display next to the navigation state and keeps the two
/// in step. Every navigation call performs at most one fetch, applies
/// the result, and only then commits the new state, so an error never
/// moves the view.
pub struct ListSession<S: PageSource> {
    /// Supplier of pages
    source: S,
    /// Navigation state
    paging: PagingState,
    /// Filter parameters sent with every fetch
    filters: StringMap,
    /// Items of the page on display
    items: Vec<S::Item>,
}

impl<S: PageSource> ListSession<S> {
    /// Create a session; nothing is fetched until [`refresh`]
    ///
    /// [`refresh`]: ListSession::refresh
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            paging: PagingState::new(page_size),
            filters: StringMap::new(),
            items: Vec::new(),
        }
    }

    /// Add a filter parameter before the first load
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// The underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Items of the page currently on display
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Navigation state snapshot
    pub fn paging(&self) -> &PagingState {
        &self.paging
    }

    /// Active filter parameters
    pub fn filters(&self) -> &StringMap {
        &self.filters
    }

    /// Whether a further page is known to exist
    pub fn can_go_next(&self) -> bool {
        self.paging.can_go_next()
    }

    /// Whether there is a page to go back to
    pub fn can_go_prev(&self) -> bool {
        self.paging.can_go_prev()
    }

    /// Display label for the current page
    pub fn page_label(&self) -> String {
        self.paging.page_label()
    }

    /// Fetch a clean first page with the current filters
    ///
    /// Discards recorded start keys, since they belong to the listing
    /// that was on display before. On failure the previous position and
    /// items stay on display.
    pub async fn refresh(&mut self) -> Result<()> {
        let fresh = self.paging.reset();
        let page = self.fetch(None).await?;
        self.paging = fresh.apply_next_page(page.len(), page.next_cursor.clone());
        let count = page.len();
        self.items = page.items;
        debug!(items = count, "loaded first page");
        Ok(())
    }

    /// Replace the filters and restart from the first page
    pub async fn search(&mut self, filters: StringMap) -> Result<()> {
        self.filters = filters;
        self.refresh().await
    }

    /// Advance one page
    ///
    /// Returns `true` when the display moved. Returns `false` without
    /// fetching when no next page is known, and after absorbing an empty
    /// page that a backend served with a dangling cursor.
    pub async fn next_page(&mut self) -> Result<bool> {
        let cursor = match self.paging.next_cursor() {
            Some(cursor) => cursor.to_string(),
            None => return Ok(false),
        };

        let page = self.fetch(Some(&cursor)).await?;
        let advanced = !page.is_empty();
        self.paging = self.paging.apply_next_page(page.len(), page.next_cursor.clone());
        if advanced {
            self.items = page.items;
            debug!(page_index = self.paging.page_index(), "advanced to next page");
        }
        Ok(advanced)
    }

    /// Go back one page
    ///
    /// Refetches the previous page from its recorded start key (or with
    /// no cursor when the previous page is the first). Returns `false`
    /// without fetching when already on the first page.
    pub async fn prev_page(&mut self) -> Result<bool> {
        if !self.paging.can_go_prev() {
            return Ok(false);
        }

        let start_from = self.paging.prev_start_from().map(str::to_string);
        let page = self.fetch(start_from.as_deref()).await?;
        self.paging = self.paging.apply_prev_page(page.next_cursor.clone());
        self.items = page.items;
        debug!(page_index = self.paging.page_index(), "retreated to previous page");
        Ok(true)
    }

    /// Consume the session into a forward-only stream of pages
    ///
    /// The stream starts from a clean first page and advances until no
    /// further page exists, yielding each non-empty page's items. A
    /// fetch failure ends the stream with that error.
    pub fn into_pages(self) -> impl Stream<Item = Result<Vec<S::Item>>> {
        stream::try_unfold((self, true), |(mut session, first)| async move {
            let has_page = if first {
                session.refresh().await?;
                !session.items.is_empty()
            } else if session.can_go_next() {
                session.next_page().await?
            } else {
                false
            };

            if has_page {
                let items = std::mem::take(&mut session.items);
                Ok(Some((items, (session, false))))
            } else {
                Ok(None)
            }
        })
    }

    fn request(&self, start_from: Option<&str>) -> PageRequest {
        let mut request = PageRequest::new(self.paging.page_size()).filters(self.filters.clone());
        if let Some(cursor) = start_from {
            request = request.start_from(cursor);
        }
        request
    }

    async fn fetch(&self, start_from: Option<&str>) -> Result<PageOf<S::Item>> {
        let request = self.request(start_from);
        match self.source.fetch_page(&request).await {
            Ok(page) => Ok(page),
            Err(error) => {
                warn!(error = %error, "page fetch failed");
                Err(error)
            }
        }
    }
}

impl<S: PageSource> fmt::Debug for ListSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSession")
            .field("paging", &self.paging)
            .field("filters", &self.filters)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}
