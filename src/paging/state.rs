//! Paging state and its transition rules
//!
//! Defines the core navigation state for one paginated list view.

/// Tracks one list view's position in a cursor-paginated listing.
///
/// Three pieces of bookkeeping drive every navigation decision:
///
/// - `page_index`: zero-based index of the page on display
/// - `start_keys`: stack of start keys for every page entered past the
///   first; entry `i` is the start key of page index `i + 1`, so the last
///   entry is always the current page's own start key
/// - `next_cursor`: continuation cursor for the page after the current
///   one, absent when the end of the listing is reached
///
/// `start_keys.len() == page_index` holds after every transition. The
/// first page is never on the stack because it is fetched with no cursor.
///
/// All transitions are pure: they take `&self` and return the successor
/// state, leaving the original intact. That makes retry-on-failure
/// trivial for callers, who only commit the new state once a fetch
/// actually succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState {
    page_size: usize,
    page_index: usize,
    start_keys: Vec<String>,
    next_cursor: Option<String>,
}

impl PagingState {
    /// Create a fresh state positioned on the first page of a listing.
    ///
    /// Nothing is known about the listing yet: no start keys, no
    /// continuation cursor.
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            page_size,
            page_index: 0,
            start_keys: Vec::new(),
            next_cursor: None,
        }
    }

    /// Return to a clean first page, keeping only the page size.
    ///
    /// Used when filters change or the listing is refreshed: recorded
    /// start keys belong to the old result set and would resume into the
    /// wrong listing.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.page_size)
    }

    /// Page size this state was created with.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the page currently on display.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Continuation cursor for the page after the current one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Recorded start keys, oldest first.
    pub fn start_keys(&self) -> &[String] {
        &self.start_keys
    }

    /// Whether a further page is known to exist.
    pub fn can_go_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Whether there is a page to go back to.
    pub fn can_go_prev(&self) -> bool {
        self.page_index >= 1
    }

    /// Start key for refetching the page before the current one.
    ///
    /// The last stack entry is the current page's own start key, so the
    /// previous page starts at the entry before it. From page index 1
    /// (or 0) the previous page is the first page, which is fetched with
    /// no cursor at all.
    pub fn prev_start_from(&self) -> Option<&str> {
        if self.page_index <= 1 {
            return None;
        }
        self.start_keys
            .len()
            .checked_sub(2)
            .and_then(|i| self.start_keys.get(i))
            .map(String::as_str)
    }

    /// Apply a page fetched in the forward direction.
    ///
    /// `item_count` is how many items the fetch returned and
    /// `next_cursor` the continuation cursor that came with them.
    ///
    /// An empty page only clears the continuation cursor. Some backends
    /// attach a cursor to a page with no items; following it would strand
    /// the view on a blank page, so the position and stack stay put.
    ///
    /// A non-empty page advances iff a continuation cursor was pending:
    /// the pending cursor is the start key of the page just fetched and
    /// moves onto the stack. The very first load has no pending cursor,
    /// so it stores the response cursor without advancing.
    #[must_use]
    pub fn apply_next_page(&self, item_count: usize, next_cursor: Option<String>) -> Self {
        if item_count == 0 {
            return Self {
                next_cursor: None,
                ..self.clone()
            };
        }

        let mut advanced = self.clone();
        if let Some(start_key) = advanced.next_cursor.take() {
            advanced.start_keys.push(start_key);
            advanced.page_index += 1;
        }
        advanced.next_cursor = next_cursor;
        advanced
    }

    /// Apply a page refetched in the backward direction.
    ///
    /// Pops the current page's start key, steps the index back, and
    /// stores the refetched page's continuation cursor (which leads to
    /// the page just left).
    ///
    /// Only valid after a backward fetch, i.e. when [`can_go_prev`] was
    /// true; on the first page this is a no-op.
    ///
    /// [`can_go_prev`]: PagingState::can_go_prev
    #[must_use]
    pub fn apply_prev_page(&self, next_cursor: Option<String>) -> Self {
        if self.page_index == 0 {
            return self.clone();
        }

        let mut retreated = self.clone();
        retreated.start_keys.pop();
        retreated.page_index -= 1;
        retreated.next_cursor = next_cursor;
        retreated
    }

    /// Display label for the current page.
    ///
    /// Empty on the first page, the 1-based page number from the second
    /// page on. List views show nothing next to their title until the
    /// user has actually navigated somewhere.
    pub fn page_label(&self) -> String {
        if self.page_index == 0 {
            String::new()
        } else {
            (self.page_index + 1).to_string()
        }
    }
}
