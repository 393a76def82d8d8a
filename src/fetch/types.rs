//! Fetch request and response types
//!
//! Defines the request/response contract between navigation and
//! whatever actually performs the fetch.

use crate::types::{OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};

/// Query parameter name for the page size bound
pub const MAX_ITEMS_PARAM: &str = "maxItems";

/// Query parameter name for the resume cursor
pub const START_FROM_PARAM: &str = "startFrom";

// ============================================================================
// Page Request
// ============================================================================

/// Parameters for one page fetch against a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Maximum number of items to return
    pub max_items: usize,
    /// Cursor to resume after; `None` fetches the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from: Option<String>,
    /// Endpoint-specific filter parameters, passed through verbatim
    #[serde(default, skip_serializing_if = "StringMap::is_empty")]
    pub filters: StringMap,
}

impl PageRequest {
    /// Create a first-page request with no filters
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            start_from: None,
            filters: StringMap::new(),
        }
    }

    /// Set the resume cursor; an empty string counts as absent
    #[must_use]
    pub fn start_from(mut self, cursor: impl Into<String>) -> Self {
        self.start_from = cursor.into().none_if_empty();
        self
    }

    /// Add a single filter parameter
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Replace the whole filter set
    #[must_use]
    pub fn filters(mut self, filters: StringMap) -> Self {
        self.filters = filters;
        self
    }

    /// Render the wire query parameters
    ///
    /// Always includes `maxItems`, includes `startFrom` only when a
    /// cursor is set, and passes every filter through untouched.
    pub fn query_params(&self) -> StringMap {
        let mut params = self.filters.clone();
        params.insert(MAX_ITEMS_PARAM.to_string(), self.max_items.to_string());
        if let Some(cursor) = &self.start_from {
            params.insert(START_FROM_PARAM.to_string(), cursor.clone());
        }
        params
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// One fetched page: the items plus the cursor for the page after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOf<T> {
    /// Items in this page, in listing order
    pub items: Vec<T>,
    /// Cursor resuming after the last item; `None` when no further page
    /// is known to exist
    #[serde(
        default,
        deserialize_with = "cursor_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_cursor: Option<String>,
}

impl<T> PageOf<T> {
    /// Build a page, normalizing an empty-string cursor to absent
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            items,
            next_cursor: next_cursor.none_if_empty(),
        }
    }

    /// A page with no items and no continuation
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a further page is known to exist
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Deserialize a cursor field, treating `""` and `null` as absent
fn cursor_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let cursor = Option::<String>::deserialize(deserializer)?;
    Ok(cursor.none_if_empty())
}
