//! Common types used throughout pagekit
//!
//! This module contains shared type aliases and small utility traits
//! used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
///
/// Used for query parameters and filter sets, where both sides of the
/// map travel as plain strings.
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for treating empty strings as absent
///
/// Backends are inconsistent about signalling "no more pages": some omit
/// the continuation cursor, others send it as `""`. Everything inside
/// this crate normalizes to `Option<String>` where `None` means absent.
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("next".to_string()).none_if_empty(),
            Some("next".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("next".to_string().none_if_empty(), Some("next".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }

    #[test]
    fn test_string_map_round_trip() {
        let mut params = StringMap::new();
        params.insert("nameFilter".to_string(), "ok*".to_string());
        assert_eq!(params.get("nameFilter").map(String::as_str), Some("ok*"));
    }
}
