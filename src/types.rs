//! Common types used throughout ytdata
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Opaque, server-issued page token.
///
/// Consumers never construct or parse one; it is forwarded verbatim into
/// the `pageToken` request parameter. `None` means "start from the first
/// page" on the way in and "no more pages" on the way out.
pub type PageToken = String;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
///
/// The API occasionally reports the end of a result set as an empty
/// `nextPageToken` rather than omitting the field; pagination relies on
/// this normalization to terminate.
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
