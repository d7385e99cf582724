//! Nested value objects shared across resource kinds

use serde::{Deserialize, Serialize};

/// A single thumbnail image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The thumbnail sizes the API may attach to a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Thumbnails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

/// A polymorphic reference to another resource (playlist items point at
/// their video this way)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}
