//! Playlist and playlist-item resources

use super::common::{ResourceId, Thumbnails};
use super::time;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<PlaylistSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlaylistStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<PlaylistContentDetails>,
}

/// Basic details about a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    /// Wire timestamp; parse with [`PlaylistSnippet::publish_time`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
}

impl PlaylistSnippet {
    /// Parse `publishedAt` on demand
    pub fn publish_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.published_at
            .as_deref()
            .map(time::parse_timestamp)
            .transpose()
    }
}

/// Playlist privacy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<String>,
}

/// Playlist size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
}

/// One entry of a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<PlaylistItemSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<PlaylistItemContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlaylistStatus>,
}

/// Basic details about a playlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    /// Wire timestamp of when the item was added to the playlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

impl PlaylistItemSnippet {
    /// Parse `publishedAt` on demand
    pub fn publish_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.published_at
            .as_deref()
            .map(time::parse_timestamp)
            .transpose()
    }
}

/// The video a playlist entry points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Wire timestamp of the referenced video's publication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_published_at: Option<String>,
}
