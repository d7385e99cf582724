//! The video resource

use super::common::Thumbnails;
use super::time;
use super::topics::TopicDetails;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video resource.
///
/// Sub-objects are present exactly when their part was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<VideoContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VideoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_details: Option<TopicDetails>,
}

/// Basic details about a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// Wire timestamp; parse with [`VideoSnippet::publish_time`]
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_audio_language: Option<String>,
}

impl VideoSnippet {
    /// Parse `publishedAt` on demand
    pub fn publish_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.published_at
            .as_deref()
            .map(time::parse_timestamp)
            .transpose()
    }
}

/// Video length, quality, and accessibility details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// Wire ISO-8601 duration; parse with
    /// [`VideoContentDetails::duration_seconds`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licensed_content: Option<bool>,
}

impl VideoContentDetails {
    /// Parse the duration into whole seconds on demand
    pub fn duration_seconds(&self) -> Result<Option<u64>> {
        self.duration
            .as_deref()
            .map(time::parse_duration)
            .transpose()
    }
}

/// View and engagement counters.
///
/// The wire carries these as strings; they stay strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<String>,
}

/// Upload, privacy, and license state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_stats_viewable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub made_for_kids: Option<bool>,
}
