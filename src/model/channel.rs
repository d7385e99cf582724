//! The channel resource

use super::common::Thumbnails;
use super::time;
use super::topics::TopicDetails;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A channel resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<ChannelSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ChannelContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ChannelStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChannelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_details: Option<TopicDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding_settings: Option<BrandingSettings>,
}

/// Basic details about a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    /// Wire timestamp; parse with [`ChannelSnippet::publish_time`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ChannelSnippet {
    /// Parse `publishedAt` on demand
    pub fn publish_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.published_at
            .as_deref()
            .map(time::parse_timestamp)
            .transpose()
    }
}

/// Playlists the channel maintains implicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPlaylists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
}

/// Channel content associations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_playlists: Option<RelatedPlaylists>,
}

/// Subscriber and view counters, as wire strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_subscriber_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<String>,
}

/// Privacy and linkage state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_linked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub made_for_kids: Option<bool>,
}

/// Channel branding text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandingChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Channel banner imagery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandingImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_external_url: Option<String>,
}

/// Channel branding settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<BrandingChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<BrandingImage>,
}
