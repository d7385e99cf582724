//! Typed resource models
//!
//! # Overview
//!
//! Each resource is an immutable-after-construction value object built
//! straight from the wire JSON. Nested sub-objects (snippet, statistics,
//! status, contentDetails, topicDetails, ...) are `Option`al: a field is
//! present exactly when its part was requested and the resource supports
//! it.
//!
//! Scalar conversions that can fail — ISO-8601 durations, RFC 3339
//! timestamps — are deferred: the wire string is stored verbatim and
//! parsed on demand, so one malformed field never poisons the rest of the
//! record.

mod channel;
mod common;
mod playlist;
pub mod time;
mod topics;
mod video;

pub use channel::{
    BrandingChannel, BrandingImage, BrandingSettings, Channel, ChannelContentDetails,
    ChannelSnippet, ChannelStatistics, ChannelStatus, RelatedPlaylists,
};
pub use common::{ResourceId, Thumbnail, Thumbnails};
pub use playlist::{
    Playlist, PlaylistContentDetails, PlaylistItem, PlaylistItemContentDetails,
    PlaylistItemSnippet, PlaylistSnippet, PlaylistStatus,
};
pub use topics::{Topic, TopicCatalog, TopicDetails};
pub use video::{
    Video, VideoContentDetails, VideoSnippet, VideoStatistics, VideoStatus,
};
