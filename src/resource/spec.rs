//! Static resource metadata

use crate::error::{Error, Result};

/// Metadata describing one listable resource kind.
///
/// The registry below is the single place a resource's wire conventions
/// live; request building, filter validation, and page-size clamping all
/// read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Resource kind, as used in paths and catalogs (e.g. `"videos"`)
    pub kind: &'static str,
    /// REST path under the API base URL
    pub path: &'static str,
    /// Server-side cap on `maxResults` for this resource
    pub max_page_size: u32,
    /// Whether the list operation demands exactly one filter
    pub requires_filter: bool,
    /// Whether an explicit id list (`id=a,b,c`) is accepted
    pub supports_ids: bool,
    /// Wire parameter selecting children of a parent container, if any
    pub parent_param: Option<&'static str>,
    /// Whether `mine=true` is accepted
    pub supports_mine: bool,
}

/// The built-in resource registry
const RESOURCE_SPECS: &[ResourceSpec] = &[
    ResourceSpec {
        kind: "activities",
        path: "activities",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: false,
        parent_param: Some("channelId"),
        supports_mine: true,
    },
    ResourceSpec {
        kind: "captions",
        path: "captions",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: false,
        parent_param: Some("videoId"),
        supports_mine: false,
    },
    ResourceSpec {
        kind: "channelSections",
        path: "channelSections",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("channelId"),
        supports_mine: true,
    },
    ResourceSpec {
        kind: "channels",
        path: "channels",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: None,
        supports_mine: true,
    },
    ResourceSpec {
        kind: "commentThreads",
        path: "commentThreads",
        max_page_size: 100,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("videoId"),
        supports_mine: false,
    },
    ResourceSpec {
        kind: "comments",
        path: "comments",
        max_page_size: 100,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("parentId"),
        supports_mine: false,
    },
    ResourceSpec {
        kind: "guideCategories",
        path: "guideCategories",
        max_page_size: 50,
        requires_filter: false,
        supports_ids: true,
        parent_param: None,
        supports_mine: false,
    },
    ResourceSpec {
        kind: "playlistItems",
        path: "playlistItems",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("playlistId"),
        supports_mine: false,
    },
    ResourceSpec {
        kind: "playlists",
        path: "playlists",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("channelId"),
        supports_mine: true,
    },
    ResourceSpec {
        kind: "search",
        path: "search",
        max_page_size: 50,
        requires_filter: false,
        supports_ids: false,
        parent_param: Some("channelId"),
        supports_mine: false,
    },
    ResourceSpec {
        kind: "subscriptions",
        path: "subscriptions",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: Some("channelId"),
        supports_mine: true,
    },
    ResourceSpec {
        kind: "videoCategories",
        path: "videoCategories",
        max_page_size: 50,
        requires_filter: false,
        supports_ids: true,
        parent_param: None,
        supports_mine: false,
    },
    ResourceSpec {
        kind: "videos",
        path: "videos",
        max_page_size: 50,
        requires_filter: true,
        supports_ids: true,
        parent_param: None,
        supports_mine: false,
    },
];

impl ResourceSpec {
    /// Look up a resource kind in the registry
    pub fn get(kind: &str) -> Result<&'static ResourceSpec> {
        RESOURCE_SPECS
            .iter()
            .find(|spec| spec.kind == kind)
            .ok_or_else(|| Error::unknown_resource(kind))
    }

    /// All registered resource specs
    pub fn all() -> impl Iterator<Item = &'static ResourceSpec> {
        RESOURCE_SPECS.iter()
    }

    /// Clamp a caller's page-size hint to the server cap.
    ///
    /// A hint above the cap is reduced silently, mirroring what the server
    /// would do; this is not an error. A hint of zero means "let the
    /// server choose" and passes through untouched.
    pub fn clamp_page_size(&self, hint: u32) -> u32 {
        if hint == 0 {
            return 0;
        }
        hint.min(self.max_page_size)
    }
}
