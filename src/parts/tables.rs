//! Built-in reference tables for parts and quota costs
//!
//! Source of truth for which response parts each resource kind supports
//! and what each part adds to the cost of a list call.

/// Allowed part names per resource kind
pub(super) const RESOURCE_PARTS: &[(&str, &[&str])] = &[
    ("activities", &["contentDetails", "id", "snippet"]),
    ("captions", &["id", "snippet"]),
    ("channelSections", &["contentDetails", "id", "snippet"]),
    (
        "channels",
        &[
            "auditDetails",
            "brandingSettings",
            "contentDetails",
            "contentOwnerDetails",
            "id",
            "localizations",
            "snippet",
            "statistics",
            "status",
            "topicDetails",
        ],
    ),
    ("commentThreads", &["id", "replies", "snippet"]),
    ("comments", &["id", "snippet"]),
    ("guideCategories", &["id", "snippet"]),
    ("i18nLanguages", &["snippet"]),
    ("i18nRegions", &["snippet"]),
    ("playlistItems", &["contentDetails", "id", "snippet", "status"]),
    (
        "playlists",
        &[
            "contentDetails",
            "id",
            "localizations",
            "player",
            "snippet",
            "status",
        ],
    ),
    ("search", &["id", "snippet"]),
    (
        "subscriptions",
        &["contentDetails", "id", "snippet", "subscriberSnippet"],
    ),
    ("videoCategories", &["id", "snippet"]),
    (
        "videos",
        &[
            "contentDetails",
            "fileDetails",
            "id",
            "liveStreamingDetails",
            "localizations",
            "player",
            "processingDetails",
            "recordingDetails",
            "snippet",
            "statistics",
            "status",
            "suggestions",
            "topicDetails",
        ],
    ),
];

/// Quota units a single list call costs before any parts are added
pub(super) const BASE_LIST_COST: u64 = 1;

/// Quota units each part adds to a call.
///
/// Parts not listed here cost nothing.
pub(super) const PART_COSTS: &[(&str, u64)] = &[
    ("auditDetails", 4),
    ("brandingSettings", 2),
    ("contentDetails", 2),
    ("contentOwnerDetails", 2),
    ("fileDetails", 1),
    ("id", 0),
    ("liveStreamingDetails", 2),
    ("localizations", 2),
    ("player", 0),
    ("processingDetails", 1),
    ("recordingDetails", 2),
    ("replies", 2),
    ("snippet", 2),
    ("statistics", 2),
    ("status", 2),
    ("subscriberSnippet", 2),
    ("suggestions", 1),
    ("topicDetails", 2),
];
