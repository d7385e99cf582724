//! Pagination result and mode types

use crate::envelope::{PageEnvelope, PageInfo};
use crate::types::{OptionStringExt, PageToken};

/// How a pagination run decides when to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    /// Follow continuation tokens, accumulating items.
    ///
    /// `count` bounds the aggregate across all pages; `None` fetches
    /// every page the server has.
    Aggregate { count: Option<usize> },

    /// Fetch exactly one page, starting from the caller's token
    /// (`None` for the first page), regardless of whether more pages
    /// exist. Lets a caller drive paging by hand.
    SinglePage { token: Option<PageToken> },
}

/// Envelope metadata of the last page a run fetched.
///
/// When a run stops early (count satisfied), `next_page_token` holds the
/// token it chose not to follow so the caller can resume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMeta {
    /// Resource-type tag of the response (e.g. `youtube#videoListResponse`)
    pub kind: Option<String>,
    /// Entity tag of the last page
    pub etag: Option<String>,
    /// Continuation token left unfollowed, if any
    pub next_page_token: Option<PageToken>,
    /// Token of the page preceding the last one fetched
    pub prev_page_token: Option<PageToken>,
    /// The last page's paging details (server estimate, not authoritative)
    pub page_info: Option<PageInfo>,
}

impl PageMeta {
    /// Capture the metadata of one envelope, normalizing empty tokens
    pub fn of<T>(envelope: &PageEnvelope<T>) -> Self {
        Self {
            kind: envelope.kind.clone(),
            etag: envelope.etag.clone(),
            next_page_token: envelope.next_page_token.clone().none_if_empty(),
            prev_page_token: envelope.prev_page_token.clone().none_if_empty(),
            page_info: envelope.page_info.clone(),
        }
    }
}

/// The outcome of a pagination run.
///
/// Items keep server order across pages; duplicates the server returns are
/// preserved. A run either completes (possibly truncated to the requested
/// count, possibly shorter when the resource set is small) or the fetch
/// error propagates — there is no partial-success state.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated<T> {
    /// Accumulated items in page order
    pub items: Vec<T>,
    /// Metadata of the last page fetched; default if no page was fetched
    pub meta: PageMeta,
    /// Number of pages fetched
    pub pages: usize,
}

impl<T> Default for Aggregated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            pages: 0,
        }
    }
}

impl<T> Aggregated<T> {
    /// Number of accumulated items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the run produced no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the result, keeping only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
