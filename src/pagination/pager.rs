//! The pagination state machine

use super::types::{Aggregated, FetchMode, PageMeta};
use crate::envelope::PageEnvelope;
use crate::error::Result;
use crate::types::{OptionStringExt, PageToken};
use futures::stream::{self, Stream};
use std::future::Future;
use tracing::debug;

/// Drives repeated page fetches against an abstract fetch primitive.
///
/// The fetch primitive receives the cursor for the next page (`None` for
/// the first) and the per-page limit, and returns one envelope. The pager
/// never retries a failed fetch — the error propagates as-is and nothing
/// accumulated so far is returned.
#[derive(Debug, Clone)]
pub struct Pager {
    mode: FetchMode,
    page_limit: u32,
}

impl Pager {
    /// Aggregate pages until `count` items are collected (`None` = all)
    pub fn aggregate(count: Option<usize>) -> Self {
        Self {
            mode: FetchMode::Aggregate { count },
            page_limit: 0,
        }
    }

    /// Fetch exactly one page, resuming from `token` when given
    pub fn single_page(token: Option<PageToken>) -> Self {
        Self {
            mode: FetchMode::SinglePage { token },
            page_limit: 0,
        }
    }

    /// Per-page limit forwarded to every fetch; 0 lets the server choose.
    ///
    /// Clamping against the resource cap is the caller's job — the pager
    /// forwards the value verbatim.
    #[must_use]
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// Run the fetch loop to completion.
    ///
    /// Stops when the requested count is reached (truncating the final
    /// page so the result never exceeds it), when the server stops
    /// issuing continuation tokens (a shortfall is not an error), or
    /// after one fetch in single-page mode.
    pub async fn run<T, F, Fut>(&self, mut fetch_page: F) -> Result<Aggregated<T>>
    where
        F: FnMut(Option<PageToken>, u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<T>>>,
    {
        let mut result = Aggregated::default();

        // Nothing was asked for; don't touch the network.
        if matches!(self.mode, FetchMode::Aggregate { count: Some(0) }) {
            return Ok(result);
        }

        let mut cursor: Option<PageToken> = match &self.mode {
            FetchMode::Aggregate { .. } => None,
            FetchMode::SinglePage { token } => token.clone(),
        };

        loop {
            let envelope = fetch_page(cursor.clone(), self.page_limit).await?;
            result.pages += 1;
            result.meta = PageMeta::of(&envelope);

            let fetched = envelope.items.len();
            result.items.extend(envelope.items);
            debug!(
                page = result.pages,
                fetched,
                total = result.items.len(),
                "fetched page"
            );

            match &self.mode {
                FetchMode::SinglePage { .. } => break,
                FetchMode::Aggregate { count } => {
                    if let Some(want) = count {
                        if result.items.len() >= *want {
                            result.items.truncate(*want);
                            break;
                        }
                    }
                    match result.meta.next_page_token.clone() {
                        Some(token) => cursor = Some(token),
                        None => break,
                    }
                }
            }
        }

        Ok(result)
    }
}

/// Lazy page-by-page variant of the aggregate loop.
///
/// Yields each envelope as it arrives and stops when the server stops
/// issuing tokens. Fetches stay strictly sequential: the next one is not
/// started until the current envelope has been yielded.
pub fn stream_pages<T, F, Fut>(
    fetch_page: F,
    page_limit: u32,
) -> impl Stream<Item = Result<PageEnvelope<T>>>
where
    F: FnMut(Option<PageToken>, u32) -> Fut,
    Fut: Future<Output = Result<PageEnvelope<T>>>,
{
    // State: the fetch primitive plus the cursor for the next page;
    // the outer None marks exhaustion.
    stream::try_unfold(
        (fetch_page, Some(None::<PageToken>)),
        move |(mut fetch, pending)| async move {
            let Some(cursor) = pending else {
                return Ok(None);
            };
            let envelope = fetch(cursor, page_limit).await?;
            let next = envelope
                .next_page_token
                .clone()
                .none_if_empty()
                .map(Some);
            Ok(Some((envelope, (fetch, next))))
        },
    )
}
