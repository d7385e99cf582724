//! Generic resource endpoint client
//!
//! One metadata-driven client covers every resource kind: list (one page,
//! raw or typed), aggregate collection via the pager, a lazy page stream,
//! and the write operations. Validation always runs before the request
//! reaches the wire; the reference catalogs are injectable for tests.

use crate::config::ClientConfig;
use crate::envelope::{normalize, PageEnvelope};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{stream_pages, Aggregated, Pager};
use crate::parts::{Parts, PartsCatalog, QuotaCatalog};
use crate::resource::{ListRequest, ResourceSpec};
use crate::types::JsonValue;
use futures::Stream;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the resource API.
///
/// `fetch_typed` operations are composed from `fetch_raw` ones: the raw
/// envelope is fetched first and its items lifted afterwards, so both
/// shapes share one request path.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    parts: PartsCatalog,
    quota: QuotaCatalog,
}

impl ApiClient {
    /// Create a client from a configuration, using the built-in catalogs
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config.validate()?)?,
            parts: PartsCatalog::builtin().clone(),
            quota: QuotaCatalog::builtin().clone(),
        })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Substitute the allowed-parts catalog
    #[must_use]
    pub fn with_parts_catalog(mut self, catalog: PartsCatalog) -> Self {
        self.parts = catalog;
        self
    }

    /// Substitute the quota-cost catalog
    #[must_use]
    pub fn with_quota_catalog(mut self, catalog: QuotaCatalog) -> Self {
        self.quota = catalog;
        self
    }

    /// The allowed-parts catalog in use
    pub fn parts_catalog(&self) -> &PartsCatalog {
        &self.parts
    }

    // ========================================================================
    // List operations
    // ========================================================================

    /// Fetch exactly one page as a raw envelope.
    ///
    /// Honors the request's explicit page token, so a caller can drive
    /// pagination by hand one page at a time.
    pub async fn list(&self, request: &ListRequest) -> Result<PageEnvelope<JsonValue>> {
        let result = Pager::single_page(request.start_token().map(str::to_string))
            .with_page_limit(request.effective_page_size().unwrap_or(0))
            .run(|cursor, _limit| async move {
                self.fetch_page(request, cursor.as_deref()).await
            })
            .await?;

        Ok(PageEnvelope {
            kind: result.meta.kind,
            etag: result.meta.etag,
            next_page_token: result.meta.next_page_token,
            prev_page_token: result.meta.prev_page_token,
            page_info: result.meta.page_info,
            items: result.items,
        })
    }

    /// Fetch exactly one page with typed items
    pub async fn list_typed<T: DeserializeOwned>(
        &self,
        request: &ListRequest,
    ) -> Result<PageEnvelope<T>> {
        self.list(request).await?.into_typed(request.spec().kind)
    }

    /// Aggregate pages until `count` raw items are collected.
    ///
    /// `None` collects everything the server has. The result is complete
    /// or the fetch error propagates; there is no partial success.
    pub async fn collect(
        &self,
        request: &ListRequest,
        count: Option<usize>,
    ) -> Result<Aggregated<JsonValue>> {
        // Surface validation errors before the loop, even for count 0.
        request.query_for_page(&self.parts, None)?;

        let spec = request.spec();
        debug!(resource = spec.kind, ?count, "starting aggregation");

        Pager::aggregate(count)
            .with_page_limit(request.effective_page_size().unwrap_or(0))
            .run(|cursor, _limit| async move {
                self.fetch_page(request, cursor.as_deref()).await
            })
            .await
    }

    /// Aggregate pages until `count` typed items are collected
    pub async fn collect_typed<T: DeserializeOwned>(
        &self,
        request: &ListRequest,
        count: Option<usize>,
    ) -> Result<Aggregated<T>> {
        let raw = self.collect(request, count).await?;
        let kind = request.spec().kind;
        let items = raw
            .items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| Error::normalize(kind, e.to_string()))
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Aggregated {
            items,
            meta: raw.meta,
            pages: raw.pages,
        })
    }

    /// Lazily stream raw pages of a list query.
    ///
    /// Pages are fetched strictly one after another as the stream is
    /// polled; dropping the stream abandons the remaining pages.
    pub fn page_stream<'a>(
        &'a self,
        request: &'a ListRequest,
    ) -> impl Stream<Item = Result<PageEnvelope<JsonValue>>> + 'a {
        stream_pages(
            move |cursor, _limit| async move { self.fetch_page(request, cursor.as_deref()).await },
            request.effective_page_size().unwrap_or(0),
        )
    }

    /// The page-fetch primitive: validate, render the query, issue one
    /// GET, normalize the envelope.
    async fn fetch_page(
        &self,
        request: &ListRequest,
        cursor: Option<&str>,
    ) -> Result<PageEnvelope<JsonValue>> {
        let spec = request.spec();
        let query = request.query_for_page(&self.parts, cursor)?;
        let raw = self.http.get_json(spec.path, &query).await?;
        normalize(spec.kind, raw)
    }

    // ========================================================================
    // Write operations
    // ========================================================================

    /// Insert a resource; `parts` selects the sections of `body` to write
    /// and of the response to return
    pub async fn insert(
        &self,
        resource: &str,
        parts: Option<&Parts>,
        body: &JsonValue,
    ) -> Result<JsonValue> {
        let spec = ResourceSpec::get(resource)?;
        let query = vec![("part".to_string(), self.parts.validate(spec.kind, parts)?)];
        self.http.post_json(spec.path, &query, body).await
    }

    /// Update a resource in place
    pub async fn update(
        &self,
        resource: &str,
        parts: Option<&Parts>,
        body: &JsonValue,
    ) -> Result<JsonValue> {
        let spec = ResourceSpec::get(resource)?;
        let query = vec![("part".to_string(), self.parts.validate(spec.kind, parts)?)];
        self.http.put_json(spec.path, &query, body).await
    }

    /// Delete a resource by id
    pub async fn delete(&self, resource: &str, id: &str) -> Result<()> {
        let spec = ResourceSpec::get(resource)?;
        self.http
            .delete(spec.path, &[("id".to_string(), id.to_string())])
            .await
    }

    // ========================================================================
    // Quota estimation
    // ========================================================================

    /// Estimate the quota units one page of this request will cost.
    ///
    /// Local arithmetic over the cost catalog; informational only, never
    /// gates the call.
    pub fn estimate_quota(&self, request: &ListRequest) -> Result<u64> {
        let rendered = self
            .parts
            .validate(request.spec().kind, request.requested_parts())?;
        Ok(self.quota.estimate(&Parts::from(rendered.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_estimate_quota_for_explicit_parts() {
        let request = ListRequest::new("videos")
            .unwrap()
            .ids(["v1"])
            .parts("snippet,statistics");
        // base 1 + snippet 2 + statistics 2
        assert_eq!(client().estimate_quota(&request).unwrap(), 5);
    }

    #[test]
    fn test_estimate_quota_defaults_to_full_part_set() {
        let request = ListRequest::new("playlistItems").unwrap().parent("PL1");
        // base 1 + contentDetails 2 + id 0 + snippet 2 + status 2
        assert_eq!(client().estimate_quota(&request).unwrap(), 7);
    }

    #[test]
    fn test_estimate_quota_rejects_invalid_parts() {
        let request = ListRequest::new("videos")
            .unwrap()
            .ids(["v1"])
            .parts("bogusPart");
        let err = client().estimate_quota(&request).unwrap_err();
        assert_eq!(err.code(), "unsupportedParts");
    }

    #[test]
    fn test_substitute_catalogs_are_injected() {
        let mut parts = PartsCatalog::default();
        parts.insert("videos", ["blueprint"]);
        let mut quota = QuotaCatalog::default();
        quota.set_base_cost(10);
        quota.set_cost("blueprint", 3);

        let client = client().with_parts_catalog(parts).with_quota_catalog(quota);

        let request = ListRequest::new("videos")
            .unwrap()
            .ids(["v1"])
            .parts("blueprint");
        assert_eq!(client.estimate_quota(&request).unwrap(), 13);

        // The built-in part set no longer applies
        let request = ListRequest::new("videos").unwrap().ids(["v1"]).parts("snippet");
        assert!(client.estimate_quota(&request).is_err());
    }
}
