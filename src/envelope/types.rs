//! Envelope wire types and normalization

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Paging details for a list response.
///
/// `totalResults` is the server's estimate of the full result-set size.
/// It may disagree across pages of the same query and is not
/// authoritative; only the page tokens decide when pagination ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<i64>,
}

/// One page of a list response.
///
/// Generic over the item type: `PageEnvelope<JsonValue>` is the raw
/// structural form, `PageEnvelope<Video>` (etc.) the typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct PageEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(rename = "nextPageToken", skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(rename = "prevPageToken", skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
    #[serde(rename = "pageInfo", skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            kind: None,
            etag: None,
            next_page_token: None,
            prev_page_token: None,
            page_info: None,
            items: Vec::new(),
        }
    }
}

impl PageEnvelope<JsonValue> {
    /// Lift the raw items into typed resource objects.
    ///
    /// Items convert one at a time so a failure names the resource kind
    /// and leaves no half-typed envelope behind. This is the composition
    /// point between the raw and typed fetch operations.
    pub fn into_typed<T: DeserializeOwned>(self, kind: &str) -> Result<PageEnvelope<T>> {
        let items = self
            .items
            .into_iter()
            .map(|raw| {
                serde_json::from_value(raw).map_err(|e| Error::normalize(kind, e.to_string()))
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(PageEnvelope {
            kind: self.kind,
            etag: self.etag,
            next_page_token: self.next_page_token,
            prev_page_token: self.prev_page_token,
            page_info: self.page_info,
            items,
        })
    }
}

/// Normalize a raw JSON document into a page envelope.
///
/// Pure structural mapping: envelope fields pass through under their wire
/// names, absent fields become `None`, absent `items` becomes an empty
/// list. `resource_kind` only qualifies the error message.
pub fn normalize<T: DeserializeOwned>(resource_kind: &str, raw: JsonValue) -> Result<PageEnvelope<T>> {
    serde_json::from_value(raw).map_err(|e| Error::normalize(resource_kind, e.to_string()))
}
