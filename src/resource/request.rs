//! List request building and filter resolution

use super::spec::ResourceSpec;
use crate::error::{Error, Result};
use crate::parts::{Parts, PartsCatalog};

/// A mutually exclusive selector for a list call.
///
/// List operations accept several alternative filter modes; a request must
/// settle on exactly one (for resources that require filtering at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Explicit resource ids, joined into the `id` parameter
    Ids(Vec<String>),
    /// Children of a parent container; the wire parameter comes from the
    /// resource spec (`playlistId`, `channelId`, ...)
    Parent(String),
    /// Resources owned by the authorized account (`mine=true`)
    Mine,
}

impl ListFilter {
    /// Short mode label used in conflict diagnostics
    fn label(&self) -> &'static str {
        match self {
            ListFilter::Ids(_) => "id",
            ListFilter::Parent(_) => "parent",
            ListFilter::Mine => "mine",
        }
    }

    /// Resolve this filter to its wire parameter and value for `spec`
    fn to_wire(&self, spec: &ResourceSpec) -> Result<(String, String)> {
        match self {
            ListFilter::Ids(ids) => {
                if !spec.supports_ids {
                    return Err(Error::unsupported_filter(spec.kind, "id"));
                }
                Ok(("id".to_string(), ids.join(",")))
            }
            ListFilter::Parent(id) => {
                let param = spec
                    .parent_param
                    .ok_or_else(|| Error::unsupported_filter(spec.kind, "parent"))?;
                Ok((param.to_string(), id.clone()))
            }
            ListFilter::Mine => {
                if !spec.supports_mine {
                    return Err(Error::unsupported_filter(spec.kind, "mine"));
                }
                Ok(("mine".to_string(), "true".to_string()))
            }
        }
    }
}

/// A validated-on-render request against one resource's list operation.
///
/// Construction is cheap and infallible beyond the registry lookup;
/// validation (parts subset, filter exclusivity) happens when the wire
/// query is rendered, always before any network call.
#[derive(Debug, Clone)]
pub struct ListRequest {
    spec: &'static ResourceSpec,
    filters: Vec<ListFilter>,
    parts: Option<Parts>,
    page_size: Option<u32>,
    page_token: Option<String>,
}

impl ListRequest {
    /// Start a request against a registered resource kind
    pub fn new(resource: &str) -> Result<Self> {
        Ok(Self {
            spec: ResourceSpec::get(resource)?,
            filters: Vec::new(),
            parts: None,
            page_size: None,
            page_token: None,
        })
    }

    /// Filter by an explicit id list
    #[must_use]
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters
            .push(ListFilter::Ids(ids.into_iter().map(Into::into).collect()));
        self
    }

    /// Filter by a parent container id
    #[must_use]
    pub fn parent(mut self, id: impl Into<String>) -> Self {
        self.filters.push(ListFilter::Parent(id.into()));
        self
    }

    /// Filter to resources owned by the authorized account
    #[must_use]
    pub fn mine(mut self) -> Self {
        self.filters.push(ListFilter::Mine);
        self
    }

    /// Select response parts; defaults to every supported part
    #[must_use]
    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    /// Per-page size hint; clamped to the resource's cap on render
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Start from an explicit page token (manual page-by-page driving)
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// The resource spec this request targets
    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    /// The requested parts, if any were set
    pub fn requested_parts(&self) -> Option<&Parts> {
        self.parts.as_ref()
    }

    /// The explicit start token, if one was set
    pub fn start_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    /// The effective per-page size after clamping; `None` lets the server
    /// choose.
    pub fn effective_page_size(&self) -> Option<u32> {
        self.page_size
            .map(|size| self.spec.clamp_page_size(size))
            .filter(|&size| size > 0)
    }

    /// Enforce filter mutual exclusivity.
    ///
    /// Exactly one filter must be present when the resource requires one;
    /// several at once is always an error, never resolved by precedence.
    pub fn resolve_filter(&self) -> Result<Option<(String, String)>> {
        match self.filters.as_slice() {
            [] => {
                if self.spec.requires_filter {
                    Err(Error::missing_filter(self.spec.kind))
                } else {
                    Ok(None)
                }
            }
            [single] => single.to_wire(self.spec).map(Some),
            many => Err(Error::conflicting_filters(
                self.spec.kind,
                many.iter().map(ListFilter::label),
            )),
        }
    }

    /// Render the wire query for one page fetch.
    ///
    /// `cursor` overrides the request's own start token, which is how the
    /// paginator threads continuation tokens through repeated fetches.
    /// All client-side validation happens here, before the request exists
    /// on the wire.
    pub fn query_for_page(
        &self,
        catalog: &PartsCatalog,
        cursor: Option<&str>,
    ) -> Result<Vec<(String, String)>> {
        let mut query = Vec::new();

        query.push((
            "part".to_string(),
            catalog.validate(self.spec.kind, self.parts.as_ref())?,
        ));

        if let Some((param, value)) = self.resolve_filter()? {
            query.push((param, value));
        }

        if let Some(size) = self.effective_page_size() {
            query.push(("maxResults".to_string(), size.to_string()));
        }

        let token = cursor.or(self.page_token.as_deref());
        if let Some(token) = token {
            query.push(("pageToken".to_string(), token.to_string()));
        }

        Ok(query)
    }
}
