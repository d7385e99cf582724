//! Part selector and catalog types

use super::tables::{BASE_LIST_COST, PART_COSTS, RESOURCE_PARTS};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A set of requested part names.
///
/// Accepts a comma-joined string or any collection of names; stored as an
/// ordered set so rendering to a wire parameter is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parts(BTreeSet<String>);

impl Parts {
    /// Create an empty selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part name
    pub fn insert(&mut self, part: impl Into<String>) {
        self.0.insert(part.into());
    }

    /// Check whether a part name is selected
    pub fn contains(&self, part: &str) -> bool {
        self.0.contains(part)
    }

    /// Number of selected parts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the selector is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the selected parts in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Render as the wire value: sorted, comma-joined
    pub fn to_param(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param())
    }
}

impl From<&str> for Parts {
    fn from(joined: &str) -> Self {
        joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<String> for Parts {
    fn from(joined: String) -> Self {
        Self::from(joined.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for Parts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Per-resource allowed-part sets.
///
/// The built-in catalog covers the public resource kinds; substitute
/// catalogs can be injected for tests or API previews.
#[derive(Debug, Clone, Default)]
pub struct PartsCatalog {
    allowed: BTreeMap<String, BTreeSet<String>>,
}

static BUILTIN_PARTS: Lazy<PartsCatalog> = Lazy::new(|| {
    let mut catalog = PartsCatalog::default();
    for (resource, parts) in RESOURCE_PARTS {
        catalog.insert(*resource, parts.iter().copied());
    }
    catalog
});

impl PartsCatalog {
    /// The built-in catalog of public resource kinds
    pub fn builtin() -> &'static Self {
        &BUILTIN_PARTS
    }

    /// Register (or replace) the allowed parts for a resource
    pub fn insert<I, S>(&mut self, resource: impl Into<String>, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed
            .insert(resource.into(), parts.into_iter().map(Into::into).collect());
    }

    /// Allowed parts for a resource, if it is known
    pub fn allowed(&self, resource: &str) -> Option<&BTreeSet<String>> {
        self.allowed.get(resource)
    }

    /// Validate a part selection against a resource and render the wire value.
    ///
    /// `None` selects every part the resource supports (maximal fetch).
    /// Any part outside the allowed set fails with
    /// [`Error::UnsupportedParts`] naming the offenders; nothing is sent to
    /// the server on that path. The returned string is sorted so identical
    /// selections always render identically.
    pub fn validate(&self, resource: &str, requested: Option<&Parts>) -> Result<String> {
        let allowed = self
            .allowed(resource)
            .ok_or_else(|| Error::unknown_resource(resource))?;

        let requested = match requested {
            None => return Ok(allowed.iter().cloned().collect::<Vec<_>>().join(",")),
            Some(parts) => parts,
        };

        let unsupported: Vec<String> = requested
            .iter()
            .filter(|p| !allowed.contains(*p))
            .map(str::to_string)
            .collect();
        if !unsupported.is_empty() {
            return Err(Error::unsupported_parts(resource, unsupported));
        }

        Ok(requested.to_param())
    }
}

/// Additive quota-cost estimator.
///
/// Purely informational: the estimate never gates a call. Costs are a
/// local table, not a server contract.
#[derive(Debug, Clone)]
pub struct QuotaCatalog {
    base_cost: u64,
    costs: BTreeMap<String, u64>,
}

impl Default for QuotaCatalog {
    fn default() -> Self {
        Self {
            base_cost: BASE_LIST_COST,
            costs: BTreeMap::new(),
        }
    }
}

static BUILTIN_QUOTA: Lazy<QuotaCatalog> = Lazy::new(|| {
    let mut catalog = QuotaCatalog::default();
    for (part, cost) in PART_COSTS {
        catalog.set_cost(*part, *cost);
    }
    catalog
});

impl QuotaCatalog {
    /// The built-in cost table
    pub fn builtin() -> &'static Self {
        &BUILTIN_QUOTA
    }

    /// Set the base cost of one list call
    pub fn set_base_cost(&mut self, cost: u64) {
        self.base_cost = cost;
    }

    /// Set (or replace) the cost of one part
    pub fn set_cost(&mut self, part: impl Into<String>, cost: u64) {
        self.costs.insert(part.into(), cost);
    }

    /// Estimate the quota units one list call will consume.
    ///
    /// Base call cost plus the cost of each selected part; parts absent
    /// from the table contribute zero.
    pub fn estimate(&self, parts: &Parts) -> u64 {
        self.base_cost
            + parts
                .iter()
                .map(|p| self.costs.get(p).copied().unwrap_or(0))
                .sum::<u64>()
    }
}
