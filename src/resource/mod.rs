//! Resource metadata and list requests
//!
//! # Overview
//!
//! Every resource kind the API exposes is described by one
//! [`ResourceSpec`]: its REST path, its page-size cap, and which filter
//! modes its list operation accepts. A [`ListRequest`] pairs a spec with
//! the caller's filter, part selection, and paging hints, and renders the
//! validated wire query. One metadata-driven request type replaces a
//! per-resource wrapper class for every kind.

mod request;
mod spec;

pub use request::{ListFilter, ListRequest};
pub use spec::ResourceSpec;
