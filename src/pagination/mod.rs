//! Cursor pagination
//!
//! # Overview
//!
//! The paginator turns a "fetch one page given a cursor" primitive into a
//! bounded or unbounded aggregated collection. It owns the continuation
//! decisions — count reached, tokens exhausted, or single-page mode — and
//! nothing else: no HTTP, no retry, no per-resource knowledge. Each page's
//! cursor depends on the previous response, so fetches are strictly
//! sequential.

mod pager;
mod types;

pub use pager::{stream_pages, Pager};
pub use types::{Aggregated, FetchMode, PageMeta};
