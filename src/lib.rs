//! # ytdata
//!
//! A typed, pagination-aware client for the YouTube Data API.
//!
//! ## Features
//!
//! - **Cursor pagination**: one bounded or unbounded collection out of a
//!   page-token list endpoint, with exact count truncation
//! - **Part validation**: unsupported part selections fail client-side,
//!   before any request is sent
//! - **Quota estimation**: local, additive cost estimates per call
//! - **Typed models**: channels, videos, playlists and playlist items
//!   with lazily parsed durations and timestamps
//! - **One generic endpoint client**: list/insert/update/delete driven by
//!   resource metadata instead of per-resource wrapper classes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ytdata::{ApiClient, ListRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::from_env()?;
//!
//!     // 50 most recent uploads of a playlist, two pages of 25
//!     let request = ListRequest::new("playlistItems")?
//!         .parent("UU_x5XG1OV2P6uZZ5FSM9Ttw")
//!         .parts("snippet,contentDetails")
//!         .page_size(25);
//!     let uploads = client.collect(&request, Some(50)).await?;
//!
//!     println!("{} items over {} pages", uploads.len(), uploads.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ApiClient                           │
//! │  list() → PageEnvelope     collect() → Aggregated           │
//! │  insert()/update()/delete()       estimate_quota() → u64    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬────────────┬─────┴──────┬────────────┬───────────┐
//! │  Parts   │  Resource  │ Pagination │  Envelope  │   HTTP    │
//! ├──────────┼────────────┼────────────┼────────────┼───────────┤
//! │ Validate │ Registry   │ Aggregate  │ Normalize  │ GET/POST  │
//! │ Quota    │ Filters    │ SinglePage │ Typed lift │ Retry     │
//! │ Catalogs │ Clamping   │ Streaming  │ PageInfo   │ Backoff   │
//! └──────────┴────────────┴────────────┴────────────┴───────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the remaining public fields before publishing

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport with retry
pub mod http;

/// Part selection and quota estimation
pub mod parts;

/// Resource metadata and list requests
pub mod resource;

/// Cursor pagination
pub mod pagination;

/// Response envelope normalization
pub mod envelope;

/// Typed resource models
pub mod model;

/// Generic resource endpoint client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::{PageEnvelope, PageInfo};
pub use error::{Error, Result};
pub use pagination::{Aggregated, FetchMode, PageMeta, Pager};
pub use parts::{Parts, PartsCatalog, QuotaCatalog};
pub use resource::{ListFilter, ListRequest, ResourceSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
