//! HTTP transport
//!
//! # Overview
//!
//! The transport is the crate's single point of contact with the network.
//! It owns retry policy (exponential backoff on 429/5xx, timeouts and
//! connection errors), credential injection, and decoding of the API's
//! error envelope. Nothing above this layer retries: the paginator sees
//! either a page or an error.

mod client;

pub use client::HttpClient;

#[cfg(test)]
mod tests;
