//! Part selection and quota estimation
//!
//! # Overview
//!
//! Every list call names the response sections ("parts") it wants back.
//! Each resource kind supports a fixed set of part names; requesting an
//! unsupported part is a client-side validation error raised before any
//! network traffic. This module owns the part selector type, the
//! per-resource allowed-part catalog, and the additive quota estimator.
//!
//! Catalogs are plain values injected into the client so tests can
//! substitute their own tables; the built-ins are process-wide statics.

mod catalog;
mod tables;

pub use catalog::{Parts, PartsCatalog, QuotaCatalog};
