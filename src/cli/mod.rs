//! Command-line interface
//!
//! Thin wrapper over [`ApiClient`](crate::client::ApiClient): argument
//! parsing in `commands`, execution in `runner`.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
