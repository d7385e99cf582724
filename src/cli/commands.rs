//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Typed, pagination-aware client for the YouTube Data API
#[derive(Parser, Debug)]
#[command(name = "ytdata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file and environment)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources, aggregating pages until --count is satisfied
    List {
        /// Resource kind (videos, channels, playlists, ...)
        resource: String,

        /// Filter: explicit resource ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,

        /// Filter: parent container id (channel, playlist, ...)
        #[arg(long)]
        parent: Option<String>,

        /// Filter: resources owned by the authorized account
        #[arg(long)]
        mine: bool,

        /// Parts to request (comma-separated; default: all supported)
        #[arg(long)]
        parts: Option<String>,

        /// Total items to aggregate across pages (default: all)
        #[arg(long)]
        count: Option<usize>,

        /// Per-page size hint; clamped to the resource's cap
        #[arg(long)]
        page_size: Option<u32>,

        /// Start from an explicit page token
        #[arg(long)]
        page_token: Option<String>,

        /// Fetch a single page instead of aggregating
        #[arg(long)]
        single_page: bool,
    },

    /// Show the parts a resource supports
    Parts {
        /// Resource kind
        resource: String,
    },

    /// Estimate the quota cost of one list call
    Quota {
        /// Resource kind
        resource: String,

        /// Parts to request (comma-separated; default: all supported)
        #[arg(long)]
        parts: Option<String>,
    },

    /// List the known resource kinds
    Resources,
}
