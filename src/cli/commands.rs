//! CLI commands and argument parsing

use crate::types::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// deskpager CLI
#[derive(Parser, Debug)]
#[command(name = "deskpager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page tokens shown for a page position
    Window {
        /// Current page (1-based)
        #[arg(long)]
        current: usize,

        /// Total number of pages
        #[arg(long)]
        total: usize,
    },

    /// Print the item range shown on a page
    Range {
        /// Current page (1-based)
        #[arg(long)]
        current: usize,

        /// Items per page
        #[arg(long)]
        per_page: usize,

        /// Total number of items
        #[arg(long)]
        total_items: usize,
    },

    /// Render the pagination control as HTML
    Render {
        /// Current page (1-based)
        #[arg(long)]
        current: usize,

        /// Total number of pages
        #[arg(long)]
        total: usize,

        /// Total number of items (enables the range text)
        #[arg(long)]
        total_items: Option<usize>,

        /// Items per page (enables the range text)
        #[arg(long)]
        per_page: Option<usize>,

        /// Control theme (defaults to the configured theme)
        #[arg(long)]
        theme: Option<Theme>,

        /// Hide the range text
        #[arg(long)]
        no_info: bool,

        /// Base URL for page links
        #[arg(long, default_value = "/spaces")]
        base_url: String,
    },

    /// Print one page of listings
    Listings {
        /// Only listings in this city
        #[arg(long)]
        city: Option<String>,

        /// Only listings of this category (coworking, meeting-room, private-office, virtual-office)
        #[arg(long)]
        category: Option<String>,

        /// Page to show (1-based)
        #[arg(long)]
        page: Option<usize>,

        /// Listings per page (defaults to the configured value)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
