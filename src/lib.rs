// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # deskpager
//!
//! Pagination for a coworking-space marketplace: the page math behind a
//! numbered page control, the control itself, and the listing pages that
//! use it.
//!
//! ## Features
//!
//! - **Page window**: at most seven page tokens, with ellipsis markers
//!   around the current page
//! - **Range text**: "Showing X to Y of Z" for the current page
//! - **Pagination control**: guarded page requests, scroll-to-top on
//!   navigation, light and dark themes, HTML rendering
//! - **Listing pages**: filter by city and category, served over HTTP
//!
//! ## Quick Start
//!
//! ```rust
//! use deskpager::{compute_page_window, compute_range, PageToken};
//!
//! let tokens = compute_page_window(5, 10);
//! assert_eq!(tokens[0], PageToken::Page(1));
//! assert_eq!(tokens[1], PageToken::Ellipsis);
//!
//! let range = compute_range(2, 10, 25);
//! assert_eq!(range.describe(25), "Showing 11 to 20 of 25");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 CLI / HTTP server (cli)                      │
//! │  window   range   render   listings   serve → /spaces, /api  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────────┬─────────────┴───────────┬────────────────────┐
//! │   Catalog     │   Control               │   Config           │
//! ├───────────────┼─────────────────────────┼────────────────────┤
//! │ Listings YAML │ PaginationControl       │ YAML settings      │
//! │ City/category │ NavigationHook (scroll) │ Theme, per page    │
//! │ paginate_items│ HTML rendering          │ Server address     │
//! └───────────────┴─────────────────────────┴────────────────────┘
//!                               │
//! ┌──────────────────────────────────────────────────────────────┐
//! │   Pagination: compute_page_window, compute_range, state      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Page window and range math
pub mod pagination;

/// Pagination control and its HTML rendering
pub mod control;

/// Embedded HTML templates
mod templates;

/// Listing catalogue
pub mod catalog;

/// Application configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use control::{ControlOptions, PaginationControl};
pub use pagination::{compute_page_window, compute_range, PageRange, PageToken, PaginationState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
