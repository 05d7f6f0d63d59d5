//! Pagination module
//!
//! Pure page math used by the pagination control.
//!
//! # Overview
//!
//! - [`compute_page_window`] maps `(current_page, total_pages)` to at most
//!   seven page tokens, mixing page numbers and ellipsis markers.
//! - [`compute_range`] maps `(current_page, items_per_page, total_items)` to
//!   the 1-based "showing X to Y" bounds.
//! - [`PaginationState`] bundles the caller-owned values and exposes both.

mod range;
mod types;
mod window;

pub use range::{compute_range, range_info};
pub use types::{
    clamp_page, page_bounds, parse_page_param, total_pages, PageRange, PageToken,
    PaginationState,
};
pub use window::{compute_page_window, EDGE_THRESHOLD, MAX_VISIBLE_PAGES};
