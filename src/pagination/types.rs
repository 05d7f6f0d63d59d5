//! Pagination types and page math
//!
//! Defines page tokens, page ranges and the caller-owned pagination state.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

use super::range::range_info;
use super::window::compute_page_window;

/// One slot of a rendered page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A clickable page number (1-based)
    Page(usize),
    /// A non-interactive marker for an elided run of pages
    Ellipsis,
}

impl PageToken {
    /// Page number, if this token is clickable
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// Check if this is an ellipsis marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

// Pages serialize as bare numbers, the marker as the string "ellipsis".
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page as u64),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// 1-based inclusive range of items shown on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    /// First item shown
    pub start: usize,
    /// Last item shown
    pub end: usize,
}

impl PageRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A range is empty when it would read "1 to 0"
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Human-readable "Showing X to Y of Z" text
    pub fn describe(&self, total_items: usize) -> String {
        format!(
            "Showing {} to {} of {}",
            self.start, self.end, total_items
        )
    }
}

/// Caller-owned pagination state
///
/// The control never mutates this; it only reads a snapshot of it on
/// every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Current page, 1-based
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Total number of items across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    /// Number of items on a full page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<usize>,
}

impl PaginationState {
    /// Create state from a page position alone
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items: None,
            items_per_page: None,
        }
    }

    /// Create state for a list of `total_items`, clamping the page into range
    pub fn for_items(requested_page: usize, total_items: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_pages(total_items, items_per_page);
        Self {
            current_page: clamp_page(requested_page, total_pages),
            total_pages,
            total_items: Some(total_items),
            items_per_page: Some(items_per_page),
        }
    }

    /// Whether a previous page exists
    pub fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.current_page > 1
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.current_page < self.total_pages
    }

    /// Previous page number, if any
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous().then(|| self.current_page - 1)
    }

    /// Next page number, if any
    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Whether `page` is a valid navigation target from this state
    pub fn accepts(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page) && page != self.current_page
    }

    /// Page tokens to display for this state
    pub fn window(&self) -> Vec<PageToken> {
        compute_page_window(self.current_page, self.total_pages)
    }

    /// Displayable item range, if both item counts are known and non-degenerate
    pub fn range(&self) -> Option<PageRange> {
        range_info(self.current_page, self.items_per_page, self.total_items)
    }
}

/// Compute the number of pages for a list
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return 0-based `start..end` slice indices for a page
pub fn page_bounds(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page query value
///
/// Missing or blank values and `0` mean the first page. Anything that is
/// not a non-negative integer is rejected.
pub fn parse_page_param(raw: Option<&str>) -> Result<usize> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value
            .parse::<usize>()
            .map(|page| page.max(1))
            .map_err(|_| Error::invalid_page(value)),
    }
}
