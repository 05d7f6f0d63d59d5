//! Page-window calculation
//!
//! Keeps the page buttons compact regardless of how many pages exist.

use super::types::PageToken;

/// Maximum number of slots shown in a window
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Pages within this distance of either end use the edge layouts
pub const EDGE_THRESHOLD: usize = 3;

/// Compute the ordered tokens to render as page buttons
///
/// With up to [`MAX_VISIBLE_PAGES`] pages every page is listed. Beyond that
/// the window always starts at page 1 and ends at `total_pages`, showing
/// either the first four pages, the last four pages, or the current page
/// with one neighbour on each side, separated by ellipsis markers.
///
/// # Example
///
/// ```
/// use deskpager::pagination::{compute_page_window, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(
///     compute_page_window(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn compute_page_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let mut tokens = Vec::with_capacity(MAX_VISIBLE_PAGES);
    tokens.push(PageToken::Page(1));

    if current_page <= EDGE_THRESHOLD {
        tokens.extend((2..=4).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        tokens.push(PageToken::Ellipsis);
        tokens.extend((total_pages - 3..=total_pages).map(PageToken::Page));
    } else {
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current_page - 1..=current_page + 1).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}
