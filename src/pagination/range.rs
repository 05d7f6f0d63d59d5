//! Result-range calculation ("showing X to Y of Z")

use super::types::PageRange;

/// Compute the 1-based inclusive item range for a page
///
/// `end` is clamped to `total_items`, so the last page may be short. With
/// `total_items = 0` the result is the degenerate `1..0`; use
/// [`range_info`] when the range is meant for display.
pub fn compute_range(current_page: usize, items_per_page: usize, total_items: usize) -> PageRange {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .saturating_add(1);
    let end = current_page
        .max(1)
        .saturating_mul(items_per_page)
        .min(total_items);
    PageRange::new(start, end)
}

/// Range to display, or `None` when it should be omitted
///
/// Omitted when either count is unknown, or when the range is empty
/// (for example no items at all).
pub fn range_info(
    current_page: usize,
    items_per_page: Option<usize>,
    total_items: Option<usize>,
) -> Option<PageRange> {
    let (items_per_page, total_items) = (items_per_page?, total_items?);
    if items_per_page == 0 || total_items == 0 {
        return None;
    }
    let range = compute_range(current_page, items_per_page, total_items);
    (!range.is_empty()).then_some(range)
}
