//! Tests for the pagination control

use super::*;
use crate::types::Theme;
use pretty_assertions::assert_eq;
use std::cell::RefCell;

fn control_with_log<'a>(
    options: ControlOptions,
    changes: &'a RefCell<Vec<usize>>,
    scrolls: &'a RefCell<Vec<ScrollRequest>>,
) -> PaginationControl<'a> {
    PaginationControl::new(options, move |page| changes.borrow_mut().push(page))
        .with_navigation(move |request| scrolls.borrow_mut().push(request))
}

fn href(page: usize) -> String {
    format!("?page={page}")
}

// ============================================================================
// View Tests
// ============================================================================

#[test]
fn test_single_page_renders_nothing() {
    for current in 0..3 {
        let control = PaginationControl::display(ControlOptions::new(current, 1));
        assert!(!control.is_visible());
        assert!(control.view().is_none());
    }

    let control = PaginationControl::display(ControlOptions::new(1, 0));
    assert!(control.view().is_none());
}

#[test]
fn test_view_marks_active_page_and_ellipses() {
    let control = PaginationControl::display(ControlOptions::new(5, 10));
    let view = control.view().unwrap();

    assert_eq!(
        view.items,
        vec![
            PageItem::Page {
                number: 1,
                active: false
            },
            PageItem::Ellipsis,
            PageItem::Page {
                number: 4,
                active: false
            },
            PageItem::Page {
                number: 5,
                active: true
            },
            PageItem::Page {
                number: 6,
                active: false
            },
            PageItem::Ellipsis,
            PageItem::Page {
                number: 10,
                active: false
            },
        ]
    );
    assert_eq!(view.previous.target, Some(4));
    assert_eq!(view.next.target, Some(6));
}

#[test]
fn test_view_disables_previous_on_first_page() {
    let view = PaginationControl::display(ControlOptions::new(1, 4))
        .view()
        .unwrap();
    assert!(view.previous.disabled);
    assert_eq!(view.previous.target, None);
    assert!(!view.next.disabled);
}

#[test]
fn test_view_disables_next_on_last_page() {
    let view = PaginationControl::display(ControlOptions::new(4, 4))
        .view()
        .unwrap();
    assert!(!view.previous.disabled);
    assert!(view.next.disabled);
    assert_eq!(view.next.target, None);
}

#[test]
fn test_view_info_requires_items_and_show_info() {
    let options = ControlOptions::new(3, 3).with_items(25, 10);
    let view = PaginationControl::display(options).view().unwrap();
    let info = view.info.unwrap();
    assert_eq!((info.start, info.end, info.total_items), (21, 25, 25));
    assert_eq!(info.text(), "Showing 21 to 25 of 25");

    let hidden = PaginationControl::display(options.with_show_info(false))
        .view()
        .unwrap();
    assert!(hidden.info.is_none());

    let unknown = PaginationControl::display(ControlOptions::new(3, 3))
        .view()
        .unwrap();
    assert!(unknown.info.is_none());
}

#[test]
fn test_view_suppresses_zero_item_range() {
    let options = ControlOptions::new(1, 2).with_items(0, 10);
    let view = PaginationControl::display(options).view().unwrap();
    assert!(view.info.is_none());
}

#[test]
fn test_view_serializes_items_with_kind_tag() {
    let view = PaginationControl::display(ControlOptions::new(1, 2))
        .view()
        .unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["items"][0], serde_json::json!({"kind": "page", "number": 1, "active": true}));
    assert_eq!(json["theme"], "light");
    assert!(json.get("info").is_none());
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test]
fn test_request_page_fires_callback_and_scroll() {
    let changes = RefCell::new(Vec::new());
    let scrolls = RefCell::new(Vec::new());
    let mut control = control_with_log(ControlOptions::new(2, 5), &changes, &scrolls);

    assert!(control.request_page(4));

    assert_eq!(*changes.borrow(), vec![4]);
    assert_eq!(*scrolls.borrow(), vec![ScrollRequest::top()]);
    assert_eq!(ScrollRequest::top().top, 0);
    assert_eq!(ScrollRequest::top().behavior, ScrollBehavior::Smooth);
}

#[test]
fn test_request_page_rejects_out_of_range_and_current() {
    let changes = RefCell::new(Vec::new());
    let scrolls = RefCell::new(Vec::new());
    let mut control = control_with_log(ControlOptions::new(3, 5), &changes, &scrolls);

    assert!(!control.request_page(3));
    assert!(!control.request_page(0));
    assert!(!control.request_page(6));

    assert!(changes.borrow().is_empty());
    assert!(scrolls.borrow().is_empty());
}

#[test]
fn test_disabled_buttons_are_no_ops() {
    let changes = RefCell::new(Vec::new());
    let scrolls = RefCell::new(Vec::new());

    let mut first = control_with_log(ControlOptions::new(1, 3), &changes, &scrolls);
    assert!(!first.previous());
    drop(first);

    let mut last = control_with_log(ControlOptions::new(3, 3), &changes, &scrolls);
    assert!(!last.next());
    drop(last);

    assert!(changes.borrow().is_empty());
    assert!(scrolls.borrow().is_empty());
}

#[test]
fn test_previous_and_next_request_neighbours() {
    let changes = RefCell::new(Vec::new());
    let scrolls = RefCell::new(Vec::new());
    let mut control = control_with_log(ControlOptions::new(2, 3), &changes, &scrolls);

    assert!(control.previous());
    assert!(control.next());

    // The control does not move itself; the owner re-renders with new options.
    assert_eq!(*changes.borrow(), vec![1, 3]);
    assert_eq!(scrolls.borrow().len(), 2);
    assert_eq!(control.options().current_page, 2);
}

#[test]
fn test_clicking_active_page_or_ellipsis_does_nothing() {
    let changes = RefCell::new(Vec::new());
    let scrolls = RefCell::new(Vec::new());
    let mut control = control_with_log(ControlOptions::new(5, 10), &changes, &scrolls);

    let view = control.view().unwrap();
    for item in &view.items {
        if matches!(item, PageItem::Ellipsis | PageItem::Page { active: true, .. }) {
            assert!(!control.click(*item));
        }
    }
    assert!(changes.borrow().is_empty());

    assert!(control.click(PageItem::Page {
        number: 10,
        active: false
    }));
    assert_eq!(*changes.borrow(), vec![10]);
}

// ============================================================================
// HTML Tests
// ============================================================================

#[test]
fn test_render_empty_for_single_page() {
    let control = PaginationControl::display(ControlOptions::new(1, 1));
    assert_eq!(render(&control, &href).unwrap(), "");
}

#[test]
fn test_render_active_page_is_not_a_link() {
    let control = PaginationControl::display(ControlOptions::new(2, 3));
    let html = render(&control, &href).unwrap();

    assert!(html.starts_with("<nav"));
    assert!(html.contains(r#"aria-label="Pagination""#));
    assert!(html.contains(r#"aria-current="page" data-page="2">2</span>"#));
    assert_eq!(html.matches("aria-current").count(), 1);
    assert!(!html.contains(r#"href="?page=2" data-page="2""#));
    assert!(html.contains(r#"href="?page=1" data-page="1" data-scroll="top""#));
    assert!(html.contains(r#"href="?page=3" data-page="3" data-scroll="top""#));
    assert!(html.contains(r#"rel="prev""#));
    assert!(html.contains(r#"rel="next""#));
}

#[test]
fn test_render_ellipsis_is_not_a_link() {
    let control = PaginationControl::display(ControlOptions::new(5, 10));
    let html = render(&control, &href).unwrap();

    assert_eq!(html.matches("&hellip;").count(), 2);
    assert!(!html.contains("page=0"));
    assert!(!html.contains("page=3\""));
    assert!(html.contains("page=10"));
}

#[test]
fn test_render_disabled_previous_is_span() {
    let control = PaginationControl::display(ControlOptions::new(1, 3));
    let html = render(&control, &href).unwrap();

    assert!(html.contains(r#"aria-disabled="true">Previous</span>"#));
    assert!(!html.contains(r#"rel="prev""#));
}

#[test]
fn test_render_info_text() {
    let options = ControlOptions::new(3, 3).with_items(25, 10);
    let html = render(&PaginationControl::display(options), &href).unwrap();
    assert!(html.contains("Showing 21 to 25 of 25"));
    assert!(html.contains(r#"aria-disabled="true">Next</span>"#));

    let html = render(
        &PaginationControl::display(options.with_show_info(false)),
        &href,
    )
    .unwrap();
    assert!(!html.contains("Showing"));
}

#[test]
fn test_render_theme_classes() {
    let light = render(
        &PaginationControl::display(ControlOptions::new(1, 3)),
        &href,
    )
    .unwrap();
    let dark = render(
        &PaginationControl::display(ControlOptions::new(1, 3).with_theme(Theme::Dark)),
        &href,
    )
    .unwrap();

    assert!(light.contains("pagination-light"));
    assert!(!light.contains("bg-gray-900"));
    assert!(dark.contains("pagination-dark"));
    assert!(dark.contains("bg-gray-900"));
}

#[test]
fn test_render_escapes_hrefs() {
    let hostile = |page: usize| format!("?q=\"><script>&page={page}");
    let html = render(
        &PaginationControl::display(ControlOptions::new(1, 2)),
        &hostile,
    )
    .unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;&amp;page=2"));
}

#[test]
fn test_query_href_keeps_filters() {
    let hrefs = QueryHref::new("/spaces/coworking").with_param("city", "São Paulo & Co");
    assert_eq!(
        hrefs.href(3),
        "/spaces/coworking?city=S%C3%A3o+Paulo+%26+Co&page=3"
    );

    let html = render(
        &PaginationControl::display(ControlOptions::new(1, 2)),
        &hrefs,
    )
    .unwrap();
    assert!(html.contains("city=S%C3%A3o+Paulo+%26+Co&amp;page=2"));
}
