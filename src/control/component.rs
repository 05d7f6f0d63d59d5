//! Stateless pagination control
//!
//! Composes the page window and range calculations with boundary guards.
//! The control never changes the current page itself: it reports accepted
//! requests to the page-change callback and lets the owner re-render.

use super::types::{
    ControlOptions, ControlView, NavButton, NavigationHook, PageItem, RangeInfo, ScrollRequest,
    TraceNavigation,
};
use crate::pagination::{PageToken, PaginationState};

/// Pagination control bound to a page-change callback
pub struct PaginationControl<'a> {
    options: ControlOptions,
    on_page_change: Box<dyn FnMut(usize) + 'a>,
    navigation: Box<dyn NavigationHook + 'a>,
}

impl std::fmt::Debug for PaginationControl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationControl")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> PaginationControl<'a> {
    /// Create a control that reports page changes to `on_page_change`
    pub fn new(options: ControlOptions, on_page_change: impl FnMut(usize) + 'a) -> Self {
        Self {
            options,
            on_page_change: Box::new(on_page_change),
            navigation: Box::new(TraceNavigation),
        }
    }

    /// Create a display-only control that ignores page changes
    pub fn display(options: ControlOptions) -> Self {
        Self::new(options, |_| {})
    }

    /// Replace the hook that performs the scroll-to-top side effect
    #[must_use]
    pub fn with_navigation(mut self, hook: impl NavigationHook + 'a) -> Self {
        self.navigation = Box::new(hook);
        self
    }

    /// Options this control was built from
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    fn state(&self) -> PaginationState {
        self.options.state()
    }

    /// Whether the control draws anything at all
    pub fn is_visible(&self) -> bool {
        self.options.total_pages > 1
    }

    /// Build the render model, or `None` when there is a single page or none
    pub fn view(&self) -> Option<ControlView> {
        if !self.is_visible() {
            return None;
        }

        let state = self.state();
        let current = state.current_page;
        let items = state
            .window()
            .into_iter()
            .map(|token| match token {
                PageToken::Page(number) => PageItem::Page {
                    number,
                    active: number == current,
                },
                PageToken::Ellipsis => PageItem::Ellipsis,
            })
            .collect();

        let info = if self.options.show_info {
            state
                .range()
                .zip(state.total_items)
                .map(|(range, total)| RangeInfo::new(range, total))
        } else {
            None
        };

        Some(ControlView {
            theme: self.options.theme,
            current_page: current,
            total_pages: state.total_pages,
            previous: NavButton::previous(&state),
            items,
            next: NavButton::next(&state),
            info,
        })
    }

    /// Request navigation to `page`
    ///
    /// Fires only for `1 <= page <= total_pages` and `page != current_page`.
    /// Returns whether the callback and the navigation hook were invoked.
    pub fn request_page(&mut self, page: usize) -> bool {
        if !self.state().accepts(page) {
            tracing::debug!(
                page,
                current_page = self.options.current_page,
                total_pages = self.options.total_pages,
                "ignoring page request"
            );
            return false;
        }

        (self.on_page_change)(page);
        self.navigation.on_navigate(ScrollRequest::top());
        true
    }

    /// Click on the previous button
    pub fn previous(&mut self) -> bool {
        match self.state().previous_page() {
            Some(page) => self.request_page(page),
            None => false,
        }
    }

    /// Click on the next button
    pub fn next(&mut self) -> bool {
        match self.state().next_page() {
            Some(page) => self.request_page(page),
            None => false,
        }
    }

    /// Click on a rendered page item; ellipses are inert
    pub fn click(&mut self, item: PageItem) -> bool {
        match item {
            PageItem::Page { number, .. } => self.request_page(number),
            PageItem::Ellipsis => false,
        }
    }
}
