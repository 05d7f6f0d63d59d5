//! Control configuration, render model and navigation hook types

use crate::pagination::{PageRange, PaginationState};
use crate::types::Theme;
use serde::{Deserialize, Serialize};

/// Options recognised by the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Current page, 1-based
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Total item count, used for the range text
    #[serde(default)]
    pub total_items: Option<usize>,
    /// Items per page, used for the range text
    #[serde(default)]
    pub items_per_page: Option<usize>,
    /// Show the "Showing X to Y of Z" text
    #[serde(default = "default_show_info")]
    pub show_info: bool,
    /// Visual theme
    #[serde(default)]
    pub theme: Theme,
}

fn default_show_info() -> bool {
    true
}

impl ControlOptions {
    /// Create options for a page position with default display settings
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items: None,
            items_per_page: None,
            show_info: true,
            theme: Theme::Light,
        }
    }

    /// Create options from a pagination state
    pub fn from_state(state: &PaginationState) -> Self {
        Self {
            total_items: state.total_items,
            items_per_page: state.items_per_page,
            ..Self::new(state.current_page, state.total_pages)
        }
    }

    /// Set item counts for the range text
    #[must_use]
    pub fn with_items(mut self, total_items: usize, items_per_page: usize) -> Self {
        self.total_items = Some(total_items);
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Show or hide the range text
    #[must_use]
    pub fn with_show_info(mut self, show_info: bool) -> Self {
        self.show_info = show_info;
        self
    }

    /// Set the theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The caller-owned state these options describe
    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items_per_page: self.items_per_page,
        }
    }
}

/// How the host should scroll after navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll
    #[default]
    Smooth,
    /// Jump immediately
    Instant,
}

/// Scroll side effect requested after a page change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    /// Vertical offset to scroll to
    pub top: u32,
    /// Scroll animation
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Smooth scroll to the vertical origin
    pub fn top() -> Self {
        Self {
            top: 0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Receives the navigation side effect of an accepted page change
pub trait NavigationHook {
    /// Called once per accepted page change, after the page-change callback
    fn on_navigate(&mut self, request: ScrollRequest);
}

impl<F: FnMut(ScrollRequest)> NavigationHook for F {
    fn on_navigate(&mut self, request: ScrollRequest) {
        self(request);
    }
}

/// Default hook: records the scroll request in the trace log
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceNavigation;

impl NavigationHook for TraceNavigation {
    fn on_navigate(&mut self, request: ScrollRequest) {
        tracing::trace!(top = request.top, behavior = ?request.behavior, "scroll requested");
    }
}

/// Previous/next button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    /// Page the button navigates to, `None` when disabled
    pub target: Option<usize>,
    /// Disabled buttons are rendered muted and ignore clicks
    pub disabled: bool,
}

impl NavButton {
    fn towards(target: Option<usize>) -> Self {
        Self {
            target,
            disabled: target.is_none(),
        }
    }

    pub(crate) fn previous(state: &PaginationState) -> Self {
        Self::towards(state.previous_page())
    }

    pub(crate) fn next(state: &PaginationState) -> Self {
        Self::towards(state.next_page())
    }
}

/// One rendered slot between the previous and next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// Clickable page; clicking the active one does nothing
    Page {
        /// Page number
        number: usize,
        /// Whether this is the current page
        active: bool,
    },
    /// Static, non-clickable marker
    Ellipsis,
}

/// Range text shown next to the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeInfo {
    /// First item shown
    pub start: usize,
    /// Last item shown
    pub end: usize,
    /// Total item count
    pub total_items: usize,
}

impl RangeInfo {
    pub(crate) fn new(range: PageRange, total_items: usize) -> Self {
        Self {
            start: range.start,
            end: range.end,
            total_items,
        }
    }

    /// "Showing X to Y of Z"
    pub fn text(&self) -> String {
        PageRange::new(self.start, self.end).describe(self.total_items)
    }
}

/// Everything needed to draw the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    /// Visual theme
    pub theme: Theme,
    /// Current page
    pub current_page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Previous button
    pub previous: NavButton,
    /// Page buttons and ellipses
    pub items: Vec<PageItem>,
    /// Next button
    pub next: NavButton,
    /// Range text, when enabled and meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<RangeInfo>,
}
