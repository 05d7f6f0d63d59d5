//! HTML rendering for the pagination control
//!
//! Markup lives in `templates/pagination.html`; this module turns a
//! [`ControlView`] into the template context.

use super::component::PaginationControl;
use super::types::{ControlView, NavButton, PageItem};
use crate::error::Result;
use crate::templates::render_template;
use crate::types::Theme;
use minijinja::context;
use serde::Serialize;

/// Builds the link target for a page
pub trait PageHref {
    /// URL that navigates to `page`
    fn href(&self, page: usize) -> String;
}

impl<F: Fn(usize) -> String> PageHref for F {
    fn href(&self, page: usize) -> String {
        self(page)
    }
}

/// Links of the form `{base}?{params}&page=N`
#[derive(Debug, Clone, Default)]
pub struct QueryHref {
    base: String,
    params: Vec<(String, String)>,
}

impl QueryHref {
    /// Create links relative to `base`
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    /// Carry an extra query parameter on every link
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

impl PageHref for QueryHref {
    fn href(&self, page: usize) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .append_pair("page", &page.to_string())
            .finish();
        format!("{}?{}", self.base, query)
    }
}

/// CSS class sets per theme
#[derive(Debug, Serialize)]
struct Palette {
    nav: &'static str,
    info: &'static str,
    list: &'static str,
    link: &'static str,
    active: &'static str,
    disabled: &'static str,
    ellipsis: &'static str,
}

const LIGHT: Palette = Palette {
    nav: "pagination pagination-light flex items-center justify-between border-t border-gray-200 bg-white px-4 py-3",
    info: "text-sm text-gray-700",
    list: "inline-flex items-center gap-1",
    link: "px-3 py-2 rounded-md text-sm text-gray-700 hover:bg-gray-100",
    active: "px-3 py-2 rounded-md text-sm font-semibold bg-blue-600 text-white",
    disabled: "px-3 py-2 rounded-md text-sm text-gray-300 cursor-not-allowed",
    ellipsis: "px-3 py-2 text-sm text-gray-500",
};

const DARK: Palette = Palette {
    nav: "pagination pagination-dark flex items-center justify-between border-t border-gray-700 bg-gray-900 px-4 py-3",
    info: "text-sm text-gray-300",
    list: "inline-flex items-center gap-1",
    link: "px-3 py-2 rounded-md text-sm text-gray-200 hover:bg-gray-800",
    active: "px-3 py-2 rounded-md text-sm font-semibold bg-blue-500 text-white",
    disabled: "px-3 py-2 rounded-md text-sm text-gray-600 cursor-not-allowed",
    ellipsis: "px-3 py-2 text-sm text-gray-400",
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

/// A previous/next target
#[derive(Debug, Clone, Serialize)]
struct Link {
    page: usize,
    href: String,
}

/// One slot between the previous and next controls
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Slot {
    /// The current page; rendered without a link
    Active { page: usize },
    Link { page: usize, href: String },
    Ellipsis,
}

/// Template context for `pagination.html`
#[derive(Debug, Serialize)]
pub(crate) struct ControlContext {
    palette: &'static Palette,
    info: Option<String>,
    previous: Option<Link>,
    items: Vec<Slot>,
    next: Option<Link>,
}

impl ControlContext {
    pub(crate) fn new(view: &ControlView, hrefs: &dyn PageHref) -> Self {
        let link = |button: NavButton| match button.target {
            Some(page) if !button.disabled => Some(Link {
                page,
                href: hrefs.href(page),
            }),
            _ => None,
        };

        let items = view
            .items
            .iter()
            .map(|item| match *item {
                PageItem::Page { number, active: true } => Slot::Active { page: number },
                PageItem::Page { number, active: false } => Slot::Link {
                    page: number,
                    href: hrefs.href(number),
                },
                PageItem::Ellipsis => Slot::Ellipsis,
            })
            .collect();

        Self {
            palette: palette(view.theme),
            info: view.info.map(|info| info.text()),
            previous: link(view.previous),
            items,
            next: link(view.next),
        }
    }
}

/// Render a control, or an empty string when it has nothing to show
pub fn render(control: &PaginationControl<'_>, hrefs: &dyn PageHref) -> Result<String> {
    match control.view() {
        Some(view) => render_control(&view, hrefs),
        None => Ok(String::new()),
    }
}

/// Render a control view to markup
pub fn render_control(view: &ControlView, hrefs: &dyn PageHref) -> Result<String> {
    render_template(
        "pagination.html",
        context! { control => ControlContext::new(view, hrefs) },
    )
}
