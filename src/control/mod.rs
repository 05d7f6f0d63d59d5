//! Pagination control module
//!
//! The presentational layer on top of [`crate::pagination`].
//!
//! # Overview
//!
//! - `PaginationControl` - guards page requests and builds a `ControlView`
//! - `NavigationHook` - receives the scroll-to-top side effect
//! - `html` - renders a `ControlView` as markup

mod component;
pub mod html;
mod types;

pub use component::PaginationControl;
pub use html::{render, render_control, PageHref, QueryHref};
pub use types::{
    ControlOptions, ControlView, NavButton, NavigationHook, PageItem, RangeInfo, ScrollBehavior,
    ScrollRequest, TraceNavigation,
};

#[cfg(test)]
mod tests;
