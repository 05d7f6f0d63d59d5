//! CLI module
//!
//! Command-line interface for the page math, the rendered control and the
//! listing pages.
//!
//! # Commands
//!
//! - `window` - Print the page tokens for a page position
//! - `range` - Print the "Showing X to Y of Z" bounds
//! - `render` - Render the pagination control as HTML
//! - `listings` - Print one page of listings
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, AppState};
