//! Listing catalogue
//!
//! Static coworking, meeting-room, private-office and virtual-office
//! listings, filterable by city and category. This is the data the
//! marketplace pages paginate over.

mod store;
mod types;

pub use store::{paginate_items, Catalog, BUILTIN_LISTINGS};
pub use types::{Category, Listing, ListingFilter};
