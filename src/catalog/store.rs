//! Listing catalogue loading, filtering and page slicing

use super::types::{Listing, ListingFilter};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{page_bounds, PaginationState};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Listings compiled into the binary
pub const BUILTIN_LISTINGS: &str = include_str!("../../data/listings.yaml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    listings: Vec<Listing>,
}

/// In-memory, read-only listing catalogue
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Create a catalogue from listings
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Parse a catalogue from YAML (`listings: [...]`)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.listings))
    }

    /// The catalogue compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_LISTINGS).context("Invalid built-in listings")
    }

    /// Load a catalogue from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load listings from {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            listings = catalog.len(),
            "loaded listing catalogue"
        );
        Ok(catalog)
    }

    /// Number of listings
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalogue has no listings
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in catalogue order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Listings matching a filter, in catalogue order
    pub fn search(&self, filter: &ListingFilter) -> Vec<&Listing> {
        self.listings.iter().filter(|l| filter.matches(l)).collect()
    }

    /// Distinct cities, sorted
    pub fn cities(&self) -> Vec<&str> {
        self.listings
            .iter()
            .map(|l| l.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Return the items for the requested page along with the pagination state
///
/// `per_page` is floored at 1; a missing or zero page means the first page;
/// pages past the end are clamped to the last page.
pub fn paginate_items<T>(
    items: Vec<T>,
    requested_page: Option<usize>,
    per_page: usize,
) -> (Vec<T>, PaginationState) {
    let state = PaginationState::for_items(requested_page.unwrap_or(1), items.len(), per_page);
    let per_page = per_page.max(1);
    let (start, end) = page_bounds(items.len(), per_page, state.current_page);

    let page_items = items
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();

    (page_items, state)
}
