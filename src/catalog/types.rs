//! Listing types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of space a listing offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Hot desks and dedicated desks
    Coworking,
    /// Bookable meeting rooms
    MeetingRoom,
    /// Lockable private offices
    PrivateOffice,
    /// Business address and mail handling
    VirtualOffice,
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 4] = [
        Category::Coworking,
        Category::MeetingRoom,
        Category::PrivateOffice,
        Category::VirtualOffice,
    ];

    /// URL slug
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Coworking => "coworking",
            Category::MeetingRoom => "meeting-room",
            Category::PrivateOffice => "private-office",
            Category::VirtualOffice => "virtual-office",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Category::Coworking => "Coworking Spaces",
            Category::MeetingRoom => "Meeting Rooms",
            Category::PrivateOffice => "Private Offices",
            Category::VirtualOffice => "Virtual Offices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let slug = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == slug)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

/// A rentable space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// City the space is in
    pub city: String,
    /// Kind of space
    pub category: Category,
    /// Street address
    #[serde(default)]
    pub address: String,
    /// Monthly price in whole currency units
    pub price_per_month: u32,
    /// Number of seats
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

fn default_capacity() -> u32 {
    1
}

/// Filter bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Only listings in this city (case-insensitive)
    pub city: Option<String>,
    /// Only listings of this category
    pub category: Option<Category>,
}

impl ListingFilter {
    /// Filter matching everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a city; blank values clear the restriction
    #[must_use]
    pub fn with_city(mut self, city: Option<&str>) -> Self {
        self.city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);
        self
    }

    /// Restrict to a category
    #[must_use]
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Check a listing against the filter
    pub fn matches(&self, listing: &Listing) -> bool {
        let city_ok = self
            .city
            .as_ref()
            .map_or(true, |city| listing.city.to_lowercase() == city.to_lowercase());
        let category_ok = self.category.map_or(true, |c| listing.category == c);
        city_ok && category_ok
    }
}
