//! Tour listing model
//!
//! Countries grouping the cities a tour visits, with the price of each stop.

use super::currency::Currency;

/// A city on the tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// City name (e.g., "Bogota")
    pub name: String,

    /// Number of inhabitants
    pub population: u64,

    /// Ticket price for this city
    pub cost: Currency,
}

impl City {
    /// Create a new city
    pub fn new(name: impl Into<String>, population: u64, cost: Currency) -> Self {
        Self {
            name: name.into(),
            population,
            cost,
        }
    }
}

/// A country and the cities visited in it, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub cities: Vec<City>,
}

impl Country {
    /// Create a new country
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            name: name.into(),
            cities,
        }
    }

    /// Check if the country has no cities
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// The full listing shown in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tours {
    /// Title printed above the table
    pub title: String,

    /// Countries in display order
    pub countries: Vec<Country>,
}

impl Tours {
    /// Create a new tour listing
    pub fn new(title: impl Into<String>, countries: Vec<Country>) -> Self {
        Self {
            title: title.into(),
            countries,
        }
    }

    /// Total number of cities across all countries
    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }
}
