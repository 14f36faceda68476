//! Core data models for the tour table
//!
//! This module contains the data structures the table is rendered from:
//! the currency amount type and the country/city listing.

pub mod currency;
pub mod sample;
pub mod tour;

pub use currency::{Currency, Locale, DEFAULT_SYMBOL, SUB_UNIT_RANGE};
pub use sample::sample_tours;
pub use tour::{City, Country, Tours};
