//! Tour Table - renders a tour price listing as an ASCII table
//!
//! The listing groups cities by country; each city row shows its
//! population and ticket price. Prices use a fixed-point [`Currency`]
//! type that refuses negative parts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file resolution and render settings
//! - `error`: Custom error types
//! - `models`: Currency type and the country/city listing
//! - `display`: Table layout and rendering
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use tour_table::config::Settings;
//! use tour_table::display::TableRenderer;
//! use tour_table::models::sample_tours;
//!
//! let tours = sample_tours()?;
//! let table = TableRenderer::from_settings(&Settings::default())?.render(&tours)?;
//! assert_eq!(table.lines().count(), 18);
//! # Ok::<(), tour_table::TourError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;

pub use error::{TourError, TourResult};
pub use models::Currency;
