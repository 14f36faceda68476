//! Display formatting for terminal output
//!
//! Provides the ASCII table layout used to print tour listings.

pub mod table;

pub use table::{center_padding, column_widths, TableRenderer, HEADERS};
