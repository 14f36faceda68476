//! Configuration module for the tour table
//!
//! This module provides configuration management including:
//! - XDG-compliant settings file resolution
//! - Render settings with serde defaults

pub mod paths;
pub mod settings;

pub use paths::TourPaths;
pub use settings::Settings;
