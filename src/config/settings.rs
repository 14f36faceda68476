//! Render settings for the tour table
//!
//! Holds the number locale, currency symbol and table geometry. Settings
//! come from defaults, an optional JSON file and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::TourPaths;
use crate::error::TourError;
use crate::models::{Locale, DEFAULT_SYMBOL};

/// Number of table columns (country, city, population, cost)
pub const COLUMN_COUNT: usize = 4;

/// Largest accepted margin on each side of a column
pub const MAX_MARGIN: usize = 64;

/// Largest accepted base column width
pub const MAX_COLUMN_WIDTH: usize = 512;

/// Largest accepted title width
pub const MAX_TITLE_WIDTH: usize = 2048;

/// Render settings for the tour table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Number formatting used for the cost column
    #[serde(default)]
    pub locale: Locale,

    /// Prefix printed before every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Spaces added on each side of a base column width
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Base widths for country, city, population and cost
    #[serde(default = "default_base_widths")]
    pub base_widths: [usize; COLUMN_COUNT],

    /// Width the title is centered over
    #[serde(default = "default_title_width")]
    pub title_width: usize,
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_margin() -> usize {
    1
}

fn default_base_widths() -> [usize; COLUMN_COUNT] {
    [11, 14, 13, 16]
}

fn default_title_width() -> usize {
    62
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency_symbol: default_currency(),
            margin: default_margin(),
            base_widths: default_base_widths(),
            title_width: default_title_width(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or use defaults if the
    /// settings file doesn't exist
    pub fn load_or_default(paths: &TourPaths) -> Result<Self, TourError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, TourError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TourError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TourError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Check that the table geometry stays within the supported limits
    pub fn validate(&self) -> Result<(), TourError> {
        if self.margin > MAX_MARGIN {
            return Err(TourError::Config(format!(
                "margin {} exceeds the maximum of {}",
                self.margin, MAX_MARGIN
            )));
        }

        if let Some(width) = self.base_widths.iter().find(|&&w| w > MAX_COLUMN_WIDTH) {
            return Err(TourError::Config(format!(
                "column width {} exceeds the maximum of {}",
                width, MAX_COLUMN_WIDTH
            )));
        }

        if self.title_width > MAX_TITLE_WIDTH {
            return Err(TourError::Config(format!(
                "title width {} exceeds the maximum of {}",
                self.title_width, MAX_TITLE_WIDTH
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::Posix);
        assert_eq!(settings.currency_symbol, "Rp.");
        assert_eq!(settings.margin, 1);
        assert_eq!(settings.base_widths, [11, 14, 13, 16]);
        assert_eq!(settings.title_width, 62);
    }

    #[test]
    fn test_validate_limits() {
        assert!(Settings::default().validate().is_ok());

        let at_limits = Settings {
            margin: MAX_MARGIN,
            base_widths: [MAX_COLUMN_WIDTH; COLUMN_COUNT],
            title_width: MAX_TITLE_WIDTH,
            ..Settings::default()
        };
        assert!(at_limits.validate().is_ok());

        let wide_margin = Settings {
            margin: MAX_MARGIN + 1,
            ..Settings::default()
        };
        assert!(matches!(wide_margin.validate(), Err(TourError::Config(_))));

        let wide_column = Settings {
            base_widths: [11, usize::MAX, 13, 16],
            ..Settings::default()
        };
        assert!(matches!(wide_column.validate(), Err(TourError::Config(_))));

        let wide_title = Settings {
            title_width: MAX_TITLE_WIDTH + 1,
            ..Settings::default()
        };
        assert!(matches!(wide_title.validate(), Err(TourError::Config(_))));
    }

    #[test]
    fn test_out_of_range_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("huge.json");
        std::fs::write(&path, r#"{ "margin": 9223372036854775808 }"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, TourError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "locale": "en-us", "margin": 2 }"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.locale, Locale::EnUs);
        assert_eq!(settings.margin, 2);
        assert_eq!(settings.currency_symbol, "Rp.");
        assert_eq!(settings.title_width, 62);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, TourError::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Settings::load_from(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TourError::Io(_)));
    }
}
