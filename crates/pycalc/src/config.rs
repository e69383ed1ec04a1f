//! Window configuration
//!
//! All sizes are in terminal cells.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ERROR_MARKER;
use crate::keypad::{GRID_COLUMNS, GRID_ROWS};

/// Border plus margin on each side of the window
pub const WINDOW_CHROME: u16 = 2;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A size that must be positive is zero
    #[error("Configuration error: {field} must be greater than zero")]
    ZeroSize {
        /// Name of the offending field
        field: &'static str,
    },

    /// The error marker would be indistinguishable from an empty display
    #[error("Configuration error: error marker must not be blank")]
    BlankMarker,

    /// The window cannot hold the display and the keypad
    #[error("Configuration error: window {actual} is smaller than the required {required}")]
    WindowTooSmall {
        /// Minimum size for the configured display and buttons
        required: Size,
        /// Configured size
        actual: Size,
    },
}

/// Width and height in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl Size {
    /// Creates a new size
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns true if `other` fits inside this size
    #[must_use]
    pub const fn contains(self, other: Size) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Calculator window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Window title
    pub title: String,
    /// Outer window size, including border and margin
    pub window_size: Size,
    /// Rows taken by the display, including its border
    pub display_height: u16,
    /// Size of a single keypad button
    pub button_size: Size,
    /// Text shown when an evaluation fails
    pub error_marker: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        let mut config = Self {
            title: "PyCalc".to_string(),
            window_size: Size::new(0, 0),
            display_height: 3,
            button_size: Size::new(7, 3),
            error_marker: ERROR_MARKER.to_string(),
        };
        config.window_size = config.min_window_size();
        config
    }
}

impl CalcConfig {
    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the outer window size
    #[must_use]
    pub const fn with_window_size(mut self, size: Size) -> Self {
        self.window_size = size;
        self
    }

    /// Set the display height
    #[must_use]
    pub const fn with_display_height(mut self, height: u16) -> Self {
        self.display_height = height;
        self
    }

    /// Set the button size
    #[must_use]
    pub const fn with_button_size(mut self, size: Size) -> Self {
        self.button_size = size;
        self
    }

    /// Set the error marker text
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Grow or shrink the window to exactly fit the display and keypad
    #[must_use]
    pub fn fit_window(mut self) -> Self {
        self.window_size = self.min_window_size();
        self
    }

    /// Smallest window that holds the display above the button grid
    #[must_use]
    pub fn min_window_size(&self) -> Size {
        let chrome = WINDOW_CHROME * 2;
        Size::new(
            self.button_size
                .width
                .saturating_mul(GRID_COLUMNS as u16)
                .saturating_add(chrome),
            self.button_size
                .height
                .saturating_mul(GRID_ROWS as u16)
                .saturating_add(self.display_height)
                .saturating_add(chrome),
        )
    }

    /// Checks that the configuration can be rendered
    pub fn validate(&self) -> ConfigResult<()> {
        if self.display_height == 0 {
            return Err(ConfigError::ZeroSize {
                field: "display_height",
            });
        }
        if self.button_size.width == 0 || self.button_size.height == 0 {
            return Err(ConfigError::ZeroSize {
                field: "button_size",
            });
        }
        if self.error_marker.trim().is_empty() {
            return Err(ConfigError::BlankMarker);
        }

        let required = self.min_window_size();
        if !self.window_size.contains(required) {
            return Err(ConfigError::WindowTooSmall {
                required,
                actual: self.window_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Default tests =====

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.title, "PyCalc");
        assert_eq!(config.error_marker, "MATH ERROR");
        assert_eq!(config.display_height, 3);
        assert_eq!(config.button_size, Size::new(7, 3));
        assert_eq!(config.window_size, Size::new(39, 19));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(CalcConfig::new().validate(), Ok(()));
    }

    // ===== Builder tests =====

    #[test]
    fn test_builder_methods() {
        let config = CalcConfig::new()
            .with_title("Calc")
            .with_display_height(5)
            .with_button_size(Size::new(9, 3))
            .with_error_marker("ERR")
            .with_window_size(Size::new(80, 30));

        assert_eq!(config.title, "Calc");
        assert_eq!(config.display_height, 5);
        assert_eq!(config.button_size, Size::new(9, 3));
        assert_eq!(config.error_marker, "ERR");
        assert_eq!(config.window_size, Size::new(80, 30));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_fit_window() {
        let config = CalcConfig::new()
            .with_button_size(Size::new(5, 1))
            .with_display_height(3)
            .fit_window();
        assert_eq!(config.window_size, Size::new(29, 11));
    }

    // ===== Validation tests =====

    #[test]
    fn test_validate_zero_display_height() {
        let config = CalcConfig::new().with_display_height(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSize {
                field: "display_height"
            })
        );
    }

    #[test]
    fn test_validate_zero_button() {
        let config = CalcConfig::new().with_button_size(Size::new(0, 3));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSize { field: "button_size" })
        ));
    }

    #[test]
    fn test_validate_blank_marker() {
        let config = CalcConfig::new().with_error_marker("  ");
        assert_eq!(config.validate(), Err(ConfigError::BlankMarker));
    }

    #[test]
    fn test_validate_window_too_small() {
        let config = CalcConfig::new().with_window_size(Size::new(20, 10));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::WindowTooSmall { .. }));
        assert!(err.to_string().contains("20x10"));
        assert!(err.to_string().contains("39x19"));
    }

    #[test]
    fn test_size_contains() {
        assert!(Size::new(10, 10).contains(Size::new(10, 5)));
        assert!(!Size::new(10, 10).contains(Size::new(11, 5)));
    }

    // ===== Serialization tests =====

    #[test]
    fn test_config_json_field_names() {
        let json = serde_json::to_value(CalcConfig::default()).unwrap();
        assert_eq!(json["error_marker"], "MATH ERROR");
        assert_eq!(json["window_size"]["width"], 39);
        assert_eq!(json["button_size"]["height"], 3);
        assert_eq!(json["display_height"], 3);
    }
}
