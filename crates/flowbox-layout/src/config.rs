//! Layout configuration: spacing and padding.

use flowbox_core::EdgeInsets;
use serde::{Deserialize, Serialize};

/// Configuration of a flow layout instance.
///
/// Spacing is inserted between items within a row and between rows; padding
/// insets the content box from the container's edges. All lengths must be
/// non-negative and finite; [`FlowLayout::new`](crate::FlowLayout::new)
/// rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Space between consecutive items in a row
    pub horizontal_spacing: f32,
    /// Space between consecutive rows
    pub vertical_spacing: f32,
    /// Padding inside the container's edges
    pub padding: EdgeInsets,
}

impl FlowConfig {
    /// Create a configuration with the given spacing and no padding.
    #[must_use]
    pub const fn new(horizontal_spacing: f32, vertical_spacing: f32) -> Self {
        Self {
            horizontal_spacing,
            vertical_spacing,
            padding: EdgeInsets::ZERO,
        }
    }

    /// Set both spacings to the same value.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self.vertical_spacing = spacing;
        self
    }

    /// Set the horizontal spacing.
    #[must_use]
    pub const fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the vertical spacing.
    #[must_use]
    pub const fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Check that every length is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.horizontal_spacing.is_finite()
            && self.horizontal_spacing >= 0.0
            && self.vertical_spacing.is_finite()
            && self.vertical_spacing >= 0.0
            && self.padding.is_non_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = FlowConfig::default();
        assert_eq!(config.horizontal_spacing, 0.0);
        assert_eq!(config.vertical_spacing, 0.0);
        assert_eq!(config.padding, EdgeInsets::ZERO);
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_builder() {
        let config = FlowConfig::default()
            .with_horizontal_spacing(16.0)
            .with_vertical_spacing(8.0)
            .with_padding(EdgeInsets::uniform(10.0));
        assert_eq!(config.horizontal_spacing, 16.0);
        assert_eq!(config.vertical_spacing, 8.0);
        assert_eq!(config.padding, EdgeInsets::uniform(10.0));
    }

    #[test]
    fn test_config_with_spacing_sets_both() {
        let config = FlowConfig::default().with_spacing(12.0);
        assert_eq!(config.horizontal_spacing, 12.0);
        assert_eq!(config.vertical_spacing, 12.0);
    }

    #[test]
    fn test_config_is_valid() {
        assert!(FlowConfig::new(16.0, 16.0).is_valid());
        assert!(!FlowConfig::new(-1.0, 16.0).is_valid());
        assert!(!FlowConfig::new(16.0, f32::NAN).is_valid());
        assert!(!FlowConfig::default()
            .with_padding(EdgeInsets::new(-1.0, 0.0, 0.0, 0.0))
            .is_valid());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = FlowConfig::new(16.0, 8.0).with_padding(EdgeInsets::uniform(4.0));
        let json = serde_json::to_string(&config).expect("serialize config");
        let back: FlowConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_deserialize_from_host_json() {
        let json = r#"{
            "horizontal_spacing": 16.0,
            "vertical_spacing": 16.0,
            "padding": { "left": 10.0, "top": 10.0, "right": 10.0, "bottom": 10.0 }
        }"#;
        let config: FlowConfig = serde_json::from_str(json).expect("deserialize config");
        assert_eq!(config.horizontal_spacing, 16.0);
        assert_eq!(config.padding.horizontal(), 20.0);
        assert!(config.is_valid());
    }
}
