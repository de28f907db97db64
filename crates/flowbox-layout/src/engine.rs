//! Convenience engine running both passes.

use crate::config::FlowConfig;
use crate::flow::{measure_flow, FlowMeasurement, LayoutError};
use crate::place::place_flow;
use flowbox_core::{Measurable, Rect, Size, SizeEnvelope};
use serde::{Deserialize, Serialize};

/// Result of a full measure-then-place cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLayoutResult {
    /// Resolved container size
    pub size: Size,
    /// One rectangle per item, in presentation order
    pub rects: Vec<Rect>,
}

/// A flow layout instance: validated configuration plus the two passes.
///
/// Holds nothing but immutable configuration, so one instance can lay out
/// any number of item lists; all state flows through the
/// [`FlowMeasurement`] returned by [`measure`](Self::measure).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    /// Create a layout instance, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if any spacing or padding
    /// length is negative or non-finite.
    pub fn new(config: FlowConfig) -> Result<Self, LayoutError> {
        if !config.is_valid() {
            return Err(LayoutError::InvalidConfig {
                reason: "spacing and padding must be finite and non-negative".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Run the measurement pass.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if an item reports an invalid size or
    /// margins.
    pub fn measure(
        &self,
        items: &[&dyn Measurable],
        envelope: SizeEnvelope,
    ) -> Result<FlowMeasurement, LayoutError> {
        measure_flow(items, envelope, &self.config)
    }

    /// Run the placement pass over a measurement.
    #[must_use]
    pub fn place(&self, measurement: &FlowMeasurement) -> Vec<Rect> {
        place_flow(measurement, &self.config)
    }

    /// Run both passes: measure, then place.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the measurement pass fails.
    pub fn layout(
        &self,
        items: &[&dyn Measurable],
        envelope: SizeEnvelope,
    ) -> Result<FlowLayoutResult, LayoutError> {
        let measurement = self.measure(items, envelope)?;
        let rects = self.place(&measurement);
        Ok(FlowLayoutResult {
            size: measurement.size,
            rects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowbox_core::FixedBox;

    #[test]
    fn test_new_validates_config() {
        assert!(FlowLayout::new(FlowConfig::new(16.0, 16.0)).is_ok());
        let result = FlowLayout::new(FlowConfig::new(-1.0, 16.0));
        assert!(matches!(result, Err(LayoutError::InvalidConfig { .. })));
    }

    #[test]
    fn test_default_config_is_zero() {
        let layout = FlowLayout::default();
        assert_eq!(layout.config().horizontal_spacing, 0.0);
    }

    #[test]
    fn test_layout_runs_both_passes() {
        let boxes = [FixedBox::new(100.0, 20.0), FixedBox::new(100.0, 20.0)];
        let items: Vec<&dyn Measurable> = boxes.iter().map(|b| b as &dyn Measurable).collect();
        let layout = FlowLayout::new(FlowConfig::new(16.0, 16.0)).expect("valid config");
        let result = layout
            .layout(&items, SizeEnvelope::at_most(Size::new(150.0, 300.0)))
            .expect("layout should succeed");
        assert_eq!(result.rects.len(), 2);
        assert_eq!(result.size, Size::new(100.0, 56.0));
        assert_eq!(result.rects[1], Rect::new(0.0, 36.0, 100.0, 20.0));
    }
}
