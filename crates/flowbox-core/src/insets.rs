//! Per-edge lengths: padding and margins.

use serde::{Deserialize, Serialize};

/// Lengths reserved on each edge of a box.
///
/// Used both as container padding and as per-item margins. All four values
/// are expected to be non-negative; the layout crate validates this where
/// the insets enter the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl EdgeInsets {
    /// Zero insets on all edges.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform insets.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create insets with one horizontal and one vertical value.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal extent (left + right).
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent (top + bottom).
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Check if all edges are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Check if all edges are finite and non-negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_default_is_zero() {
        assert_eq!(EdgeInsets::default(), EdgeInsets::ZERO);
        assert!(EdgeInsets::default().is_zero());
    }

    #[test]
    fn test_insets_uniform() {
        let i = EdgeInsets::uniform(8.0);
        assert_eq!(i.horizontal(), 16.0);
        assert_eq!(i.vertical(), 16.0);
    }

    #[test]
    fn test_insets_symmetric() {
        let i = EdgeInsets::symmetric(4.0, 6.0);
        assert_eq!(i.left, 4.0);
        assert_eq!(i.right, 4.0);
        assert_eq!(i.top, 6.0);
        assert_eq!(i.bottom, 6.0);
    }

    #[test]
    fn test_insets_totals() {
        let i = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.horizontal(), 4.0);
        assert_eq!(i.vertical(), 6.0);
    }

    #[test]
    fn test_insets_is_non_negative() {
        assert!(EdgeInsets::ZERO.is_non_negative());
        assert!(EdgeInsets::new(1.0, 2.0, 3.0, 4.0).is_non_negative());
        assert!(!EdgeInsets::new(-1.0, 0.0, 0.0, 0.0).is_non_negative());
        assert!(!EdgeInsets::new(f32::NAN, 0.0, 0.0, 0.0).is_non_negative());
    }
}
