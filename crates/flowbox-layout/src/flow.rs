//! The measurement pass: item sizing, row partition, container sizing.

use crate::config::FlowConfig;
use flowbox_core::{EdgeInsets, Measurable, MeasureSpec, Size, SizeEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// An item's resolved size and margins after measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredItem {
    /// Measured content size
    pub size: Size,
    /// Margins around the content box
    pub margins: EdgeInsets,
}

impl MeasuredItem {
    /// Horizontal extent including margins.
    #[must_use]
    pub fn outer_width(&self) -> f32 {
        self.size.width + self.margins.horizontal()
    }

    /// Vertical extent including margins.
    #[must_use]
    pub fn outer_height(&self) -> f32 {
        self.size.height + self.margins.vertical()
    }
}

/// One horizontal run of items on the same visual line.
///
/// Items are stored as indices into the measured item list, preserving
/// presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Indices of the items on this row, in presentation order
    pub items: Vec<usize>,
    /// Max outer height over the row's items
    pub height: f32,
    /// Accumulated width: outer widths plus spacing between consecutive
    /// items, no trailing spacing
    pub width: f32,
}

/// The transient result of the measurement pass.
///
/// Consumed by [`place_flow`](crate::place_flow); rebuilt from scratch on
/// every layout cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMeasurement {
    /// Rows in top-to-bottom order
    pub rows: Vec<Row>,
    /// Measured items in presentation order
    pub items: Vec<MeasuredItem>,
    /// Resolved container size
    pub size: Size,
}

impl FlowMeasurement {
    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items (and therefore no rows).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors from layout operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Spacing or padding is negative or non-finite.
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },
    /// An item reported a negative or non-finite size. This is a contract
    /// violation by the measurement collaborator, never clamped silently.
    InvalidItemSize {
        /// Index of the offending item in presentation order
        index: usize,
        /// Reported width
        width: f32,
        /// Reported height
        height: f32,
    },
    /// An item carries negative or non-finite margins.
    InvalidItemMargins {
        /// Index of the offending item in presentation order
        index: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid layout config: {}", reason)
            }
            Self::InvalidItemSize {
                index,
                width,
                height,
            } => {
                write!(
                    f,
                    "item {} reported an invalid size {}x{}",
                    index, width, height
                )
            }
            Self::InvalidItemMargins { index } => {
                write!(f, "item {} has invalid margins", index)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

// ============================================================================
// MEASUREMENT PASS
// ============================================================================

/// Measure items against the container's envelope and partition them into
/// rows.
///
/// Left/right padding is subtracted from the available width before the
/// overflow test and added back to the reported container width; the same
/// convention holds vertically. Items are walked in presentation order; a
/// row is closed when appending the next item would exceed the available
/// width, except that the first item of a row is always accepted: an item
/// wider than the container occupies its own row rather than being dropped
/// or split.
///
/// Under an `Exact` envelope the reported size is the exact bound; under
/// `AtMost` or `Unspecified` it is content-derived. `AtMost` is honored by
/// constraining item measurement, not by clamping the reported size, so a
/// single oversized item can report a container wider than the bound; the
/// host clips the overflow.
///
/// # Errors
///
/// Returns [`LayoutError`] when the configuration carries negative lengths
/// or an item reports a negative or non-finite size or margins.
pub fn measure_flow(
    items: &[&dyn Measurable],
    envelope: SizeEnvelope,
    config: &FlowConfig,
) -> Result<FlowMeasurement, LayoutError> {
    if !config.is_valid() {
        return Err(LayoutError::InvalidConfig {
            reason: "spacing and padding must be finite and non-negative".to_string(),
        });
    }

    let padding = config.padding;
    let available_width = envelope
        .width
        .available()
        .map_or(f32::INFINITY, |w| (w - padding.horizontal()).max(0.0));
    let available_height = envelope
        .height
        .available()
        .map_or(f32::INFINITY, |h| (h - padding.vertical()).max(0.0));

    // Resolve every item once, against the post-padding envelope deflated
    // by the item's own margins.
    let mut measured = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let margins = item.margins();
        if !margins.is_non_negative() {
            return Err(LayoutError::InvalidItemMargins { index });
        }
        let item_envelope = SizeEnvelope::new(
            axis_proposal(available_width, margins.horizontal()),
            axis_proposal(available_height, margins.vertical()),
        );
        let size = item.measure(item_envelope);
        if !size.is_valid() {
            return Err(LayoutError::InvalidItemSize {
                index,
                width: size.width,
                height: size.height,
            });
        }
        measured.push(MeasuredItem { size, margins });
    }

    // Greedy row partition in presentation order. `row_width` carries no
    // trailing spacing, so the overflow test adds the spacing that would
    // separate the candidate item from the row's last item.
    let mut rows: Vec<Row> = Vec::new();
    let mut row_items: Vec<usize> = Vec::new();
    let mut row_width = 0.0_f32;
    let mut row_height = 0.0_f32;

    for (index, item) in measured.iter().enumerate() {
        let outer_width = item.outer_width();
        let outer_height = item.outer_height();

        if !row_items.is_empty()
            && row_width + config.horizontal_spacing + outer_width > available_width
        {
            rows.push(Row {
                items: std::mem::take(&mut row_items),
                height: row_height,
                width: row_width,
            });
            row_width = 0.0;
            row_height = 0.0;
        }

        if row_items.is_empty() {
            row_width = outer_width;
        } else {
            row_width += config.horizontal_spacing + outer_width;
        }
        row_height = row_height.max(outer_height);
        row_items.push(index);
    }

    if !row_items.is_empty() {
        rows.push(Row {
            items: row_items,
            height: row_height,
            width: row_width,
        });
    }

    let content_width = rows.iter().map(|row| row.width).fold(0.0_f32, f32::max);
    let content_height = rows.iter().map(|row| row.height).sum::<f32>()
        + config.vertical_spacing * rows.len().saturating_sub(1) as f32;

    let size = Size::new(
        envelope.width.resolve(content_width + padding.horizontal()),
        envelope.height.resolve(content_height + padding.vertical()),
    );

    Ok(FlowMeasurement {
        rows,
        items: measured,
        size,
    })
}

/// Proposal for one axis of an item's envelope: the post-padding space minus
/// the item's margins, or unbounded when the container axis is unbounded.
fn axis_proposal(available: f32, margin_extent: f32) -> MeasureSpec {
    if available.is_finite() {
        MeasureSpec::AtMost((available - margin_extent).max(0.0))
    } else {
        MeasureSpec::Unspecified
    }
}
