//! The measurement contract between the layout engine and its host.

use crate::geometry::Size;
use crate::insets::EdgeInsets;
use crate::measure_spec::SizeEnvelope;
use serde::{Deserialize, Serialize};

/// An item the flow layout can measure.
///
/// The host owns the item's visual representation; the layout only asks it
/// one question: given this envelope, what size do you resolve to? The call
/// is synchronous and must return a finite, non-negative size; the layout
/// crate rejects anything else as a contract violation rather than clamping
/// it.
pub trait Measurable {
    /// Resolve the item's size given a proposed envelope.
    fn measure(&self, envelope: SizeEnvelope) -> Size;

    /// Margins reserved around the item's content box.
    ///
    /// Consumed as placement offsets and counted toward row width and row
    /// height. Defaults to zero.
    fn margins(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }
}

/// A fixed-size item.
///
/// The simplest useful [`Measurable`]: always reports its intrinsic size,
/// even past the envelope's bound. An explicitly sized item wins over the
/// container's proposal; an item wider than the container ends up alone on
/// its own row rather than truncated. Handy for hosts whose items have
/// known sizes, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedBox {
    /// Intrinsic size
    pub size: Size,
    /// Margins around the box
    pub margins: EdgeInsets,
}

impl FixedBox {
    /// Create a fixed box with the given intrinsic size and no margins.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: EdgeInsets::ZERO,
        }
    }

    /// Set the margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }
}

impl Measurable for FixedBox {
    fn measure(&self, _envelope: SizeEnvelope) -> Size {
        self.size
    }

    fn margins(&self) -> EdgeInsets {
        self.margins
    }
}

/// An item that shrinks to the proposed envelope.
///
/// Reports its intrinsic size clamped to any `Exact`/`AtMost` bound, the way
/// text or other reflowable content behaves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShrinkBox {
    /// Intrinsic size
    pub size: Size,
    /// Margins around the box
    pub margins: EdgeInsets,
}

impl ShrinkBox {
    /// Create a shrinking box with the given intrinsic size and no margins.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: EdgeInsets::ZERO,
        }
    }

    /// Set the margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }
}

impl Measurable for ShrinkBox {
    fn measure(&self, envelope: SizeEnvelope) -> Size {
        let width = match envelope.width.available() {
            Some(bound) => self.size.width.min(bound),
            None => self.size.width,
        };
        let height = match envelope.height.available() {
            Some(bound) => self.size.height.min(bound),
            None => self.size.height,
        };
        Size::new(width, height)
    }

    fn margins(&self) -> EdgeInsets {
        self.margins
    }
}
