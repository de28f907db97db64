//! Sizing envelopes: how a container is allowed to size itself along an
//! axis, and how proposed sizes are handed down to items.

use crate::geometry::Size;
use crate::insets::EdgeInsets;
use serde::{Deserialize, Serialize};

/// Sizing instruction for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The container must be exactly this size.
    Exact(f32),
    /// The container sizes to content, up to this bound. The bound is
    /// honored by constraining item measurement, not by clamping the
    /// reported size afterwards.
    AtMost(f32),
    /// The container sizes purely to content. Clamping against an ancestor
    /// bound is the caller's responsibility.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// The bound this spec imposes on content, if any.
    #[must_use]
    pub const fn available(&self) -> Option<f32> {
        match self {
            Self::Exact(n) | Self::AtMost(n) => Some(*n),
            Self::Unspecified => None,
        }
    }

    /// Resolve the final reported size for this axis given the
    /// content-derived size. `Exact` wins; the other modes report content.
    #[must_use]
    pub const fn resolve(&self, content: f32) -> f32 {
        match self {
            Self::Exact(n) => *n,
            Self::AtMost(_) | Self::Unspecified => content,
        }
    }

    /// Check if this spec fixes the size exactly.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Shrink any bound by the given amount, floored at zero.
    #[must_use]
    pub fn deflate(&self, amount: f32) -> Self {
        match self {
            Self::Exact(n) => Self::Exact((n - amount).max(0.0)),
            Self::AtMost(n) => Self::AtMost((n - amount).max(0.0)),
            Self::Unspecified => Self::Unspecified,
        }
    }
}

/// A two-axis sizing envelope.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeEnvelope {
    /// Width instruction
    pub width: MeasureSpec,
    /// Height instruction
    pub height: MeasureSpec,
}

impl SizeEnvelope {
    /// Create an envelope from explicit per-axis specs.
    #[must_use]
    pub const fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    /// Envelope that fixes both axes to the given size.
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self::new(MeasureSpec::Exact(size.width), MeasureSpec::Exact(size.height))
    }

    /// Envelope that bounds both axes by the given size.
    #[must_use]
    pub const fn at_most(size: Size) -> Self {
        Self::new(
            MeasureSpec::AtMost(size.width),
            MeasureSpec::AtMost(size.height),
        )
    }

    /// Envelope with no bound on either axis.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self::new(MeasureSpec::Unspecified, MeasureSpec::Unspecified)
    }

    /// Shrink both axes by the given insets, floored at zero.
    #[must_use]
    pub fn deflate(&self, insets: &EdgeInsets) -> Self {
        Self::new(
            self.width.deflate(insets.horizontal()),
            self.height.deflate(insets.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_default_is_unspecified() {
        assert_eq!(MeasureSpec::default(), MeasureSpec::Unspecified);
    }

    #[test]
    fn test_spec_available() {
        assert_eq!(MeasureSpec::Exact(100.0).available(), Some(100.0));
        assert_eq!(MeasureSpec::AtMost(50.0).available(), Some(50.0));
        assert_eq!(MeasureSpec::Unspecified.available(), None);
    }

    #[test]
    fn test_spec_resolve() {
        assert_eq!(MeasureSpec::Exact(300.0).resolve(120.0), 300.0);
        assert_eq!(MeasureSpec::AtMost(300.0).resolve(120.0), 120.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(120.0), 120.0);
    }

    #[test]
    fn test_spec_resolve_at_most_does_not_clamp() {
        // Oversized content is reported as-is; the bound was already applied
        // during item measurement.
        assert_eq!(MeasureSpec::AtMost(100.0).resolve(150.0), 150.0);
    }

    #[test]
    fn test_spec_is_exact() {
        assert!(MeasureSpec::Exact(1.0).is_exact());
        assert!(!MeasureSpec::AtMost(1.0).is_exact());
        assert!(!MeasureSpec::Unspecified.is_exact());
    }

    #[test]
    fn test_spec_deflate() {
        assert_eq!(
            MeasureSpec::AtMost(100.0).deflate(30.0),
            MeasureSpec::AtMost(70.0)
        );
        assert_eq!(
            MeasureSpec::Exact(20.0).deflate(30.0),
            MeasureSpec::Exact(0.0)
        );
        assert_eq!(
            MeasureSpec::Unspecified.deflate(30.0),
            MeasureSpec::Unspecified
        );
    }

    #[test]
    fn test_envelope_constructors() {
        let size = Size::new(100.0, 50.0);
        assert_eq!(
            SizeEnvelope::exact(size).width,
            MeasureSpec::Exact(100.0)
        );
        assert_eq!(
            SizeEnvelope::at_most(size).height,
            MeasureSpec::AtMost(50.0)
        );
        assert_eq!(
            SizeEnvelope::unspecified().width,
            MeasureSpec::Unspecified
        );
    }

    #[test]
    fn test_envelope_serde_round_trip() {
        let env = SizeEnvelope::new(MeasureSpec::Exact(300.0), MeasureSpec::AtMost(200.0));
        let json = serde_json::to_string(&env).expect("serialize envelope");
        let back: SizeEnvelope = serde_json::from_str(&json).expect("deserialize envelope");
        assert_eq!(env, back);
    }

    #[test]
    fn test_envelope_deflate() {
        let env = SizeEnvelope::at_most(Size::new(100.0, 60.0));
        let deflated = env.deflate(&EdgeInsets::uniform(10.0));
        assert_eq!(deflated.width, MeasureSpec::AtMost(80.0));
        assert_eq!(deflated.height, MeasureSpec::AtMost(40.0));
    }
}
