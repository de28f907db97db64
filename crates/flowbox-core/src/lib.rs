//! Core types for the flowbox layout engine.
//!
//! This crate carries no algorithm. It defines the value types the layout
//! passes exchange with their host:
//!
//! - Geometric primitives ([`Point`], [`Size`], [`Rect`])
//! - Per-edge lengths ([`EdgeInsets`]) used for padding and margins
//! - The sizing envelope ([`MeasureSpec`], [`SizeEnvelope`])
//! - The measurement contract ([`Measurable`]) a host implements for its
//!   items
//!
//! The algorithm itself lives in `flowbox-layout`.

mod geometry;
mod insets;
mod measurable;
mod measure_spec;

pub use geometry::{Point, Rect, Size};
pub use insets::EdgeInsets;
pub use measurable::{FixedBox, Measurable, ShrinkBox};
pub use measure_spec::{MeasureSpec, SizeEnvelope};
