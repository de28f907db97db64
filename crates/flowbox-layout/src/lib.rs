#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
//! Flow layout engine.
//!
//! Arranges rectangular items left-to-right, wrapping to a new row whenever
//! the next item would overflow the available width, and stacks rows
//! top-to-bottom. Two passes per layout cycle:
//!
//! 1. **Measurement** ([`measure_flow`]): resolves each item's size through
//!    its [`Measurable`](flowbox_core::Measurable) contract, partitions
//!    items into [`Row`]s, and derives the container's size under the
//!    envelope's sizing mode.
//! 2. **Placement** ([`place_flow`]): walks the rows and assigns one
//!    rectangle per item.
//!
//! The rows travel between the passes as a transient [`FlowMeasurement`]
//! value; there is no instance-held cache to clear between cycles, and both
//! passes are pure. [`FlowLayout`] bundles a validated [`FlowConfig`] with
//! both passes for hosts that want a single entry point.
//!
//! Every measurement pass recomputes rows from scratch; nothing is reused
//! across cycles.

mod config;
mod engine;
mod flow;
mod place;

pub use config::FlowConfig;
pub use engine::{FlowLayout, FlowLayoutResult};
pub use flow::{measure_flow, FlowMeasurement, LayoutError, MeasuredItem, Row};
pub use place::place_flow;
