//! The placement pass: rows to rectangles.

use crate::config::FlowConfig;
use crate::flow::FlowMeasurement;
use flowbox_core::Rect;

/// Convert a measurement into one rectangle per item, in presentation order.
///
/// A cursor starts at the padding's top-left corner. Within a row each item
/// lands at the cursor offset by its own left/top margins, at its measured
/// size; the cursor then advances by the item's outer width plus horizontal
/// spacing. Finishing a row resets the cursor's x and advances y by the row
/// height plus vertical spacing.
///
/// Pure one-shot transform over the rows the measurement pass built; calling
/// it twice on the same measurement yields identical rectangles.
#[must_use]
pub fn place_flow(measurement: &FlowMeasurement, config: &FlowConfig) -> Vec<Rect> {
    let mut rects = vec![Rect::default(); measurement.items.len()];
    let mut cursor_y = config.padding.top;

    for row in &measurement.rows {
        let mut cursor_x = config.padding.left;
        for &index in &row.items {
            let item = &measurement.items[index];
            rects[index] = Rect::new(
                cursor_x + item.margins.left,
                cursor_y + item.margins.top,
                item.size.width,
                item.size.height,
            );
            cursor_x += item.outer_width() + config.horizontal_spacing;
        }
        cursor_y += row.height + config.vertical_spacing;
    }

    rects
}
