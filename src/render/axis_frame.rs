use crate::core::{AxisLayoutEngine, Orientation};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Colors and sizes used when drawing one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub label_color: Color,
    pub line_color: Color,
    pub debug_color: Color,
    pub font_size_px: f64,
    pub line_width_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            label_color: Color::YELLOW,
            line_color: Color::GREEN,
            debug_color: Color::RED,
            font_size_px: 12.0,
            line_width_px: 1.0,
        }
    }
}

// Keeps debug outlines off the band edge where backends may clip them.
const DEBUG_OUTLINE_INSET_PX: f64 = 0.1;

/// Appends one axis to `frame`, translated by the band origin.
///
/// Horizontal axes draw their rule along the top edge, vertical axes along
/// the right edge next to the plot. Labels are centered inside their slot;
/// vertical centering against font metrics is left to the backend.
pub fn push_axis_primitives(
    frame: &mut RenderFrame,
    axis: &AxisLayoutEngine,
    style: &AxisStyle,
    origin_x: f64,
    origin_y: f64,
) {
    let width = f64::from(axis.width());
    let height = f64::from(axis.height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let rule = match axis.orientation() {
        Orientation::Horizontal => {
            LinePrimitive::new(0.0, 0.0, width, 0.0, style.line_width_px, style.line_color)
        }
        Orientation::Vertical => {
            LinePrimitive::new(width, 0.0, width, height, style.line_width_px, style.line_color)
        }
    };
    frame.lines.push(rule.translated(origin_x, origin_y));

    let Some(layout) = axis.layout() else {
        return;
    };

    for slot in axis.slots() {
        let Some(position) = layout.positions.get(&slot.id).copied() else {
            continue;
        };

        if axis.is_debug() {
            let outline_width = (layout.slot_width - DEBUG_OUTLINE_INSET_PX).max(0.0);
            let outline_height = (layout.slot_height - DEBUG_OUTLINE_INSET_PX).max(0.0);
            frame.rects.push(
                RectPrimitive::outlined(
                    position.x,
                    position.y,
                    outline_width,
                    outline_height,
                    style.line_width_px,
                    style.debug_color,
                )
                .translated(origin_x, origin_y),
            );
        }

        let Some(label) = slot.label.as_deref().filter(|label| !label.is_empty()) else {
            continue;
        };
        frame.texts.push(
            TextPrimitive::new(
                label,
                position.x + layout.slot_width / 2.0,
                position.y + layout.slot_height / 2.0,
                style.font_size_px,
                style.label_color,
            )
            .translated(origin_x, origin_y),
        );
    }
}
