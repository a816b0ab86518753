mod axis_frame;
mod frame;
mod null_renderer;
mod primitives;

pub use axis_frame::{AxisStyle, push_axis_primitives};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` and own every drawing
/// surface they need; they never touch layout state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
