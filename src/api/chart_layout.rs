use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisLayoutEngine, Rect, Slot, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisStyle, RenderFrame, Renderer, push_axis_primitives};

use super::ChartConfig;

/// Resolved chart regions in view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub plot: Rect,
    pub x_axis: Option<Rect>,
    pub y_axis: Option<Rect>,
}

/// Splits a chart view into an X band at the bottom, a Y band at the left
/// and the remaining plot area, and keeps each axis sized to its band.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayoutCoordinator {
    config: ChartConfig,
    x_axis: Option<AxisLayoutEngine>,
    y_axis: Option<AxisLayoutEngine>,
    size: Viewport,
    geometry: Option<ChartGeometry>,
}

impl ChartLayoutCoordinator {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            x_axis: None,
            y_axis: None,
            size: Viewport::default(),
            geometry: None,
        })
    }

    /// Installs the axes (either may be absent) and relayouts at the current size.
    ///
    /// Nothing is installed when the axes cannot be laid out at that size.
    pub fn configure(
        &mut self,
        x_axis: Option<AxisLayoutEngine>,
        y_axis: Option<AxisLayoutEngine>,
    ) -> ChartResult<()> {
        if !self.size.is_valid() {
            self.x_axis = x_axis;
            self.y_axis = y_axis;
            return Ok(());
        }
        self.layout(self.size, x_axis, y_axis)
    }

    /// Relayouts for a new view size.
    ///
    /// Returns `false` without touching anything when either dimension is
    /// zero or the size matches the last laid out one. A failed layout keeps
    /// the previous size, so the same size can be retried later.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> ChartResult<bool> {
        let next = Viewport::new(width, height);
        if !next.is_valid() || next == self.size {
            trace!(width, height, "ignoring chart size change");
            return Ok(false);
        }
        self.layout(next, self.x_axis.clone(), self.y_axis.clone())?;
        Ok(true)
    }

    pub fn set_x_slots(&mut self, slots: &[Slot]) -> ChartResult<()> {
        match self.x_axis.as_mut() {
            Some(axis) => axis.set_slots(slots),
            None => Ok(()),
        }
    }

    pub fn set_y_slots(&mut self, slots: &[Slot]) -> ChartResult<()> {
        match self.y_axis.as_mut() {
            Some(axis) => axis.set_slots(slots),
            None => Ok(()),
        }
    }

    pub fn set_debug(&mut self, debug: bool) {
        for axis in [self.x_axis.as_mut(), self.y_axis.as_mut()]
            .into_iter()
            .flatten()
        {
            axis.set_debug(debug);
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn size(&self) -> Viewport {
        self.size
    }

    #[must_use]
    pub fn geometry(&self) -> Option<ChartGeometry> {
        self.geometry
    }

    #[must_use]
    pub fn x_axis(&self) -> Option<&AxisLayoutEngine> {
        self.x_axis.as_ref()
    }

    #[must_use]
    pub fn y_axis(&self) -> Option<&AxisLayoutEngine> {
        self.y_axis.as_ref()
    }

    pub fn x_axis_mut(&mut self) -> Option<&mut AxisLayoutEngine> {
        self.x_axis.as_mut()
    }

    pub fn y_axis_mut(&mut self) -> Option<&mut AxisLayoutEngine> {
        self.y_axis.as_mut()
    }

    /// Background plus both axes, each translated to its band origin.
    pub fn build_render_frame(&self, style: &AxisStyle) -> ChartResult<RenderFrame> {
        let Some(geometry) = self.geometry else {
            return Err(ChartError::InvalidViewport {
                width: self.size.width,
                height: self.size.height,
            });
        };

        let mut frame = RenderFrame::new(geometry.viewport, self.config.background_color);

        if let (Some(axis), Some(band)) = (self.x_axis.as_ref(), geometry.x_axis) {
            push_axis_primitives(&mut frame, axis, style, f64::from(band.x), f64::from(band.y));
        }
        if let (Some(axis), Some(band)) = (self.y_axis.as_ref(), geometry.y_axis) {
            push_axis_primitives(&mut frame, axis, style, f64::from(band.x), f64::from(band.y));
        }
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R, style: &AxisStyle) -> ChartResult<()> {
        let frame = self.build_render_frame(style)?;
        renderer.render(&frame)
    }

    /// Sizes `x_axis` and `y_axis` for `size` and adopts them together with
    /// the new geometry only when both succeed.
    fn layout(
        &mut self,
        size: Viewport,
        mut x_axis: Option<AxisLayoutEngine>,
        mut y_axis: Option<AxisLayoutEngine>,
    ) -> ChartResult<()> {
        let padding = self.config.padding;
        let available_width = size
            .width
            .saturating_sub(padding.left.saturating_add(padding.right));
        let available_height = size
            .height
            .saturating_sub(padding.top.saturating_add(padding.bottom));

        let has_x = x_axis.is_some();
        let has_y = y_axis.is_some();

        let y_width = if has_y { self.config.y_axis_width_px } else { 0 };
        let x_height = if has_x { self.config.x_axis_height_px } else { 0 };
        let plot_width = available_width.saturating_sub(y_width);
        let plot_height = available_height.saturating_sub(x_height);
        let plot_left = padding.left.saturating_add(y_width);

        let geometry = ChartGeometry {
            viewport: size,
            plot: Rect::new(plot_left, padding.top, plot_width, plot_height),
            x_axis: has_x.then(|| {
                Rect::new(
                    plot_left,
                    padding.top.saturating_add(plot_height),
                    plot_width,
                    x_height,
                )
            }),
            y_axis: has_y.then(|| Rect::new(padding.left, padding.top, y_width, plot_height)),
        };

        if let Some(axis) = x_axis.as_mut() {
            axis.set_dimensions(plot_width, x_height)?;
        }
        if let Some(axis) = y_axis.as_mut() {
            axis.set_dimensions(y_width, plot_height)?;
        }

        debug!(
            width = size.width,
            height = size.height,
            plot_width,
            plot_height,
            x_band = ?geometry.x_axis,
            y_band = ?geometry.y_axis,
            "chart layout computed"
        );
        self.size = size;
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self.geometry = Some(geometry);
        Ok(())
    }
}
