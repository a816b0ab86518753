use serde::{Deserialize, Serialize};

use crate::core::{Alignment, AxisTuning};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// View padding subtracted before axis bands are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    #[must_use]
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }
}

/// Numeric tunables consumed when a chart and its axes are built.
///
/// This type is serializable so hosts can keep chart styling in JSON. Every
/// field has a default; camelCase keys are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(alias = "minSeparation")]
    pub min_separation_px: f64,
    #[serde(alias = "maxSeparation")]
    pub max_separation_px: f64,
    #[serde(alias = "maxSlotExtent")]
    pub max_slot_extent_px: f64,
    #[serde(alias = "xAxisHeight")]
    pub x_axis_height_px: u32,
    #[serde(alias = "yAxisWidth")]
    pub y_axis_width_px: u32,
    /// Overrides both per-axis alignments when present.
    pub alignment: Option<Alignment>,
    #[serde(alias = "xAlignment")]
    pub x_alignment: Alignment,
    #[serde(alias = "yAlignment")]
    pub y_alignment: Alignment,
    pub padding: Padding,
    #[serde(alias = "backgroundColor")]
    pub background_color: Color,
    #[serde(alias = "yTickCount")]
    pub y_tick_count: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let tuning = AxisTuning::default();
        Self {
            min_separation_px: tuning.min_separation_px,
            max_separation_px: tuning.max_separation_px,
            max_slot_extent_px: tuning.max_slot_extent_px,
            x_axis_height_px: 30,
            y_axis_width_px: 30,
            alignment: None,
            x_alignment: Alignment::Center,
            y_alignment: Alignment::Start,
            padding: Padding::default(),
            background_color: Color::TRANSPARENT,
            y_tick_count: 4,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn axis_tuning(&self) -> AxisTuning {
        AxisTuning {
            min_separation_px: self.min_separation_px,
            max_separation_px: self.max_separation_px,
            max_slot_extent_px: self.max_slot_extent_px,
        }
    }

    #[must_use]
    pub fn x_axis_alignment(&self) -> Alignment {
        self.alignment.unwrap_or(self.x_alignment)
    }

    #[must_use]
    pub fn y_axis_alignment(&self) -> Alignment {
        self.alignment.unwrap_or(self.y_alignment)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.axis_tuning().validate()?;
        if self.y_tick_count == 0 {
            return Err(ChartError::Configuration(
                "y tick count must be >= 1".to_owned(),
            ));
        }
        self.background_color
            .validate()
            .map_err(|e| ChartError::Configuration(format!("background color: {e}")))
    }

    /// Converts density-independent lengths to pixels (`px = dp * density`).
    ///
    /// Band sizes are floored to whole pixels; padding is already in pixels.
    pub fn scaled_to_density(mut self, density: f64) -> ChartResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ChartError::Configuration(format!(
                "display density must be finite and > 0, got {density}"
            )));
        }

        let scale_band = |dp: u32| (f64::from(dp) * density).floor() as u32;
        self.min_separation_px *= density;
        self.max_separation_px *= density;
        self.max_slot_extent_px *= density;
        self.x_axis_height_px = scale_band(self.x_axis_height_px);
        self.y_axis_width_px = scale_band(self.y_axis_width_px);
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Configuration(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
