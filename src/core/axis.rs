use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::slot::{Slot, SlotId, SlotPosition};
use crate::error::{ChartError, ChartResult};

/// Direction along which slots are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Placement of the occupied span inside the available major extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[serde(alias = "START", alias = "Start")]
    Start,
    #[default]
    #[serde(alias = "CENTER", alias = "Center")]
    Center,
    #[serde(alias = "END", alias = "End")]
    End,
}

impl FromStr for Alignment {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(ChartError::Configuration(format!(
                "slot alignment behaviour not defined: `{value}`"
            ))),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// Pixel bounds for slot size and spacing along the major axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTuning {
    pub min_separation_px: f64,
    pub max_separation_px: f64,
    pub max_slot_extent_px: f64,
}

impl Default for AxisTuning {
    fn default() -> Self {
        Self {
            min_separation_px: 5.0,
            max_separation_px: 20.0,
            max_slot_extent_px: 30.0,
        }
    }
}

impl AxisTuning {
    /// Checks bounds and rounds the minimum separation up to a whole pixel.
    ///
    /// Separation is floored during layout, so a fractional minimum could be
    /// undercut by the floor alone.
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("min_separation_px", self.min_separation_px),
            ("max_separation_px", self.max_separation_px),
            ("max_slot_extent_px", self.max_slot_extent_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Configuration(format!(
                    "axis tuning `{name}` must be finite and >= 0, got {value}"
                )));
            }
        }

        let min_separation_px = self.min_separation_px.ceil();
        if min_separation_px > self.max_separation_px {
            return Err(ChartError::Configuration(format!(
                "axis min separation ({min_separation_px}) exceeds max separation ({})",
                self.max_separation_px
            )));
        }

        Ok(Self {
            min_separation_px,
            ..self
        })
    }
}

/// Result of one layout pass.
///
/// Positions are rebuilt wholesale on every pass and keyed by slot id in the
/// stored slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub orientation: Orientation,
    pub slot_width: f64,
    pub slot_height: f64,
    pub separation: f64,
    /// Major-axis offset of the first slot's near edge.
    pub start: f64,
    /// Slot sizes plus separations, first near edge to last far edge.
    pub total_span: f64,
    pub positions: IndexMap<SlotId, SlotPosition>,
}

impl AxisLayout {
    #[must_use]
    pub fn major_slot_size(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.slot_width,
            Orientation::Vertical => self.slot_height,
        }
    }

    #[must_use]
    pub fn major_coordinate(&self, position: SlotPosition) -> f64 {
        match self.orientation {
            Orientation::Horizontal => position.x,
            Orientation::Vertical => position.y,
        }
    }
}

/// Computes slot geometry for one axis.
///
/// Returns `Ok(None)` when the extent is unmeasured or there are no slots.
pub fn compute_axis_layout(
    orientation: Orientation,
    alignment: Alignment,
    tuning: AxisTuning,
    width: u32,
    height: u32,
    slots: &[Slot],
) -> ChartResult<Option<AxisLayout>> {
    if width == 0 || height == 0 || slots.is_empty() {
        return Ok(None);
    }

    let (major, minor) = match orientation {
        Orientation::Horizontal => (f64::from(width), f64::from(height)),
        Orientation::Vertical => (f64::from(height), f64::from(width)),
    };
    let count = slots.len() as f64;
    let min_separation = tuning.min_separation_px;

    let size = ((major - min_separation * (count - 1.0)) / count)
        .floor()
        .min(tuning.max_slot_extent_px)
        .max(0.0);

    let separation = if slots.len() == 1 {
        0.0
    } else {
        let separation = ((major - size * count) / (count - 1.0)).floor();
        if separation < min_separation {
            return Err(ChartError::Configuration(format!(
                "slot separation below minimum: sep={separation} min_sep={min_separation} \
                 extent={major} slots={}",
                slots.len()
            )));
        }
        separation.min(tuning.max_separation_px)
    };

    let total_span = size * count + separation * (count - 1.0);
    let start = match alignment {
        Alignment::Start => 0.0,
        Alignment::End => major - total_span,
        Alignment::Center => (major - total_span) / 2.0,
    };

    let (slot_width, slot_height) = match orientation {
        Orientation::Horizontal => (size, minor),
        Orientation::Vertical => (minor, size),
    };

    let step = size + separation;
    let positions = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let offset = start + step * index as f64;
            let position = match orientation {
                Orientation::Horizontal => SlotPosition::new(offset, 0.0),
                Orientation::Vertical => SlotPosition::new(0.0, offset),
            };
            (slot.id, position)
        })
        .collect();

    Ok(Some(AxisLayout {
        orientation,
        slot_width,
        slot_height,
        separation,
        start,
        total_span,
        positions,
    }))
}

/// Stateful slot layout for one chart axis.
///
/// Every mutation that can move slots recomputes the whole layout. Passes
/// with a zero extent or no slots are skipped and keep the previous layout;
/// a rejected pass leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayoutEngine {
    orientation: Orientation,
    alignment: Alignment,
    tuning: AxisTuning,
    width: u32,
    height: u32,
    slots: Vec<Slot>,
    layout: Option<AxisLayout>,
    debug: bool,
}

impl AxisLayoutEngine {
    pub fn new(orientation: Orientation, tuning: AxisTuning) -> ChartResult<Self> {
        Ok(Self {
            orientation,
            alignment: Alignment::default(),
            tuning: tuning.validate()?,
            width: 0,
            height: 0,
            slots: Vec::new(),
            layout: None,
            debug: false,
        })
    }

    /// X axis preset: horizontal, centered slots.
    pub fn horizontal(tuning: AxisTuning) -> ChartResult<Self> {
        Ok(Self::new(Orientation::Horizontal, tuning)?.with_alignment(Alignment::Center))
    }

    /// Y axis preset: vertical, slots packed at the start.
    pub fn vertical(tuning: AxisTuning) -> ChartResult<Self> {
        Ok(Self::new(Orientation::Vertical, tuning)?.with_alignment(Alignment::Start))
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.commit(self.orientation, width, height, None)
    }

    /// Stores a copy of `slots` and lays them out.
    ///
    /// Vertical axes keep the copy reversed so the first data slot ends up at
    /// the visual start despite the downward pixel y axis.
    pub fn set_slots(&mut self, slots: &[Slot]) -> ChartResult<()> {
        let mut seen = HashSet::with_capacity(slots.len());
        if let Some(duplicate) = slots.iter().find(|slot| !seen.insert(slot.id)) {
            return Err(ChartError::DuplicateSlotId { id: duplicate.id });
        }

        let mut stored = slots.to_vec();
        if self.orientation == Orientation::Vertical {
            stored.reverse();
        }
        self.commit(self.orientation, self.width, self.height, Some(stored))
    }

    /// Switches orientation, reversing slot order on change, and relayouts.
    pub fn set_orientation(&mut self, orientation: Orientation) -> ChartResult<()> {
        if orientation == self.orientation {
            return Ok(());
        }
        let mut reversed = self.slots.clone();
        reversed.reverse();
        self.commit(orientation, self.width, self.height, Some(reversed))
    }

    /// Takes effect on the next recomputation.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn relayout(&mut self) -> ChartResult<()> {
        self.commit(self.orientation, self.width, self.height, None)
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn start_position_for_slot(&self, id: SlotId) -> ChartResult<f64> {
        let position = self.lookup(id)?;
        Ok(self
            .layout
            .as_ref()
            .map_or(0.0, |layout| layout.major_coordinate(position)))
    }

    pub fn center_position_for_slot(&self, id: SlotId) -> ChartResult<f64> {
        let start = self.start_position_for_slot(id)?;
        let half = self
            .layout
            .as_ref()
            .map_or(0.0, |layout| layout.major_slot_size() / 2.0);
        Ok(start + half)
    }

    /// Interpolates linearly across the occupied span, ignoring slot edges.
    pub fn position_for_fraction(&self, fraction: f64) -> ChartResult<f64> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ChartError::OutOfRange { value: fraction });
        }
        Ok(self
            .layout
            .as_ref()
            .map_or(0.0, |layout| layout.start + layout.total_span * fraction))
    }

    /// Last computed position of `id`, if any pass placed it.
    #[must_use]
    pub fn position_of(&self, id: SlotId) -> Option<SlotPosition> {
        self.layout
            .as_ref()
            .and_then(|layout| layout.positions.get(&id).copied())
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn layout(&self) -> Option<&AxisLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub fn tuning(&self) -> AxisTuning {
        self.tuning
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |layout| layout.slot_width)
    }

    #[must_use]
    pub fn slot_height(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |layout| layout.slot_height)
    }

    #[must_use]
    pub fn separation(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |layout| layout.separation)
    }

    fn lookup(&self, id: SlotId) -> ChartResult<SlotPosition> {
        if !self.slots.iter().any(|slot| slot.id == id) {
            return Err(ChartError::NotFound { id });
        }
        Ok(self.position_of(id).unwrap_or_default())
    }

    /// Lays out the candidate state and adopts it only when the pass succeeds.
    ///
    /// `slots` of `None` keeps the stored collection. On error every field,
    /// including the previous layout, is left as it was.
    fn commit(
        &mut self,
        orientation: Orientation,
        width: u32,
        height: u32,
        slots: Option<Vec<Slot>>,
    ) -> ChartResult<()> {
        let candidate = slots.as_deref().unwrap_or(&self.slots);
        let computed = compute_axis_layout(
            orientation,
            self.alignment,
            self.tuning,
            width,
            height,
            candidate,
        )
        .inspect_err(|err| {
            warn!(
                width,
                height,
                slot_count = candidate.len(),
                error = %err,
                "axis layout rejected; keeping previous state"
            );
        })?;

        self.orientation = orientation;
        self.width = width;
        self.height = height;
        if let Some(slots) = slots {
            self.slots = slots;
        }

        let Some(layout) = computed else {
            trace!(
                width,
                height,
                slot_count = self.slots.len(),
                "skipping axis layout"
            );
            return Ok(());
        };

        debug!(
            orientation = ?layout.orientation,
            alignment = %self.alignment,
            slot_count = layout.positions.len(),
            slot_size = layout.major_slot_size(),
            separation = layout.separation,
            start = layout.start,
            "axis layout computed"
        );
        self.layout = Some(layout);
        Ok(())
    }
}
