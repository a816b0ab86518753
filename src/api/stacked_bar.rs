use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisLayoutEngine, LabelSetBuilder, Slot, SlotId, XLabel, YValue, humanize};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisStyle, RenderFrame, Renderer};

use super::{ChartConfig, ChartLayoutCoordinator};

/// One stacked segment: a category label and its contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedBarData {
    pub label: String,
    pub value: i64,
}

impl StackedBarData {
    #[must_use]
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl XLabel for StackedBarData {
    fn x_label(&self) -> &str {
        &self.label
    }
}

impl YValue for StackedBarData {
    fn y_value(&self) -> f64 {
        self.value as f64
    }
}

/// Stacked-bar chart: category slots on X, humanized value ticks on Y.
///
/// Segments whose labels collate equal share one stack. Drawing the bars in
/// the plot area is left to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarChart {
    coordinator: ChartLayoutCoordinator,
    label_builder: LabelSetBuilder,
    data: Vec<StackedBarData>,
    stack_totals: IndexMap<String, i64>,
    y_tick_step: i64,
}

impl StackedBarChart {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let tuning = config.axis_tuning();
        let x_axis =
            AxisLayoutEngine::horizontal(tuning)?.with_alignment(config.x_axis_alignment());
        let y_axis = AxisLayoutEngine::vertical(tuning)?.with_alignment(config.y_axis_alignment());

        let mut coordinator = ChartLayoutCoordinator::new(config)?;
        coordinator.configure(Some(x_axis), Some(y_axis))?;

        Ok(Self {
            coordinator,
            label_builder: LabelSetBuilder::new(),
            data: Vec::new(),
            stack_totals: IndexMap::new(),
            y_tick_step: 0,
        })
    }

    #[must_use]
    pub fn with_label_builder(mut self, label_builder: LabelSetBuilder) -> Self {
        self.label_builder = label_builder;
        self
    }

    /// Replaces the data set and rebuilds both axes' slots.
    ///
    /// On error the chart keeps its previous data and slots.
    pub fn set_data(&mut self, data: Vec<StackedBarData>) -> ChartResult<()> {
        let x_slots = self.label_builder.build(&data);
        let collator = self.label_builder.collator();

        let mut sums = HashMap::with_capacity(x_slots.len());
        for segment in &data {
            let total = sums.entry(collator.key(&segment.label)).or_insert(0i64);
            *total = total.checked_add(segment.value).ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "stack total for `{}` overflows i64",
                    segment.label
                ))
            })?;
        }
        let stack_totals: IndexMap<String, i64> = x_slots
            .iter()
            .filter_map(|slot| slot.label.clone())
            .map(|label| {
                let total = sums.get(&collator.key(&label)).copied().unwrap_or(0);
                (label, total)
            })
            .collect();

        let max_total = stack_totals.values().copied().max().unwrap_or(0).max(0);
        let tick_count = self.coordinator.config().y_tick_count;
        let y_tick_step = value_tick_step(max_total, tick_count);
        let y_slots = value_tick_slots(y_tick_step, tick_count)?;

        let mut coordinator = self.coordinator.clone();
        coordinator.set_x_slots(&x_slots)?;
        coordinator.set_y_slots(&y_slots)?;

        debug!(
            segment_count = data.len(),
            stack_count = stack_totals.len(),
            max_total,
            y_tick_step,
            "stacked bar data set"
        );
        self.coordinator = coordinator;
        self.data = data;
        self.stack_totals = stack_totals;
        self.y_tick_step = y_tick_step;
        Ok(())
    }

    pub fn on_size_changed(&mut self, width: u32, height: u32) -> ChartResult<bool> {
        self.coordinator.on_size_changed(width, height)
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.coordinator.set_debug(debug);
    }

    #[must_use]
    pub fn data(&self) -> &[StackedBarData] {
        &self.data
    }

    /// Per-category totals in X slot order.
    #[must_use]
    pub fn stack_totals(&self) -> &IndexMap<String, i64> {
        &self.stack_totals
    }

    /// Value distance between adjacent Y ticks; zero before any data.
    #[must_use]
    pub fn y_tick_step(&self) -> i64 {
        self.y_tick_step
    }

    #[must_use]
    pub fn coordinator(&self) -> &ChartLayoutCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut ChartLayoutCoordinator {
        &mut self.coordinator
    }

    pub fn build_render_frame(&self, style: &AxisStyle) -> ChartResult<RenderFrame> {
        self.coordinator.build_render_frame(style)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R, style: &AxisStyle) -> ChartResult<()> {
        self.coordinator.render(renderer, style)
    }
}

/// `ceil(max_total / tick_count)`, at least 1. `max_total` is non-negative.
fn value_tick_step(max_total: i64, tick_count: u32) -> i64 {
    let count = i64::from(tick_count.max(1));
    let step = max_total / count + i64::from(max_total % count != 0);
    step.max(1)
}

/// Ticks `step, 2*step, ..., count*step` in ascending value order.
///
/// Ids come from the raw value so humanized labels that collapse to the same
/// text never collide.
fn value_tick_slots(step: i64, tick_count: u32) -> ChartResult<Vec<Slot>> {
    (1..=i64::from(tick_count))
        .map(|index| {
            let value = step.checked_mul(index).ok_or_else(|| {
                ChartError::InvalidData(format!("value tick {index} x {step} overflows i64"))
            })?;
            Ok(Slot {
                id: SlotId::from_label(&value.to_string()),
                label: Some(humanize(value)),
                has_minor_tick: false,
                has_major_tick: true,
            })
        })
        .collect()
}
