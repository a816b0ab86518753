use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::collation::{CollationKey, LabelCollator};
use crate::core::slot::{Slot, SlotId};

/// Data that contributes a category label to the X axis.
pub trait XLabel {
    fn x_label(&self) -> &str;
}

/// Data that contributes a numeric value to the Y axis.
pub trait YValue {
    fn y_value(&self) -> f64;
}

impl XLabel for str {
    fn x_label(&self) -> &str {
        self
    }
}

impl XLabel for String {
    fn x_label(&self) -> &str {
        self
    }
}

impl<T: XLabel + ?Sized> XLabel for &T {
    fn x_label(&self) -> &str {
        (**self).x_label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Derives one labeled slot per distinct label from a data set.
///
/// Labels are deduplicated and sorted by the configured collator; the first
/// occurrence of a collation-equal group supplies the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelSetBuilder {
    order: SortOrder,
    collator: LabelCollator,
}

impl LabelSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_collator(mut self, collator: LabelCollator) -> Self {
        self.collator = collator;
        self
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    #[must_use]
    pub fn collator(&self) -> LabelCollator {
        self.collator
    }

    /// Distinct labels in output order.
    #[must_use]
    pub fn labels<T: XLabel>(&self, values: &[T]) -> Vec<String> {
        let unique = self.unique_labels(values);
        let labels = unique.into_values().map(str::to_owned);
        match self.order {
            SortOrder::Ascending => labels.collect(),
            SortOrder::Descending => labels.rev().collect(),
        }
    }

    /// Builds major-tick slots covering every distinct label exactly once.
    #[must_use]
    pub fn build<T: XLabel>(&self, values: &[T]) -> Vec<Slot> {
        if values.is_empty() {
            return Vec::new();
        }

        let slots: Vec<Slot> = self
            .labels(values)
            .into_iter()
            .map(|label| Slot {
                id: SlotId::from_label(&label),
                label: Some(label),
                has_minor_tick: false,
                has_major_tick: true,
            })
            .collect();
        trace!(
            input_count = values.len(),
            slot_count = slots.len(),
            order = ?self.order,
            "built label slots"
        );
        slots
    }

    fn unique_labels<'a, T: XLabel>(&self, values: &'a [T]) -> BTreeMap<CollationKey, &'a str> {
        let mut unique = BTreeMap::new();
        for value in values {
            let label = value.x_label();
            if let Entry::Vacant(entry) = unique.entry(self.collator.key(label)) {
                entry.insert(label);
            }
        }
        unique
    }
}

/// Renders a count compactly: `999`, `1.4k`, `50k`.
///
/// Digits below the hundreds place are truncated, never rounded.
#[must_use]
pub fn humanize(value: i64) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let thousands = value / 1000;
    let hundreds = (value / 100) % 10;
    if hundreds == 0 {
        format!("{thousands}k")
    } else {
        format!("{thousands}.{hundreds}k")
    }
}
