pub mod axis;
pub mod collation;
pub mod label_set;
pub mod slot;
pub mod types;

pub use axis::{
    Alignment, AxisLayout, AxisLayoutEngine, AxisTuning, Orientation, compute_axis_layout,
};
pub use collation::{CollationKey, CollationStrength, LabelCollator};
pub use label_set::{LabelSetBuilder, SortOrder, XLabel, YValue, humanize};
pub use slot::{Slot, SlotId, SlotPosition};
pub use types::{Rect, Viewport};
