use std::fmt;

use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Identifier of one slot, unique within a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(u64);

impl SlotId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Derives a run-independent id from label text.
    ///
    /// 64-bit FNV-1a over the UTF-8 bytes, so identical text always maps to
    /// the same id regardless of process or platform.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let hash = label.bytes().fold(FNV_OFFSET_BASIS, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
        Self(hash)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input descriptor for one position along an axis.
///
/// A slot reserves layout space whether or not it carries a label. The tick
/// flags are rendering hints only; layout never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub label: Option<String>,
    pub has_minor_tick: bool,
    pub has_major_tick: bool,
}

impl Slot {
    /// Unlabeled slot without ticks.
    #[must_use]
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            label: None,
            has_minor_tick: false,
            has_major_tick: false,
        }
    }

    /// Labeled slot whose id is derived from the label text.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: SlotId::from_label(&label),
            label: Some(label),
            has_minor_tick: false,
            has_major_tick: false,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, has_minor_tick: bool, has_major_tick: bool) -> Self {
        self.has_minor_tick = has_minor_tick;
        self.has_major_tick = has_major_tick;
        self
    }
}

/// Top-left corner of a laid out slot in axis-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotPosition {
    pub x: f64,
    pub y: f64,
}

impl SlotPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
