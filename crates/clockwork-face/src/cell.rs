use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::sample::TimeSample;

/// Set on every stored word so an empty cell (0) is distinguishable from midnight.
const PRESENT: u32 = 1 << 24;

/// Single-slot cell holding the latest [`TimeSample`].
///
/// Clones share the slot. Each store replaces the whole sample in one atomic
/// write, so readers never observe a mix of two samples. No history is kept.
#[derive(Debug, Clone, Default)]
pub struct SampleCell {
    slot: Arc<AtomicU32>,
}

impl SampleCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, sample: TimeSample) {
        self.slot.store(pack(sample), Ordering::Release);
    }

    /// Latest stored sample, or `None` before the first store.
    pub fn load(&self) -> Option<TimeSample> {
        unpack(self.slot.load(Ordering::Acquire))
    }
}

fn pack(s: TimeSample) -> u32 {
    PRESENT | (s.hour as u32) << 16 | (s.minute as u32) << 8 | s.second as u32
}

fn unpack(word: u32) -> Option<TimeSample> {
    if word & PRESENT == 0 {
        return None;
    }
    Some(TimeSample::new((word >> 16) as u8, (word >> 8) as u8, word as u8))
}
