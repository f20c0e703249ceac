//! FIFO (First-In-First-Out) replacement policy.
//!
//! The oldest resident page is always the next victim, regardless of how
//! recently it was re-accessed.

use crate::common::PageId;
use crate::policy::{AccessOutcome, Reference, ReplacementPolicy};

/// FIFO over a fixed slot array with a circular write cursor.
///
/// The cursor always points at the oldest slot: faults overwrite it and
/// advance, so eviction order is strictly insertion order. Hits never
/// touch the cursor.
pub struct Fifo {
    /// Frame slots in position order; `None` until first filled.
    slots: Vec<Option<PageId>>,

    /// Next slot to overwrite on a fault.
    cursor: usize,
}

impl Fifo {
    /// Create a FIFO policy with `nframe` empty frames.
    ///
    /// # Panics
    /// Panics if `nframe` is 0.
    pub fn new(nframe: usize) -> Self {
        assert!(nframe > 0, "nframe must be > 0");
        Self {
            slots: vec![None; nframe],
            cursor: 0,
        }
    }
}

impl ReplacementPolicy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn process(&mut self, reference: Reference) -> AccessOutcome {
        let page = reference.page;

        if self.slots.contains(&Some(page)) {
            return AccessOutcome::Hit;
        }

        let victim = self.slots[self.cursor].replace(page);
        self.cursor = (self.cursor + 1) % self.slots.len();

        AccessOutcome::Fault { victim }
    }

    fn reset(&mut self) {
        self.slots.fill(None);
        self.cursor = 0;
    }
}
