//! LFU (Least Frequently Used) replacement policy.

use std::collections::{BTreeSet, HashMap};

use crate::common::PageId;
use crate::policy::{AccessOutcome, Reference, ReplacementPolicy};

/// LFU with insertion-order tie-breaking among equal frequencies.
///
/// Resident pages live in an ordered set keyed by
/// `(frequency, arrival, page)`, so the minimum entry is the lowest
/// frequency, earliest arrival. `arrival` is a monotone stamp assigned
/// each time an entry is (re)inserted, which is what makes ties resolve
/// by arrival order rather than by page number.
///
/// Frequencies are kept for every page seen during the run, not just
/// resident ones: a page that is evicted and referenced again resumes
/// its old count.
pub struct Lfu {
    /// Frame capacity.
    nframe: usize,

    /// Access count for every page seen this run.
    counts: HashMap<PageId, u64>,

    /// Resident page -> its `(frequency, arrival)` key in `ordered`.
    resident: HashMap<PageId, (u64, u64)>,

    /// Resident entries ordered by (frequency, arrival, page).
    ordered: BTreeSet<(u64, u64, PageId)>,

    /// Monotone arrival stamp.
    tick: u64,
}

impl Lfu {
    /// Create an LFU policy with `nframe` empty frames.
    ///
    /// # Panics
    /// Panics if `nframe` is 0.
    pub fn new(nframe: usize) -> Self {
        assert!(nframe > 0, "nframe must be > 0");
        Self {
            nframe,
            counts: HashMap::new(),
            resident: HashMap::new(),
            ordered: BTreeSet::new(),
            tick: 0,
        }
    }
}

impl ReplacementPolicy for Lfu {
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn process(&mut self, reference: Reference) -> AccessOutcome {
        let page = reference.page;

        let outcome = if let Some(&(count, arrival)) = self.resident.get(&page) {
            // Hit: drop the stale entry; it is re-inserted below with the
            // bumped count and a fresh arrival stamp.
            self.ordered.remove(&(count, arrival, page));
            AccessOutcome::Hit
        } else if self.resident.len() < self.nframe {
            AccessOutcome::Fault { victim: None }
        } else {
            let victim = self.ordered.pop_first().map(|(_, _, evicted)| {
                self.resident.remove(&evicted);
                evicted
            });
            AccessOutcome::Fault { victim }
        };

        let count = self.counts.entry(page).or_insert(0);
        *count += 1;
        let count = *count;

        self.tick += 1;
        self.ordered.insert((count, self.tick, page));
        self.resident.insert(page, (count, self.tick));

        outcome
    }

    fn reset(&mut self) {
        self.counts.clear();
        self.resident.clear();
        self.ordered.clear();
        self.tick = 0;
    }
}
