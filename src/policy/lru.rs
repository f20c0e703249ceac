//! LRU (Least Recently Used) replacement policy.

use std::collections::{HashMap, VecDeque};

use crate::common::PageId;
use crate::policy::{AccessOutcome, Reference, ReplacementPolicy};

/// LRU via monotone access stamps and a lazily-pruned queue.
///
/// Every access pushes a fresh `(stamp, page)` entry onto the back of the
/// queue; `stamps` records the live stamp for each resident page. Queue
/// entries whose stamp no longer matches are stale and skipped during
/// eviction, so each reference costs O(1) amortized: an entry is pushed
/// once and popped once.
pub struct Lru {
    /// Frame capacity.
    nframe: usize,

    /// Resident page -> its most recent access stamp.
    stamps: HashMap<PageId, u64>,

    /// Access history, oldest at the front. May contain stale entries.
    queue: VecDeque<(u64, PageId)>,

    /// Monotone access counter.
    tick: u64,
}

impl Lru {
    /// Create an LRU policy with `nframe` empty frames.
    ///
    /// # Panics
    /// Panics if `nframe` is 0.
    pub fn new(nframe: usize) -> Self {
        assert!(nframe > 0, "nframe must be > 0");
        Self {
            nframe,
            stamps: HashMap::new(),
            queue: VecDeque::new(),
            tick: 0,
        }
    }

    /// Pop the least-recently-used resident page, skipping stale entries.
    ///
    /// Returns `None` only if no resident page exists, which callers rule
    /// out by checking residency first.
    fn pop_lru(&mut self) -> Option<PageId> {
        while let Some((stamp, page)) = self.queue.pop_front() {
            if self.stamps.get(&page) == Some(&stamp) {
                self.stamps.remove(&page);
                return Some(page);
            }
            // Stale entry from an earlier access of a restamped or
            // already-evicted page; skip it.
        }
        None
    }
}

impl ReplacementPolicy for Lru {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn process(&mut self, reference: Reference) -> AccessOutcome {
        let page = reference.page;

        self.tick += 1;
        let stamp = self.tick;

        // Hit: restamp the page, leaving its old queue entry stale.
        if let Some(live) = self.stamps.get_mut(&page) {
            *live = stamp;
            self.queue.push_back((stamp, page));
            return AccessOutcome::Hit;
        }

        let victim = if self.stamps.len() >= self.nframe {
            self.pop_lru()
        } else {
            None
        };

        self.stamps.insert(page, stamp);
        self.queue.push_back((stamp, page));

        AccessOutcome::Fault { victim }
    }

    fn reset(&mut self) {
        self.stamps.clear();
        self.queue.clear();
        self.tick = 0;
    }
}
