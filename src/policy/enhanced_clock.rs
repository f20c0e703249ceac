//! Enhanced clock (NRU-based second chance) replacement policy.
//!
//! Each slot carries a reference bit and a modified (dirty) bit. Victim
//! selection prefers slots that are neither referenced nor modified,
//! falling back to any unreferenced slot once a full rotation has cleared
//! the reference bits.

use crate::common::PageId;
use crate::policy::{AccessOutcome, Reference, ReplacementPolicy};

/// One frame slot: occupant plus (reference, modified) bits.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    page: Option<PageId>,
    referenced: bool,
    modified: bool,
}

/// Enhanced clock over bit-tagged slots and a circular hand.
pub struct EnhancedClock {
    slots: Vec<Slot>,
    hand: usize,
}

impl EnhancedClock {
    /// Create an enhanced clock policy with `nframe` empty frames.
    ///
    /// # Panics
    /// Panics if `nframe` is 0.
    pub fn new(nframe: usize) -> Self {
        assert!(nframe > 0, "nframe must be > 0");
        Self {
            slots: vec![Slot::default(); nframe],
            hand: 0,
        }
    }

    /// Select the victim slot, leaving the hand on it.
    ///
    /// Pass 1 looks for an (unreferenced, unmodified) slot over one full
    /// rotation, clearing the reference bit of every slot it passes. Pass
    /// 2 accepts any unreferenced slot; because pass 1 cleared every bit
    /// it visited, pass 2 matches within one more rotation, and the
    /// final fallback to the starting slot is never reached in practice.
    fn select_victim(&mut self) -> usize {
        let nframe = self.slots.len();

        for _ in 0..nframe {
            let slot = &mut self.slots[self.hand];
            if !slot.referenced && !slot.modified {
                return self.hand;
            }
            slot.referenced = false;
            self.hand = (self.hand + 1) % nframe;
        }

        for _ in 0..nframe {
            if !self.slots[self.hand].referenced {
                return self.hand;
            }
            self.hand = (self.hand + 1) % nframe;
        }

        self.hand
    }
}

impl ReplacementPolicy for EnhancedClock {
    fn name(&self) -> &'static str {
        "EnhancedClock"
    }

    fn process(&mut self, reference: Reference) -> AccessOutcome {
        let page = reference.page;

        if let Some(slot) = self.slots.iter_mut().find(|s| s.page == Some(page)) {
            slot.referenced = true;
            slot.modified |= reference.modified;
            return AccessOutcome::Hit;
        }

        let index = self.select_victim();
        let slot = &mut self.slots[index];
        let victim = slot.page.replace(page);
        slot.referenced = true;
        slot.modified = reference.modified;
        self.hand = (index + 1) % self.slots.len();

        AccessOutcome::Fault { victim }
    }

    fn reset(&mut self) {
        self.slots.fill(Slot::default());
        self.hand = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: &mut EnhancedClock, refs: &[(u32, bool)]) -> Vec<AccessOutcome> {
        refs.iter()
            .map(|&(p, modified)| {
                let page = PageId::new(p);
                let r = if modified {
                    Reference::write(page)
                } else {
                    Reference::read(page)
                };
                policy.process(r)
            })
            .collect()
    }

    fn victims(outcomes: &[AccessOutcome]) -> Vec<u32> {
        outcomes
            .iter()
            .filter_map(|o| match o {
                AccessOutcome::Fault { victim: Some(v) } => Some(v.0),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_eclock_empty_slots_absorb_compulsory_faults() {
        // Empty slots are (unreferenced, unmodified), so pass 1 finds
        // them immediately without a full rotation.
        let mut eclock = EnhancedClock::new(2);
        let outcomes = run(&mut eclock, &[(1, true), (2, false)]);

        assert_eq!(
            outcomes,
            [
                AccessOutcome::Fault { victim: None },
                AccessOutcome::Fault { victim: None },
            ]
        );
        assert_eq!(eclock.slots[0].page, Some(PageId::new(1)));
        assert!(eclock.slots[0].modified);
        assert!(!eclock.slots[1].modified);
    }

    #[test]
    fn test_eclock_pass_one_prefers_clean_unreferenced() {
        // After the first eviction cleared reference bits, slot 2 holds a
        // dirty page and slot 3 a clean one; the scan for page 5 must
        // skip the dirty slot and take the clean one in pass 1.
        let mut eclock = EnhancedClock::new(3);
        let outcomes = run(
            &mut eclock,
            &[
                (1, false),
                (2, false),
                (3, false),
                (4, false),
                (2, true),
                (5, false),
            ],
        );

        assert_eq!(victims(&outcomes), [1, 3]);
    }

    #[test]
    fn test_eclock_pass_two_accepts_modified_victim() {
        // All residents are referenced, so pass 1 completes a rotation
        // clearing bits and pass 2 evicts the slot under the hand even
        // though it is dirty.
        let mut eclock = EnhancedClock::new(2);
        let outcomes = run(&mut eclock, &[(1, true), (2, false), (3, false)]);

        assert_eq!(victims(&outcomes), [1]);
        // The replacement installed page 3 clean where dirty page 1 sat.
        assert_eq!(eclock.slots[0].page, Some(PageId::new(3)));
        assert!(!eclock.slots[0].modified);
    }

    #[test]
    fn test_eclock_hit_ors_modified_bit() {
        let mut eclock = EnhancedClock::new(2);
        run(&mut eclock, &[(1, false)]);
        assert!(!eclock.slots[0].modified);

        // A write hit sets the dirty bit; a later read hit must not
        // clear it.
        run(&mut eclock, &[(1, true), (1, false)]);
        assert!(eclock.slots[0].modified);
        assert!(eclock.slots[0].referenced);
    }

    #[test]
    fn test_eclock_hand_advances_past_installed_slot() {
        let mut eclock = EnhancedClock::new(2);
        run(&mut eclock, &[(1, false)]);
        assert_eq!(eclock.hand, 1);

        run(&mut eclock, &[(2, false)]);
        assert_eq!(eclock.hand, 0);
    }

    #[test]
    fn test_eclock_reset() {
        let mut eclock = EnhancedClock::new(2);
        run(&mut eclock, &[(1, true), (2, true), (3, true)]);

        eclock.reset();

        let outcomes = run(&mut eclock, &[(7, false)]);
        assert_eq!(outcomes, [AccessOutcome::Fault { victim: None }]);
    }
}
