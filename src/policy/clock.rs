//! Clock (second-chance) replacement policy.
//!
//! This engine reproduces a known quirk faithfully: the victim scan
//! toggles the reference bit of each visited slot and evicts when the bit
//! toggles *off*. A previously-referenced slot therefore gets evicted
//! (after its bit is cleared) while a previously-unreferenced slot is
//! skipped (after its bit is set) - the inverse of the textbook rule,
//! which gives referenced pages the second chance. The behavior is
//! deliberate and pinned by tests; see [`EnhancedClock`] for the
//! conventional treatment of reference bits.
//!
//! [`EnhancedClock`]: crate::policy::EnhancedClock

use crate::common::PageId;
use crate::policy::{AccessOutcome, Reference, ReplacementPolicy};

/// One frame slot scanned by the clock hand.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    page: Option<PageId>,
    referenced: bool,
}

/// Clock policy over bit-tagged slots and a circular hand.
pub struct Clock {
    slots: Vec<Slot>,
    hand: usize,
}

impl Clock {
    /// Create a Clock policy with `nframe` empty frames.
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

    /// Evict the slot under the hand and install `page` in its place,
    /// reference bit set, hand advanced past it.
    fn install(&mut self, page: PageId) -> AccessOutcome {
        let slot = &mut self.slots[self.hand];
        let victim = slot.page.replace(page);
        slot.referenced = true;
        self.hand = (self.hand + 1) % self.slots.len();

        AccessOutcome::Fault { victim }
    }
}

impl ReplacementPolicy for Clock {
    fn name(&self) -> &'static str {
        "Clock"
    }

    fn process(&mut self, reference: Reference) -> AccessOutcome {
        let page = reference.page;

        if let Some(slot) = self.slots.iter_mut().find(|s| s.page == Some(page)) {
            slot.referenced = true;
            return AccessOutcome::Hit;
        }

        // Toggle-then-branch scan: flip the bit at the hand; a bit that
        // toggled on spares the slot, a bit that toggled off selects it.
        let nframe = self.slots.len();
        for _ in 0..nframe {
            let slot = &mut self.slots[self.hand];
            slot.referenced = !slot.referenced;
            if !slot.referenced {
                return self.install(page);
            }
            self.hand = (self.hand + 1) % nframe;
        }

        // A full rotation toggled every bit from clear to set, so the
        // next visit toggles the slot under the hand back off.
        self.slots[self.hand].referenced = false;
        self.install(page)
    }

    fn reset(&mut self) {
        self.slots.fill(Slot::default());
        self.hand = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: &mut Clock, pages: &[u32]) -> Vec<AccessOutcome> {
        pages
            .iter()
            .map(|&p| policy.process(Reference::read(PageId::new(p))))
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
    fn test_clock_hit_sets_bit_without_moving_hand() {
        let mut clock = Clock::new(2);
        run(&mut clock, &[1, 2]);

        let hand_before = clock.hand;
        assert_eq!(
            clock.process(Reference::read(PageId::new(1))),
            AccessOutcome::Hit
        );
        assert_eq!(clock.hand, hand_before);
    }

    #[test]
    fn test_clock_toggle_rule_evicts_referenced_slot() {
        // The documented inversion: after [1, 2, 1] both frames are full
        // and page 1's bit is set, so the scan for page 3 toggles 1's bit
        // off and evicts it. Textbook second chance would spare 1 and
        // evict 2 instead.
        let mut clock = Clock::new(2);
        let outcomes = run(&mut clock, &[1, 2, 1, 3]);

        let faults = outcomes.iter().filter(|o| o.is_fault()).count();
        assert_eq!(faults, 3);
        assert_eq!(victims(&outcomes), [1]);
    }

    #[test]
    fn test_clock_compulsory_fill_takes_extra_rotation() {
        // On an all-clear table the first scan sets every bit before the
        // wrap-around visit toggles slot 0 back off. Both initial faults
        // are compulsory.
        let mut clock = Clock::new(2);
        let outcomes = run(&mut clock, &[1, 2]);

        assert_eq!(
            outcomes,
            [
                AccessOutcome::Fault { victim: None },
                AccessOutcome::Fault { victim: None },
            ]
        );
        assert_eq!(clock.slots[0].page, Some(PageId::new(1)));
        assert_eq!(clock.slots[1].page, Some(PageId::new(2)));
    }

    #[test]
    fn test_clock_scan_is_bounded() {
        // Degenerate single-frame table: every distinct reference evicts
        // the sole occupant within the bounded scan.
        let mut clock = Clock::new(1);
        let outcomes = run(&mut clock, &[1, 2, 3]);
        assert_eq!(victims(&outcomes), [1, 2]);
    }

    #[test]
    fn test_clock_reset() {
        let mut clock = Clock::new(2);
        run(&mut clock, &[1, 2, 3]);

        clock.reset();

        assert_eq!(
            clock.process(Reference::read(PageId::new(9))),
            AccessOutcome::Fault { victim: None }
        );
    }
}
