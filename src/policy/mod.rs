//! Eviction policy implementations.
//!
//! Each policy is an independent state machine over a fixed-capacity frame
//! table, consuming one [`Reference`] at a time and classifying it as a hit
//! or a fault. There is no shared frame structure: every engine owns the
//! representation that suits its bookkeeping (circular slot array,
//! stamp-ordered queue, frequency-ordered set, bit-tagged slots).
//!
//! # Policies
//! - [`Fifo`] - First-In-First-Out
//! - [`Lru`] - Least Recently Used
//! - [`Lfu`] - Least Frequently Used
//! - [`Clock`] - second chance with a toggled reference bit
//! - [`EnhancedClock`] - two-pass scan over (reference, modified) bits

mod clock;
mod enhanced_clock;
mod fifo;
mod lfu;
mod lru;

pub use clock::Clock;
pub use enhanced_clock::EnhancedClock;
pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lru::Lru;

use crate::common::PageId;

/// One element of the input reference sequence.
///
/// The `modified` flag marks an access that writes the page. Only
/// [`EnhancedClock`] inspects it; every other policy ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// The page being accessed.
    pub page: PageId,

    /// Whether this access writes the page.
    pub modified: bool,
}

impl Reference {
    /// A read access to `page`.
    #[inline]
    pub fn read(page: PageId) -> Self {
        Self {
            page,
            modified: false,
        }
    }

    /// A write access to `page`.
    #[inline]
    pub fn write(page: PageId) -> Self {
        Self {
            page,
            modified: true,
        }
    }
}

/// How a policy classified one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident; no frame changed hands.
    Hit,

    /// The page was not resident and had to be installed.
    ///
    /// `victim` names the page that was displaced, or `None` for a
    /// compulsory fault that filled a still-empty frame.
    Fault { victim: Option<PageId> },
}

impl AccessOutcome {
    /// Whether this outcome is a fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }
}

/// Common capability shared by all five policy engines.
///
/// A policy processes references one at a time against its private frame
/// table and can be reset to its initial state for reuse across runs.
pub trait ReplacementPolicy {
    /// Human-readable policy name for reports and logs.
    fn name(&self) -> &'static str;

    /// Classify one reference, mutating the frame table on a fault.
    fn process(&mut self, reference: Reference) -> AccessOutcome;

    /// Restore the initial empty state, keeping the frame capacity.
    fn reset(&mut self);
}

/// All five standard policies at the given frame capacity, in the
/// conventional comparison order.
pub fn standard_policies(nframe: usize) -> Vec<Box<dyn ReplacementPolicy>> {
    vec![
        Box::new(Fifo::new(nframe)),
        Box::new(Lru::new(nframe)),
        Box::new(Lfu::new(nframe)),
        Box::new(Clock::new(nframe)),
        Box::new(EnhancedClock::new(nframe)),
    ]
}
