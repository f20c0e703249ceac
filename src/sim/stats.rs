//! Per-run statistics tracking.

use std::fmt;

use tracing::{debug, trace};

use crate::common::PageId;

/// Accumulates access and fault counts for one policy run.
///
/// The recorder is reused rather than reallocated: [`RunStats::report`]
/// snapshots the accumulated numbers and clears them, establishing the
/// initial state for the next run.
///
/// # Example
/// ```
/// use pagesim::{PageId, RunStats};
///
/// let mut stats = RunStats::new();
/// stats.access(PageId::new(1));
/// stats.fault(None);
///
/// let report = stats.report();
/// assert_eq!(report.accesses, 1);
/// assert_eq!(report.faults, 1);
/// assert!(report.evictions.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RunStats {
    /// Number of references processed.
    accesses: u64,

    /// Number of references that faulted.
    faults: u64,

    /// Page named by the most recent `access` call.
    current: Option<PageId>,

    /// Real evictions in order; compulsory faults append nothing.
    evictions: Vec<PageId>,
}

impl RunStats {
    /// Create a recorder with all accumulators at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reference to `page`.
    pub fn access(&mut self, page: PageId) {
        self.accesses += 1;
        self.current = Some(page);
        trace!(%page, "access");
    }

    /// Record a fault, with the displaced page if the fault evicted one.
    ///
    /// A `None` victim is a compulsory fault that filled an empty frame;
    /// it counts as a fault but records no eviction.
    pub fn fault(&mut self, victim: Option<PageId>) {
        self.faults += 1;
        debug!(victim = ?victim, page = ?self.current, "page fault");
        if let Some(victim) = victim {
            self.evictions.push(victim);
        }
    }

    /// Accesses recorded so far.
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Faults recorded so far.
    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Snapshot the accumulated statistics and reset for the next run.
    pub fn report(&mut self) -> RunReport {
        let report = RunReport {
            accesses: self.accesses,
            faults: self.faults,
            evictions: std::mem::take(&mut self.evictions),
        };

        self.accesses = 0;
        self.faults = 0;
        self.current = None;

        report
    }
}

/// The outcome of one completed policy run.
///
/// Unlike [`RunStats`], this is a plain value that can be printed,
/// compared, and kept after the recorder has been reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Total references processed.
    pub accesses: u64,

    /// References that faulted.
    pub faults: u64,

    /// Pages evicted, in eviction order.
    pub evictions: Vec<PageId>,
}

impl RunReport {
    /// References that hit.
    pub fn hits(&self) -> u64 {
        self.accesses - self.faults
    }

    /// Fault rate as a percentage, or `None` for an empty run.
    pub fn fault_rate(&self) -> Option<f64> {
        if self.accesses == 0 {
            None
        } else {
            Some(100.0 * self.faults as f64 / self.accesses as f64)
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report {{ faults: {}/{}", self.faults, self.accesses)?;
        if let Some(rate) = self.fault_rate() {
            write!(f, " ({rate:.1}%)")?;
        }
        write!(f, ", evicted:")?;
        for page in &self.evictions {
            write!(f, " {}", page.0)?;
        }
        write!(f, " }}")
    }
}
