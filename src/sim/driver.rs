//! Simulation driver.
//!
//! The [`Simulator`] owns one reference sequence and one statistics
//! recorder, and replays the sequence through any number of policies in
//! turn. Each policy gets a fresh frame table (via `reset`) and the
//! recorder is reset by its own `report`, so runs never observe each
//! other's state.

use tracing::debug;

use crate::common::{Error, Result};
use crate::policy::{standard_policies, AccessOutcome, Reference, ReplacementPolicy};
use crate::sim::stats::{RunReport, RunStats};

/// One policy's result within a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRun {
    /// Policy name, as reported by [`ReplacementPolicy::name`].
    pub policy: &'static str,

    /// The completed run's statistics.
    pub report: RunReport,
}

/// Replays a reference sequence through replacement policies.
///
/// Configuration is exactly the frame capacity and the sequence; both are
/// validated up front so a run can never fail midway.
pub struct Simulator {
    nframe: usize,
    references: Vec<Reference>,
    stats: RunStats,
}

impl Simulator {
    /// Create a simulator for `nframe` frames over `references`.
    ///
    /// # Errors
    /// - [`Error::InvalidFrameCount`] if `nframe` is 0
    /// - [`Error::EmptySequence`] if `references` is empty
    pub fn new(nframe: usize, references: Vec<Reference>) -> Result<Self> {
        if nframe == 0 {
            return Err(Error::InvalidFrameCount(nframe));
        }
        if references.is_empty() {
            return Err(Error::EmptySequence);
        }

        Ok(Self {
            nframe,
            references,
            stats: RunStats::new(),
        })
    }

    /// Frame capacity used for the standard policies.
    pub fn nframe(&self) -> usize {
        self.nframe
    }

    /// The reference sequence replayed by every run.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Run one policy over the full sequence and report.
    ///
    /// The policy is reset first, so a previously used engine starts from
    /// an empty frame table.
    pub fn run(&mut self, policy: &mut dyn ReplacementPolicy) -> RunReport {
        policy.reset();
        debug!(
            policy = policy.name(),
            nframe = self.nframe,
            references = self.references.len(),
            "starting run"
        );

        for &reference in &self.references {
            self.stats.access(reference.page);
            match policy.process(reference) {
                AccessOutcome::Hit => {}
                AccessOutcome::Fault { victim } => self.stats.fault(victim),
            }
        }

        let report = self.stats.report();
        debug!(policy = policy.name(), faults = report.faults, "run complete");
        report
    }

    /// Run all five standard policies over the same sequence.
    pub fn run_all(&mut self) -> Vec<PolicyRun> {
        standard_policies(self.nframe)
            .into_iter()
            .map(|mut policy| PolicyRun {
                policy: policy.name(),
                report: self.run(policy.as_mut()),
            })
            .collect()
    }
}
