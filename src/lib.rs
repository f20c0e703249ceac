//! pagesim - a virtual-memory page-replacement simulator.
//!
//! Given a sequence of page references and a fixed number of frames, the
//! simulator evaluates five classical eviction policies and reports fault
//! counts, fault rates, and eviction order.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Simulator                         │
//! │  ┌───────────────────┐        ┌──────────────────────┐   │
//! │  │ reference stream  │───────▶│    RunStats/Report   │   │
//! │  │ (sim/sequence)    │        │    (sim/stats)       │   │
//! │  └───────────────────┘        └──────────▲───────────┘   │
//! │            │                             │               │
//! │            ▼                             │               │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │      Policy Engines (policy/)  [Swappable]         │  │
//! │  │   FIFO │ LRU │ LFU │ Clock │ EnhancedClock         │  │
//! │  │   each with its own private frame table            │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, defaults)
//! - [`policy`] - The five replacement policy engines
//! - [`sim`] - Driver, statistics, and sequence generation
//!
//! # Quick Start
//! ```
//! use pagesim::policy::Fifo;
//! use pagesim::{PageId, Reference, Simulator};
//!
//! let references: Vec<Reference> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
//!     .into_iter()
//!     .map(|p| Reference::read(PageId::new(p)))
//!     .collect();
//!
//! let mut sim = Simulator::new(3, references).unwrap();
//! let report = sim.run(&mut Fifo::new(3));
//! assert_eq!(report.faults, 9);
//! ```

pub mod common;
pub mod policy;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};
pub use policy::{AccessOutcome, Reference, ReplacementPolicy};
pub use sim::{generate_references, PolicyRun, RunReport, RunStats, Simulator};
