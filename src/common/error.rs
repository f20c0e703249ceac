//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors surfaced before a simulation run starts.
///
/// The simulation itself has no error outcomes: every reference is
/// classified as a hit or a fault, and a page fault is an expected
/// simulated event rather than a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The frame table must hold at least one frame.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// A run over zero references would report nothing meaningful.
    #[error("reference sequence is empty")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFrameCount(0);
        assert_eq!(format!("{}", err), "frame count must be at least 1, got 0");

        let err = Error::EmptySequence;
        assert_eq!(format!("{}", err), "reference sequence is empty");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
