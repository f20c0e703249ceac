//! Default simulation parameters.
//!
//! These match the classic classroom setup: a small frame table, a short
//! reference string drawn from a narrow page range, repeated over a few
//! trials so the policies can be compared on identical input.

/// Default number of frames in each policy's frame table.
pub const DEFAULT_FRAME_COUNT: usize = 6;

/// Default length of a generated reference sequence.
pub const DEFAULT_SEQUENCE_LEN: usize = 30;

/// Default upper bound (inclusive) for generated page identifiers.
///
/// Pages are drawn uniformly from `1..=DEFAULT_MAX_PAGE`. Keeping the
/// range small relative to the sequence length guarantees repeated
/// references, so hits and real evictions both occur.
pub const DEFAULT_MAX_PAGE: u32 = 10;

/// Default number of independent trials in a comparison run.
pub const DEFAULT_TRIALS: usize = 5;
