//! Error types for mbtree.

use crate::common::config::MIN_FAN_OUT;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in mbtree.
///
/// The tree itself is an in-memory structure with no external failure modes:
/// once constructed, insertion and lookup cannot fail for well-typed keys.
/// Only construction validates anything. Internal precondition violations
/// (out-of-range slot indices, reading an absent pivot) are logic bugs and
/// panic instead of surfacing here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The requested fan-out is too small to form a valid B-tree node.
    ///
    /// A node needs at least one key slot, so the fan-out (maximum number of
    /// children) must be at least [`MIN_FAN_OUT`].
    #[error("fan-out {0} is invalid; must be at least {MIN_FAN_OUT}")]
    InvalidFanOut(usize),
}
