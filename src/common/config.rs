//! Configuration constants for mbtree.

/// Smallest fan-out with well-defined split semantics.
///
/// With fan-out 2 a node holds a single key, so every second insertion into a
/// node splits it. Degenerate, but the median rule still applies
/// (`middle = (2 - 1) / 2 = 0`).
pub const MIN_FAN_OUT: usize = 2;

/// Default fan-out for callers that don't care.
///
/// Four children per node (three keys) is the smallest configuration where
/// the three split cases (left of, at, and right of the median) are all
/// reachable with distinct slot indices.
pub const DEFAULT_FAN_OUT: usize = 4;
