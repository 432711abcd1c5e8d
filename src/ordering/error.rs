use thiserror::Error;

/// Why no key could be produced at the requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// The neighbours are adjacent in the key space.
    Precision,
    /// Stepping a gap past the head or tail leaves the representable range.
    Overflow,
    /// The neighbours are equal or out of order.
    Unordered,
}

/// Control signal: the group must be renumbered before this placement can
/// succeed. Never a user-facing failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no order key fits at index {index} ({reason:?}); the group must be renumbered")]
pub struct RenumberRequired {
    pub index: usize,
    pub reason: Exhaustion,
}

/// Renumbering `count` items with the given gap would not yield strictly
/// increasing keys.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot space {count} order keys apart with the configured gap")]
pub struct KeySpaceExhausted {
    pub count: usize,
}
