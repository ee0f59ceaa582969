//! Visitation ledger
//!
//! Set membership over coordinates that have already been scheduled. A
//! coordinate enters the ledger when it is admitted to the frontier, before
//! its true nearest seed is known; only the visitation is reserved early,
//! the assignment is resolved when the cell is popped.

use std::collections::HashSet;

use glam::IVec2;

/// Records which coordinates have been scheduled
///
/// Entries are never removed; growth is monotonic and bounded by the canvas
/// cell count.
#[derive(Debug, Clone, Default)]
pub struct VisitLedger {
    seen: HashSet<IVec2>,
}

impl VisitLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a coordinate as scheduled
    ///
    /// Returns `true` if the coordinate was not yet in the ledger. A `false`
    /// return is the duplicate-scheduling case and is expected, not an
    /// error.
    #[inline]
    pub fn mark(&mut self, p: IVec2) -> bool {
        self.seen.insert(p)
    }

    /// Whether a coordinate has already been scheduled
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        self.seen.contains(&p)
    }

    /// Number of scheduled coordinates
    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been scheduled yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
