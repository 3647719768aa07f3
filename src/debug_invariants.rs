//! Structural self-checks for mergeable graphs.
//!
//! Contraction rewires incidence lists in place, so a graph that was
//! consistent before a merge may not be after a buggy one. Implementors
//! report the first broken invariant; callers decide whether to panic
//! ([`debug_invariants!`]) or log ([`DebugInvariants::warn_on_violation`]).

use crate::merge_error::MergeGraphError;

/// Trait for validating graph invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MergeGraphError>;

    /// Panic on the first violation when invariant checking is enabled
    /// (debug builds, or the `check-invariants` / `strict-invariants` features).
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "merge graph");
    }

    /// Log the first violation at `warn` level instead of panicking.
    ///
    /// Returns `true` when the structure is consistent.
    fn warn_on_violation(&self) -> bool {
        match self.validate_invariants() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("merge graph invariant violated: {e}");
                false
            }
        }
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
