//! Common bound aliases used across the graph and iteration code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds implements them automatically. They only shorten `where` clauses.

/// Canonical bound set for node and edge identifiers.
///
/// - `Copy` so cursors can hand ids out by value
/// - `Ord` for the canonical-direction rule (`other < own`)
/// - `Eq + Hash` for id-keyed storage
/// - `Debug + Display` for diagnostics and [`MergeGraphError`](crate::merge_error::MergeGraphError)
pub trait IdLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug + std::fmt::Display {}
impl<T> IdLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug + std::fmt::Display {}
