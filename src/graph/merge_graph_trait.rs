//! Core trait for graphs whose nodes and edges are merged over time.
//!
//! This module defines [`MergeGraph`], the read-only surface that the
//! iteration layer in [`crate::iter`] needs from a contracting graph. How the
//! graph merges, recycles ids, or chooses the next pair is up to the
//! implementor; only lookups and the raw incidence sequence are required.

use super::bounds::IdLike;
use crate::merge_error::MergeGraphError;

/// Read access to a graph under agglomerative contraction.
///
/// # Associated Types
/// - `Id`: identifier shared by nodes and edges; totally ordered.
/// - `Edge`: value returned by edge lookup (owned, usually a small record).
/// - `Node`: node payload, returned by reference.
/// - `IncidentEdgeIds`: raw, non-deduplicated incidence sequence of a node.
/// - `NodeIds`: all live node ids.
///
/// # Contract
/// An `IncidentEdgeIds` sequence reflects adjacency at the time it was
/// created and stays valid while `&self` is borrowed. Since every view holds
/// that shared borrow, the graph cannot be contracted mid-traversal.
///
/// The required methods are the fallible `try_*` lookups. The provided
/// infallible forms panic with the error message; they are meant for code
/// whose ids come straight out of this graph's own incidence sequences.
pub trait MergeGraph {
    type Id: IdLike;
    type Edge;
    type Node;

    type IncidentEdgeIds<'a>: Iterator<Item = Self::Id> + Clone
    where
        Self: 'a;
    type NodeIds<'a>: Iterator<Item = Self::Id>
    where
        Self: 'a;

    /// Edge lookup by id.
    fn try_edge_from_id(&self, id: Self::Id) -> Result<Self::Edge, MergeGraphError>;
    /// Node lookup by id.
    fn try_node_from_id(&self, id: Self::Id) -> Result<&Self::Node, MergeGraphError>;
    /// The endpoint of `edge` that is not `node`.
    fn try_other_node_id(
        &self,
        edge: Self::Id,
        node: Self::Id,
    ) -> Result<Self::Id, MergeGraphError>;

    /// Edge ids currently incident to `node`. Unknown nodes yield an empty sequence.
    fn incident_edge_ids(&self, node: Self::Id) -> Self::IncidentEdgeIds<'_>;
    /// All live node ids.
    fn node_ids(&self) -> Self::NodeIds<'_>;

    /// Infallible edge lookup.
    ///
    /// # Panics
    /// Panics if `id` is not a live edge.
    #[inline]
    #[track_caller]
    fn edge_from_id(&self, id: Self::Id) -> Self::Edge {
        match self.try_edge_from_id(id) {
            Ok(e) => e,
            Err(e) => panic!("edge_from_id: {e}"),
        }
    }

    /// Infallible node lookup.
    ///
    /// # Panics
    /// Panics if `id` is not a live node.
    #[inline]
    #[track_caller]
    fn node_from_id(&self, id: Self::Id) -> &Self::Node {
        match self.try_node_from_id(id) {
            Ok(n) => n,
            Err(e) => panic!("node_from_id: {e}"),
        }
    }

    /// Infallible opposite-endpoint lookup.
    ///
    /// # Panics
    /// Panics if `edge` is not live or not incident to `node`.
    #[inline]
    #[track_caller]
    fn other_node_id(&self, edge: Self::Id, node: Self::Id) -> Self::Id {
        match self.try_other_node_id(edge, node) {
            Ok(n) => n,
            Err(e) => panic!("other_node_id: {e}"),
        }
    }

    /// Number of incident edges of `node`, counted by walking its incidence sequence.
    fn degree(&self, node: Self::Id) -> usize {
        self.incident_edge_ids(node).count()
    }
}
