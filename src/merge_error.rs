//! MergeGraphError: Unified error type for merge-graph public APIs
//!
//! Every lookup on a [`MergeGraph`](crate::graph::MergeGraph) has a fallible
//! `try_*` form returning this error and an infallible form that panics with
//! the error's message. Ids are rendered to strings so the error stays
//! independent of the graph's id type.

use thiserror::Error;

/// Unified error type for merge-graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeGraphError {
    /// The node id does not name a live node (never inserted or merged away).
    #[error("node `{0}` is not live in this graph")]
    UnknownNode(String),
    /// The edge id does not name a live edge (never inserted or contracted).
    #[error("edge `{0}` is not live in this graph")]
    UnknownEdge(String),
    /// `other_node_id` was asked about an edge that does not touch the node.
    #[error("edge `{edge}` is not incident to node `{node}`")]
    NotIncident { edge: String, node: String },
    /// Both endpoints of an inserted edge are the same node.
    #[error("edge `{edge}` would be a self loop on node `{node}`")]
    SelfLoop { edge: String, node: String },
    /// The endpoints are already joined by another edge.
    #[error("edge `{edge}` would duplicate edge `{existing}` between the same nodes")]
    ParallelEdge { edge: String, existing: String },
    /// A node with this id already exists.
    #[error("node `{0}` already exists")]
    DuplicateNode(String),
    /// An edge with this id already exists.
    #[error("edge `{0}` already exists")]
    DuplicateEdge(String),
    /// A projection or predicate was applied without a bound graph.
    #[error("graph handle is unbound (default-constructed functor)")]
    UnboundGraph,
    /// A cursor was dereferenced while Invalid or AtEnd.
    #[error("cursor dereferenced while exhausted")]
    ExhaustedCursor,
    /// An edge is owned by zero or several canonical back-sets.
    #[error("edge `{edge}` appears in {count} canonical back-sets (expected 1)")]
    PartitionViolation { edge: String, count: usize },
    /// The two sides of an incidence relation disagree.
    #[error("incidence mismatch: {0}")]
    IncidenceMismatch(String),
}

impl MergeGraphError {
    pub(crate) fn not_incident<E: std::fmt::Display, N: std::fmt::Display>(
        edge: E,
        node: N,
    ) -> Self {
        MergeGraphError::NotIncident {
            edge: edge.to_string(),
            node: node.to_string(),
        }
    }
}
