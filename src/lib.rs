#![cfg_attr(docsrs, feature(doc_cfg))]
//! # merge-graph
//!
//! merge-graph provides lazy, allocation-free iteration over the incidence
//! structure of a graph that is being contracted, as in hierarchical region
//! merging or agglomerative clustering. Nodes and edges disappear as merges
//! happen, so adjacency is never cached: every view is recomputed from the
//! graph's live incidence sequence when it is constructed.
//!
//! ## Features
//! - The [`MergeGraph`](graph::MergeGraph) trait: the lookups a contracting graph must expose
//! - Canonical-direction deduplication: each undirected edge belongs to its larger-id endpoint
//! - Composable cursor stages ([`iter::EndAwareIter`], [`iter::FilterIter`], [`iter::TransformIter`])
//!   that report exhaustion even when default-constructed
//! - Four per-node views: back edge ids, back edges, back neighbour ids, back neighbours
//! - A reference [`InMemoryMergeGraph`](graph::InMemoryMergeGraph) with edge contraction
//!   and parallel-edge folding
//!
//! ## Cargo features
//! - `rayon`: parallel graph-wide canonical enumeration
//! - `check-invariants` / `strict-invariants`: validate the in-memory graph after every
//!   contraction in release builds too
//!
//! ## Borrowing
//! Views hold `&G`. Contraction needs `&mut G`, so a graph cannot be merged
//! while any traversal over it is still alive; the compiler enforces it.
//!
//! ## Usage
//! ```rust
//! use merge_graph::prelude::*;
//!
//! let g = InMemoryMergeGraph::<u32, &str>::from_parts(
//!     [(1, "a"), (2, "b"), (3, "c")],
//!     [(10, 1, 2, ()), (20, 2, 3, ()), (30, 1, 3, ())],
//! ).unwrap();
//! let ids: Vec<_> = g.back_neighbor_ids(3).collect();
//! assert_eq!(ids, vec![2, 1]);
//! ```

pub mod debug_invariants;
pub mod graph;
pub mod iter;
pub mod merge_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{
        EdgeRecord, IdLike, InMemoryMergeGraph, MergeGraph, MergeGraphIterExt,
    };
    pub use crate::iter::{
        BackEdgeFilter, Cursor, CursorState, EdgeItem, EndAwareIter, FilterIter, IdFilter,
        IdTransform, NodeItem, OtherNode, OtherNodeId, SmallerThan, TransformIter,
    };
    pub use crate::merge_error::MergeGraphError;
}
