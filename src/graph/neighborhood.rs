//! Lazy per-node views over a [`MergeGraph`].
//!
//! The four canonical views stack a [`BackEdgeFilter`] under an optional
//! projection. Walking `back_edge_ids(u)` for every node `u` visits each
//! undirected edge exactly once, at its larger-id endpoint:
//!
//! | view | yields |
//! |---|---|
//! | [`back_edge_ids`](MergeGraphIterExt::back_edge_ids) | edge ids |
//! | [`back_edges`](MergeGraphIterExt::back_edges) | edge items |
//! | [`back_neighbor_ids`](MergeGraphIterExt::back_neighbor_ids) | opposite node ids |
//! | [`back_neighbors`](MergeGraphIterExt::back_neighbors) | `&Node` of opposite nodes |
//!
//! None of the views allocate. Each borrows the graph, so contracting it
//! while a view is alive does not compile:
//!
//! ```compile_fail
//! use merge_graph::graph::{InMemoryMergeGraph, MergeGraphIterExt};
//! let mut g = InMemoryMergeGraph::<u32, ()>::from_parts(
//!     [(1, ()), (2, ())],
//!     [(10, 1, 2, ())],
//! ).unwrap();
//! let view = g.back_edge_ids(2);
//! g.contract_edge(10).unwrap();
//! drop(view);
//! ```

use super::merge_graph_trait::MergeGraph;
use crate::iter::{
    BackEdgeFilter, EdgeItem, EndAwareIter, FilterIter, OtherNode, OtherNodeId, SmallerThan,
    TransformIter,
};

/// Every edge id incident to a node.
pub type EdgeIdCursor<'g, G> = EndAwareIter<<G as MergeGraph>::IncidentEdgeIds<'g>>;
/// Canonical (back) edge ids of a node.
pub type BackEdgeIds<'g, G> = FilterIter<BackEdgeFilter<'g, G>, EdgeIdCursor<'g, G>>;
/// Canonical edge items of a node.
pub type BackEdges<'g, G> = TransformIter<EdgeItem<'g, G>, BackEdgeIds<'g, G>>;
/// Canonical neighbour ids of a node.
pub type BackNeighborIds<'g, G> = TransformIter<OtherNodeId<'g, G>, BackEdgeIds<'g, G>>;
/// Canonical neighbour items of a node.
pub type BackNeighbors<'g, G> = TransformIter<OtherNode<'g, G>, BackEdgeIds<'g, G>>;
/// Every neighbour id of a node, one per incident edge.
pub type NeighborIds<'g, G> = TransformIter<OtherNodeId<'g, G>, EdgeIdCursor<'g, G>>;
/// Every neighbour item of a node, one per incident edge.
pub type Neighbors<'g, G> = TransformIter<OtherNode<'g, G>, EdgeIdCursor<'g, G>>;
/// Neighbour ids below the node's own id.
pub type SmallerNeighborIds<'g, G> =
    FilterIter<SmallerThan<<G as MergeGraph>::Id>, NeighborIds<'g, G>>;

/// Incidence views for every [`MergeGraph`].
pub trait MergeGraphIterExt: MergeGraph + Sized {
    /// Raw incidence of `node` behind a validity-tracked cursor.
    #[inline]
    fn edge_ids_of(&self, node: Self::Id) -> EdgeIdCursor<'_, Self> {
        EndAwareIter::new(self.incident_edge_ids(node))
    }

    /// Edges of `node` whose other endpoint has a smaller id.
    ///
    /// # Example
    /// ```rust
    /// use merge_graph::graph::{InMemoryMergeGraph, MergeGraphIterExt};
    /// let g = InMemoryMergeGraph::<u32, ()>::from_parts(
    ///     [(1, ()), (2, ()), (3, ())],
    ///     [(10, 1, 2, ()), (20, 2, 3, ()), (30, 1, 3, ())],
    /// ).unwrap();
    /// assert_eq!(g.back_edge_ids(3).collect::<Vec<_>>(), vec![20, 30]);
    /// assert_eq!(g.back_edge_ids(1).count(), 0);
    /// ```
    #[inline]
    fn back_edge_ids(&self, node: Self::Id) -> BackEdgeIds<'_, Self> {
        FilterIter::new(BackEdgeFilter::new(self, node), self.edge_ids_of(node))
    }

    #[inline]
    fn back_edges(&self, node: Self::Id) -> BackEdges<'_, Self> {
        TransformIter::new(self.back_edge_ids(node), EdgeItem::new(self))
    }

    #[inline]
    fn back_neighbor_ids(&self, node: Self::Id) -> BackNeighborIds<'_, Self> {
        TransformIter::new(self.back_edge_ids(node), OtherNodeId::new(self, node))
    }

    #[inline]
    fn back_neighbors(&self, node: Self::Id) -> BackNeighbors<'_, Self> {
        TransformIter::new(self.back_edge_ids(node), OtherNode::new(self, node))
    }

    #[inline]
    fn neighbor_ids(&self, node: Self::Id) -> NeighborIds<'_, Self> {
        TransformIter::new(self.edge_ids_of(node), OtherNodeId::new(self, node))
    }

    #[inline]
    fn neighbors(&self, node: Self::Id) -> Neighbors<'_, Self> {
        TransformIter::new(self.edge_ids_of(node), OtherNode::new(self, node))
    }

    /// Same ids as [`back_neighbor_ids`](Self::back_neighbor_ids), computed by
    /// projecting first and filtering on the projected id.
    #[inline]
    fn smaller_neighbor_ids(&self, node: Self::Id) -> SmallerNeighborIds<'_, Self> {
        FilterIter::new(SmallerThan::new(node), self.neighbor_ids(node))
    }

    /// Every live edge exactly once, grouped by owning (larger-id) endpoint.
    fn canonical_edge_ids(&self) -> impl Iterator<Item = Self::Id> + '_ {
        self.node_ids().flat_map(move |u| self.back_edge_ids(u))
    }

    /// [`canonical_edge_ids`](Self::canonical_edge_ids) with the per-node
    /// traversals run in parallel. Output order matches the sequential form.
    #[cfg(feature = "rayon")]
    fn par_canonical_edge_ids(&self) -> Vec<Self::Id>
    where
        Self: Sync,
        Self::Id: Send + Sync,
    {
        use rayon::prelude::*;
        let nodes: Vec<Self::Id> = self.node_ids().collect();
        nodes
            .par_iter()
            .flat_map_iter(|&u| self.back_edge_ids(u))
            .collect()
    }
}

impl<G: MergeGraph> MergeGraphIterExt for G {}
