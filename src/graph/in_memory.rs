//! In-memory implementation of the [`MergeGraph`] trait.
//!
//! [`InMemoryMergeGraph`] stores one record per live edge and one incidence
//! list per live node. Contracting an edge merges its larger-id endpoint into
//! the smaller one and folds any parallel edges that result, so the graph
//! never holds self loops or multi-edges.
//!
//! Incidence lists keep insertion order; edges inherited through a merge are
//! appended. Traversal order is therefore deterministic for a given build and
//! contraction sequence.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::bounds::IdLike;
use super::merge_graph_trait::MergeGraph;
use super::neighborhood::MergeGraphIterExt;
use crate::debug_invariants::DebugInvariants;
use crate::merge_error::MergeGraphError;

/// A live edge: its id, its two (distinct) endpoints, and its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord<Id, E> {
    pub id: Id,
    pub u: Id,
    pub v: Id,
    pub data: E,
}

impl<Id: IdLike, E> EdgeRecord<Id, E> {
    #[inline]
    pub fn endpoints(&self) -> (Id, Id) {
        (self.u, self.v)
    }

    /// The endpoint that is not `node`, or `None` if `node` is not an endpoint.
    #[inline]
    pub fn other_node_id(&self, node: Id) -> Option<Id> {
        if node == self.u {
            Some(self.v)
        } else if node == self.v {
            Some(self.u)
        } else {
            None
        }
    }

    #[inline]
    fn replace_endpoint(&mut self, from: Id, to: Id) {
        if self.u == from {
            self.u = to;
        } else if self.v == from {
            self.v = to;
        }
    }
}

/// Serializable view of a whole graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<Id, N, E> {
    pub nodes: Vec<(Id, N)>,
    pub edges: Vec<EdgeRecord<Id, E>>,
}

/// Outcome of a single contraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contraction<Id> {
    /// Node that absorbed the other endpoint (the smaller id).
    pub survivor: Id,
    /// Node id that is no longer live.
    pub removed: Id,
    /// Edge ids dropped because they became parallel to a kept edge.
    pub folded_edges: Vec<Id>,
}

/// A mergeable undirected graph backed by hash maps.
///
/// # Type Parameters
/// - `Id`: shared node/edge identifier.
/// - `N`: node payload.
/// - `E`: edge payload; cloned on [`MergeGraph::edge_from_id`], so it should be cheap to clone.
#[derive(Clone, Debug)]
pub struct InMemoryMergeGraph<Id, N, E = ()>
where
    Id: IdLike,
{
    nodes: BTreeMap<Id, N>,
    edges: HashMap<Id, EdgeRecord<Id, E>>,
    incidence: HashMap<Id, Vec<Id>>,
}

impl<Id: IdLike, N, E> Default for InMemoryMergeGraph<Id, N, E> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: HashMap::new(),
            incidence: HashMap::new(),
        }
    }
}

impl<Id: IdLike, N, E: Clone> InMemoryMergeGraph<Id, N, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from nodes and `(edge, u, v, data)` tuples.
    ///
    /// # Example
    /// ```rust
    /// use merge_graph::graph::{InMemoryMergeGraph, MergeGraph};
    /// let g = InMemoryMergeGraph::from_parts(
    ///     [(1u32, ()), (2, ()), (3, ())],
    ///     [(10, 1, 2, ()), (11, 2, 3, ())],
    /// ).unwrap();
    /// assert_eq!(g.degree(2), 2);
    /// ```
    pub fn from_parts<NI, EI>(nodes: NI, edges: EI) -> Result<Self, MergeGraphError>
    where
        NI: IntoIterator<Item = (Id, N)>,
        EI: IntoIterator<Item = (Id, Id, Id, E)>,
    {
        let mut g = Self::default();
        for (id, data) in nodes {
            g.add_node(id, data)?;
        }
        for (id, u, v, data) in edges {
            g.add_edge(id, u, v, data)?;
        }
        Ok(g)
    }

    pub fn add_node(&mut self, id: Id, data: N) -> Result<(), MergeGraphError> {
        if self.nodes.contains_key(&id) {
            return Err(MergeGraphError::DuplicateNode(id.to_string()));
        }
        log::trace!("add_node {id}");
        self.nodes.insert(id, data);
        self.incidence.insert(id, Vec::new());
        Ok(())
    }

    /// Inserts edge `id` between `u` and `v`.
    ///
    /// Self loops and a second edge between the same pair are rejected.
    pub fn add_edge(&mut self, id: Id, u: Id, v: Id, data: E) -> Result<(), MergeGraphError> {
        if self.edges.contains_key(&id) {
            return Err(MergeGraphError::DuplicateEdge(id.to_string()));
        }
        if u == v {
            return Err(MergeGraphError::SelfLoop {
                edge: id.to_string(),
                node: u.to_string(),
            });
        }
        for n in [u, v] {
            if !self.nodes.contains_key(&n) {
                return Err(MergeGraphError::UnknownNode(n.to_string()));
            }
        }
        if let Some(existing) = self.find_edge(u, v) {
            return Err(MergeGraphError::ParallelEdge {
                edge: id.to_string(),
                existing: existing.to_string(),
            });
        }
        log::trace!("add_edge {id} ({u}, {v})");
        self.edges.insert(id, EdgeRecord { id, u, v, data });
        self.incidence.entry(u).or_default().push(id);
        self.incidence.entry(v).or_default().push(id);
        Ok(())
    }

    /// The edge joining `a` and `b`, if any.
    pub fn find_edge(&self, a: Id, b: Id) -> Option<Id> {
        self.incidence.get(&a)?.iter().copied().find(|e| {
            self.edges
                .get(e)
                .and_then(|rec| rec.other_node_id(a))
                .is_some_and(|other| other == b)
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn has_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    pub fn has_edge(&self, id: Id) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn edge_endpoints(&self, id: Id) -> Result<(Id, Id), MergeGraphError> {
        self.edges
            .get(&id)
            .map(EdgeRecord::endpoints)
            .ok_or_else(|| MergeGraphError::UnknownEdge(id.to_string()))
    }

    /// Contracts `edge`, keeping the survivor's node and edge payloads.
    pub fn contract_edge(&mut self, edge: Id) -> Result<Contraction<Id>, MergeGraphError> {
        self.contract_edge_with(edge, |_, _| {}, |_, _| {})
    }

    /// Contracts `edge`, merging its endpoints into the smaller id.
    ///
    /// `merge_nodes(survivor, removed)` combines node payloads.
    /// `merge_edges(kept, dropped)` combines the payloads of two edges that
    /// became parallel; the smaller edge id is kept. The contracted edge
    /// itself is removed.
    pub fn contract_edge_with<FN, FE>(
        &mut self,
        edge: Id,
        merge_nodes: FN,
        mut merge_edges: FE,
    ) -> Result<Contraction<Id>, MergeGraphError>
    where
        FN: FnOnce(&mut N, N),
        FE: FnMut(&mut E, E),
    {
        let rec = self
            .edges
            .remove(&edge)
            .ok_or_else(|| MergeGraphError::UnknownEdge(edge.to_string()))?;
        let (survivor, removed) = (rec.u.min(rec.v), rec.u.max(rec.v));
        for n in [survivor, removed] {
            if let Some(list) = self.incidence.get_mut(&n) {
                list.retain(|&e| e != edge);
            }
        }

        let removed_data = self
            .nodes
            .remove(&removed)
            .ok_or_else(|| MergeGraphError::UnknownNode(removed.to_string()))?;
        let survivor_data = self
            .nodes
            .get_mut(&survivor)
            .ok_or_else(|| MergeGraphError::UnknownNode(survivor.to_string()))?;
        merge_nodes(survivor_data, removed_data);

        let moved = self.incidence.remove(&removed).unwrap_or_default();
        let mut survivor_list = self.incidence.remove(&survivor).unwrap_or_default();
        let mut by_neighbor: HashMap<Id, Id> = HashMap::with_capacity(survivor_list.len());
        for &e in &survivor_list {
            let other = self
                .edges
                .get(&e)
                .and_then(|r| r.other_node_id(survivor))
                .ok_or_else(|| MergeGraphError::not_incident(e, survivor))?;
            by_neighbor.insert(other, e);
        }

        let mut folded_edges = Vec::new();
        for f in moved {
            let rec_f = self
                .edges
                .get_mut(&f)
                .ok_or_else(|| MergeGraphError::UnknownEdge(f.to_string()))?;
            let w = rec_f
                .other_node_id(removed)
                .ok_or_else(|| MergeGraphError::not_incident(f, removed))?;
            rec_f.replace_endpoint(removed, survivor);

            match by_neighbor.get(&w).copied() {
                None => {
                    by_neighbor.insert(w, f);
                    survivor_list.push(f);
                }
                Some(g) => {
                    let (keep, drop) = (f.min(g), f.max(g));
                    let dropped = self
                        .edges
                        .remove(&drop)
                        .ok_or_else(|| MergeGraphError::UnknownEdge(drop.to_string()))?;
                    if let Some(kept) = self.edges.get_mut(&keep) {
                        merge_edges(&mut kept.data, dropped.data);
                    }
                    if let Some(list) = self.incidence.get_mut(&w) {
                        list.retain(|&e| e != drop);
                    }
                    if keep == f {
                        if let Some(slot) = survivor_list.iter_mut().find(|e| **e == g) {
                            *slot = f;
                        }
                        by_neighbor.insert(w, f);
                    }
                    folded_edges.push(drop);
                }
            }
        }
        self.incidence.insert(survivor, survivor_list);

        log::debug!(
            "contracted edge {edge}: {removed} -> {survivor}, folded {} parallel edge(s)",
            folded_edges.len()
        );
        crate::debug_invariants!(self.validate_invariants(), "contract_edge");

        Ok(Contraction {
            survivor,
            removed,
            folded_edges,
        })
    }

    /// Mutable access to a node payload.
    pub fn node_data_mut(&mut self, id: Id) -> Result<&mut N, MergeGraphError> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| MergeGraphError::UnknownNode(id.to_string()))
    }

    /// Owned copy of the graph, with edges sorted by id.
    pub fn snapshot(&self) -> GraphSnapshot<Id, N, E>
    where
        N: Clone,
    {
        GraphSnapshot {
            nodes: self.nodes.iter().map(|(&id, n)| (id, n.clone())).collect(),
            edges: self
                .edges
                .values()
                .sorted_by_key(|r| r.id)
                .cloned()
                .collect(),
        }
    }

    /// Rebuilds a graph from a snapshot, re-validating every edge.
    pub fn from_snapshot(snapshot: GraphSnapshot<Id, N, E>) -> Result<Self, MergeGraphError> {
        Self::from_parts(
            snapshot.nodes,
            snapshot
                .edges
                .into_iter()
                .map(|r| (r.id, r.u, r.v, r.data)),
        )
    }
}

type IncidenceIter<'a, Id> = std::iter::Copied<std::slice::Iter<'a, Id>>;
type NodeKeyIter<'a, Id, N> = std::iter::Copied<std::collections::btree_map::Keys<'a, Id, N>>;

impl<Id: IdLike, N, E: Clone> MergeGraph for InMemoryMergeGraph<Id, N, E> {
    type Id = Id;
    type Edge = EdgeRecord<Id, E>;
    type Node = N;
    type IncidentEdgeIds<'a>
        = IncidenceIter<'a, Id>
    where
        Self: 'a;
    type NodeIds<'a>
        = NodeKeyIter<'a, Id, N>
    where
        Self: 'a;

    fn try_edge_from_id(&self, id: Id) -> Result<Self::Edge, MergeGraphError> {
        self.edges
            .get(&id)
            .cloned()
            .ok_or_else(|| MergeGraphError::UnknownEdge(id.to_string()))
    }

    fn try_node_from_id(&self, id: Id) -> Result<&N, MergeGraphError> {
        self.nodes
            .get(&id)
            .ok_or_else(|| MergeGraphError::UnknownNode(id.to_string()))
    }

    fn try_other_node_id(&self, edge: Id, node: Id) -> Result<Id, MergeGraphError> {
        self.edges
            .get(&edge)
            .ok_or_else(|| MergeGraphError::UnknownEdge(edge.to_string()))?
            .other_node_id(node)
            .ok_or_else(|| MergeGraphError::not_incident(edge, node))
    }

    fn incident_edge_ids(&self, node: Id) -> Self::IncidentEdgeIds<'_> {
        self.incidence
            .get(&node)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .copied()
    }

    fn node_ids(&self) -> Self::NodeIds<'_> {
        self.nodes.keys().copied()
    }

    fn degree(&self, node: Id) -> usize {
        self.incidence.get(&node).map_or(0, Vec::len)
    }
}

impl<Id: IdLike, N, E: Clone> DebugInvariants for InMemoryMergeGraph<Id, N, E> {
    fn validate_invariants(&self) -> Result<(), MergeGraphError> {
        for (&node, list) in &self.incidence {
            if !self.nodes.contains_key(&node) {
                return Err(MergeGraphError::IncidenceMismatch(format!(
                    "incidence list kept for dead node {node}"
                )));
            }
            if let Some(dup) = list.iter().duplicates().next() {
                return Err(MergeGraphError::IncidenceMismatch(format!(
                    "edge {dup} listed twice at node {node}"
                )));
            }
            let mut neighbors = hashbrown::HashSet::with_capacity(list.len());
            for &e in list {
                let other = self.try_other_node_id(e, node)?;
                if !neighbors.insert(other) {
                    return Err(MergeGraphError::IncidenceMismatch(format!(
                        "parallel edges between {node} and {other}"
                    )));
                }
            }
        }
        for rec in self.edges.values() {
            if rec.u == rec.v {
                return Err(MergeGraphError::SelfLoop {
                    edge: rec.id.to_string(),
                    node: rec.u.to_string(),
                });
            }
            for n in [rec.u, rec.v] {
                let listed = self
                    .incidence
                    .get(&n)
                    .is_some_and(|list| list.contains(&rec.id));
                if !listed {
                    return Err(MergeGraphError::IncidenceMismatch(format!(
                        "edge {} missing from incidence list of {n}",
                        rec.id
                    )));
                }
            }
        }

        let owners = self.canonical_edge_ids().counts();
        for &id in self.edges.keys() {
            let count = owners.get(&id).copied().unwrap_or(0);
            if count != 1 {
                return Err(MergeGraphError::PartitionViolation {
                    edge: id.to_string(),
                    count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> InMemoryMergeGraph<u32, u32, u32> {
        // 1 - 2
        // |   |
        // 4 - 3   plus diagonal 1-3
        InMemoryMergeGraph::from_parts(
            [(1, 1), (2, 1), (3, 1), (4, 1)],
            [
                (12, 1, 2, 1),
                (23, 2, 3, 1),
                (34, 3, 4, 1),
                (14, 1, 4, 1),
                (13, 1, 3, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_edges() {
        let mut g = square();
        assert_eq!(
            g.add_edge(12, 3, 4, 0),
            Err(MergeGraphError::DuplicateEdge("12".into()))
        );
        assert!(matches!(
            g.add_edge(99, 2, 2, 0),
            Err(MergeGraphError::SelfLoop { .. })
        ));
        assert_eq!(
            g.add_edge(99, 2, 7, 0),
            Err(MergeGraphError::UnknownNode("7".into()))
        );
        assert!(matches!(
            g.add_edge(99, 2, 1, 0),
            Err(MergeGraphError::ParallelEdge { .. })
        ));
        assert_eq!(g.add_node(1, 0), Err(MergeGraphError::DuplicateNode("1".into())));
    }

    #[test]
    fn incidence_keeps_insertion_order() {
        let g = square();
        assert_eq!(g.incident_edge_ids(1).collect::<Vec<_>>(), vec![12, 14, 13]);
        assert_eq!(g.incident_edge_ids(99).count(), 0);
        assert_eq!(g.node_ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn contraction_folds_parallel_edges() {
        let mut g = square();
        // merge 3 into 2: 3's edges to 4 and 1 move to 2; 2-1 already exists via 12.
        let c = g
            .contract_edge_with(23, |a, b| *a += b, |a, b| *a += b)
            .unwrap();
        assert_eq!(c.survivor, 2);
        assert_eq!(c.removed, 3);
        assert_eq!(c.folded_edges, vec![13]);
        assert!(!g.has_node(3));
        assert!(!g.has_edge(23));
        assert!(!g.has_edge(13));
        assert_eq!(*g.node_from_id(2), 2);
        assert_eq!(g.edge_from_id(12).data, 2);
        assert_eq!(g.edge_endpoints(34), Ok((2, 4)));
        assert_eq!(g.incident_edge_ids(2).collect::<Vec<_>>(), vec![12, 34]);
        assert_eq!(g.incident_edge_ids(1).collect::<Vec<_>>(), vec![12, 14]);
        assert_eq!(g.validate_invariants(), Ok(()));
    }

    #[test]
    fn contraction_keeps_smaller_parallel_edge_id() {
        let mut g = InMemoryMergeGraph::<u32, (), u32>::from_parts(
            [(1, ()), (2, ()), (3, ())],
            [(5, 2, 3, 5), (9, 1, 3, 9), (7, 1, 2, 7)],
        )
        .unwrap();
        // merge 2 into 1: 2's edge 5 (to 3) meets 1's edge 9 (to 3); 5 is kept.
        let c = g.contract_edge(7).unwrap();
        assert_eq!(c.folded_edges, vec![9]);
        assert_eq!(g.incident_edge_ids(1).collect::<Vec<_>>(), vec![5]);
        assert_eq!(g.incident_edge_ids(3).collect::<Vec<_>>(), vec![5]);
        assert_eq!(g.edge_endpoints(5), Ok((1, 3)));
        assert_eq!(g.edge_from_id(5).data, 5);
    }

    #[test]
    fn contracting_unknown_edge_fails() {
        let mut g = square();
        assert_eq!(
            g.contract_edge(77),
            Err(MergeGraphError::UnknownEdge("77".into()))
        );
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let g = square();
        let snap = g.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GraphSnapshot<u32, u32, u32> = serde_json::from_str(&json).unwrap();
        let g2 = InMemoryMergeGraph::from_snapshot(back).unwrap();
        assert_eq!(g2.snapshot(), snap);
        assert_eq!(g2.edge_count(), 5);
    }

    #[test]
    fn validation_catches_corruption() {
        let mut g = square();
        g.incidence.get_mut(&1).unwrap().push(12);
        assert!(matches!(
            g.validate_invariants(),
            Err(MergeGraphError::IncidenceMismatch(_))
        ));
        assert!(!g.warn_on_violation());
    }
}
