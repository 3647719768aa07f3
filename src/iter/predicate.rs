//! Id predicates used by [`FilterIter`](super::FilterIter).
//!
//! [`BackEdgeFilter`] is the canonical-direction rule: every undirected edge
//! is kept only by its larger-id endpoint, so walking the back edges of every
//! node visits each edge exactly once.

use crate::graph::MergeGraph;
use crate::merge_error::MergeGraphError;

/// A pure test over ids.
///
/// Implemented by the predicates in this module and by any `Fn(Id) -> bool`.
pub trait IdFilter<Id> {
    fn keep(&self, id: Id) -> bool;
}

impl<Id, F> IdFilter<Id> for F
where
    F: Fn(Id) -> bool,
{
    #[inline]
    fn keep(&self, id: Id) -> bool {
        self(id)
    }
}

/// Keeps ids strictly below a threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SmallerThan<Id> {
    pub threshold: Id,
}

impl<Id> SmallerThan<Id> {
    #[inline]
    pub fn new(threshold: Id) -> Self {
        Self { threshold }
    }
}

impl<Id: Ord> IdFilter<Id> for SmallerThan<Id> {
    #[inline]
    fn keep(&self, id: Id) -> bool {
        id < self.threshold
    }
}

/// Keeps the edges of `own_node` whose opposite endpoint has a smaller id.
///
/// Applied to the incidence sequence of `own_node` this yields its canonical
/// back-set. The graph is consulted on every call, so the filter always sees
/// current (post-merge) endpoints.
pub struct BackEdgeFilter<'g, G: MergeGraph> {
    graph: Option<&'g G>,
    own_node: Option<G::Id>,
}

impl<'g, G: MergeGraph> BackEdgeFilter<'g, G> {
    #[inline]
    pub fn new(graph: &'g G, own_node: G::Id) -> Self {
        Self {
            graph: Some(graph),
            own_node: Some(own_node),
        }
    }

    /// `true` unless default-constructed.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.graph.is_some()
    }

    /// Fallible form of [`IdFilter::keep`].
    pub fn try_keep(&self, edge: G::Id) -> Result<bool, MergeGraphError> {
        let (graph, own) = match (self.graph, self.own_node) {
            (Some(g), Some(own)) => (g, own),
            _ => return Err(MergeGraphError::UnboundGraph),
        };
        Ok(graph.try_other_node_id(edge, own)? < own)
    }
}

impl<'g, G: MergeGraph> IdFilter<G::Id> for BackEdgeFilter<'g, G> {
    /// # Panics
    /// Panics if the filter is unbound or `edge` is not incident to the own node.
    #[inline]
    #[track_caller]
    fn keep(&self, edge: G::Id) -> bool {
        match (self.graph, self.own_node) {
            (Some(graph), Some(own)) => graph.other_node_id(edge, own) < own,
            _ => panic!("BackEdgeFilter: {}", MergeGraphError::UnboundGraph),
        }
    }
}

impl<'g, G: MergeGraph> Default for BackEdgeFilter<'g, G> {
    fn default() -> Self {
        Self {
            graph: None,
            own_node: None,
        }
    }
}

impl<'g, G: MergeGraph> Clone for BackEdgeFilter<'g, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, G: MergeGraph> Copy for BackEdgeFilter<'g, G> {}

impl<'g, G: MergeGraph> std::fmt::Debug for BackEdgeFilter<'g, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackEdgeFilter")
            .field("bound", &self.is_bound())
            .field("own_node", &self.own_node)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::InMemoryMergeGraph;

    fn triangle() -> InMemoryMergeGraph<u32, (), ()> {
        let mut g = InMemoryMergeGraph::new();
        for n in [1, 2, 3] {
            g.add_node(n, ()).unwrap();
        }
        g.add_edge(10, 1, 2, ()).unwrap();
        g.add_edge(20, 2, 3, ()).unwrap();
        g.add_edge(30, 1, 3, ()).unwrap();
        g
    }

    #[test]
    fn smaller_than_is_strict() {
        let f = SmallerThan::new(5u32);
        assert!(f.keep(4));
        assert!(!f.keep(5));
        assert!(!f.keep(6));
    }

    #[test]
    fn closures_are_filters() {
        let even = |x: u32| x % 2 == 0;
        assert!(even.keep(4));
        assert!(!even.keep(3));
    }

    #[test]
    fn back_edge_filter_keeps_larger_endpoint_side() {
        let g = triangle();
        let at2 = BackEdgeFilter::new(&g, 2);
        assert!(at2.keep(10));
        assert!(!at2.keep(20));
        let at3 = BackEdgeFilter::new(&g, 3);
        assert!(at3.keep(20));
        assert!(at3.keep(30));
        let at1 = BackEdgeFilter::new(&g, 1);
        assert!(!at1.keep(10));
        assert!(!at1.keep(30));
    }

    #[test]
    fn back_edge_filter_try_keep_reports_errors() {
        let g = triangle();
        let at1 = BackEdgeFilter::new(&g, 1);
        assert!(matches!(
            at1.try_keep(20),
            Err(MergeGraphError::NotIncident { .. })
        ));
        assert!(matches!(
            at1.try_keep(99),
            Err(MergeGraphError::UnknownEdge(_))
        ));
        let unbound = BackEdgeFilter::<InMemoryMergeGraph<u32, (), ()>>::default();
        assert!(!unbound.is_bound());
        assert_eq!(unbound.try_keep(10), Err(MergeGraphError::UnboundGraph));
    }

    #[test]
    #[should_panic(expected = "unbound")]
    fn unbound_back_edge_filter_panics() {
        let unbound = BackEdgeFilter::<InMemoryMergeGraph<u32, (), ()>>::default();
        unbound.keep(10);
    }
}
