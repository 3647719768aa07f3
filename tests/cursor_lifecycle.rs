mod util;

use merge_graph::prelude::*;
use merge_graph::graph::neighborhood::{BackEdgeIds, BackNeighbors};
use util::{graph_from, Graph};

#[test]
fn default_views_are_exhausted_before_any_advance() {
    let mut ids = BackEdgeIds::<Graph>::default();
    assert!(ids.is_end());
    assert_eq!(ids.base().state(), CursorState::Invalid);
    assert!(!ids.try_advance());
    assert_eq!(ids.next(), None);

    let nodes = BackNeighbors::<Graph>::default();
    assert!(nodes.is_end());
    assert_eq!(nodes.try_current(), Err(MergeGraphError::ExhaustedCursor));
    assert!(!nodes.projection().is_bound());
}

#[test]
fn isolated_node_views_are_at_end() {
    let g = graph_from(3, &[(1, 2)]);
    let raw = g.edge_ids_of(3);
    assert!(raw.is_valid());
    assert_eq!(raw.state(), CursorState::AtEnd);
    assert!(g.back_neighbors(3).is_end());
}

#[test]
fn fresh_views_restart_identically() {
    let g = graph_from(6, &[(1, 6), (6, 2), (3, 6), (6, 5), (4, 6), (2, 3)]);
    let first: Vec<_> = g.back_neighbor_ids(6).collect();
    let second: Vec<_> = g.back_neighbor_ids(6).collect();
    assert_eq!(first, vec![1, 2, 3, 5, 4]);
    assert_eq!(first, second);

    // a cloned stage continues from the same position independently
    let mut a = g.back_edge_ids(6);
    a.try_advance();
    let b = a.clone();
    assert_eq!(a.collect::<Vec<_>>(), b.collect::<Vec<_>>());
}

#[test]
fn exhausted_view_stays_exhausted() {
    let g = graph_from(2, &[(1, 2)]);
    let mut v = g.back_edges(2);
    assert_eq!(v.current().id, 1000);
    assert!(!v.try_advance());
    for _ in 0..3 {
        assert!(!v.try_advance());
        assert!(v.is_end());
    }
}

#[test]
fn custom_composition_with_closures() {
    let g = graph_from(5, &[(1, 5), (2, 5), (3, 5), (4, 5)]);
    // neighbours of 5 with odd ids, reported as their payload doubled
    let odd = FilterIter::new(|n: u32| n % 2 == 1, g.neighbor_ids(5));
    let doubled: Vec<u32> = TransformIter::new(odd, |n: u32| *g.node_from_id(n) * 2).collect();
    assert_eq!(doubled, vec![2, 6]);
}

#[test]
#[should_panic(expected = "exhausted")]
fn dereferencing_end_panics() {
    let g = graph_from(2, &[(1, 2)]);
    g.back_neighbor_ids(1).current();
}
