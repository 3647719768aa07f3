#![allow(dead_code)]
use merge_graph::graph::{InMemoryMergeGraph, MergeGraph};

pub type Graph = InMemoryMergeGraph<u32, u32, u32>;

/// Build a graph on nodes `1..=n` (payload = node id) from undirected pairs.
///
/// Self loops and repeated pairs are skipped; edge ids are assigned from 1000
/// upwards in input order and the payload is `1`.
pub fn graph_from(n: u32, pairs: &[(u32, u32)]) -> Graph {
    let mut g = Graph::new();
    for id in 1..=n {
        g.add_node(id, id).unwrap();
    }
    let mut next = 1000;
    for &(a, b) in pairs {
        if a == b || g.find_edge(a, b).is_some() {
            continue;
        }
        g.add_edge(next, a, b, 1).unwrap();
        next += 1;
    }
    g
}

/// Live edge ids in ascending order.
pub fn live_edges(g: &Graph) -> Vec<u32> {
    let mut out: Vec<u32> = g
        .node_ids()
        .flat_map(|u| g.incident_edge_ids(u).collect::<Vec<_>>())
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
