//! Id projections used by [`TransformIter`](super::TransformIter).
//!
//! Each projection is a non-owning handle on the graph, optionally with a
//! captured node id. A default-constructed projection is unbound; applying
//! it panics, and `try_apply` reports [`MergeGraphError::UnboundGraph`].

use crate::graph::MergeGraph;
use crate::merge_error::MergeGraphError;

/// A pure map from an id to a derived value.
pub trait IdTransform<Id> {
    type Output;

    fn apply(&self, id: Id) -> Self::Output;
}

impl<Id, F, O> IdTransform<Id> for F
where
    F: Fn(Id) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, id: Id) -> O {
        self(id)
    }
}

macro_rules! graph_handle_impls {
    ($name:ident) => {
        impl<'g, G: MergeGraph> Default for $name<'g, G> {
            fn default() -> Self {
                Self {
                    graph: None,
                    own_node: None,
                }
            }
        }

        impl<'g, G: MergeGraph> Clone for $name<'g, G> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<'g, G: MergeGraph> Copy for $name<'g, G> {}

        impl<'g, G: MergeGraph> std::fmt::Debug for $name<'g, G> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("bound", &self.graph.is_some())
                    .field("own_node", &self.own_node)
                    .finish()
            }
        }

        impl<'g, G: MergeGraph> $name<'g, G> {
            #[inline]
            pub fn is_bound(&self) -> bool {
                self.graph.is_some()
            }

            #[inline]
            fn bound(&self) -> Result<(&'g G, Option<G::Id>), MergeGraphError> {
                self.graph
                    .map(|g| (g, self.own_node))
                    .ok_or(MergeGraphError::UnboundGraph)
            }
        }
    };
}

/// Edge id → edge item.
pub struct EdgeItem<'g, G: MergeGraph> {
    graph: Option<&'g G>,
    own_node: Option<G::Id>,
}

/// Node id → `&Node`.
pub struct NodeItem<'g, G: MergeGraph> {
    graph: Option<&'g G>,
    own_node: Option<G::Id>,
}

/// Edge id → id of its endpoint other than the captured node.
pub struct OtherNodeId<'g, G: MergeGraph> {
    graph: Option<&'g G>,
    own_node: Option<G::Id>,
}

/// Edge id → `&Node` of its endpoint other than the captured node.
pub struct OtherNode<'g, G: MergeGraph> {
    graph: Option<&'g G>,
    own_node: Option<G::Id>,
}

graph_handle_impls!(EdgeItem);
graph_handle_impls!(NodeItem);
graph_handle_impls!(OtherNodeId);
graph_handle_impls!(OtherNode);

impl<'g, G: MergeGraph> EdgeItem<'g, G> {
    #[inline]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph: Some(graph),
            own_node: None,
        }
    }

    pub fn try_apply(&self, edge: G::Id) -> Result<G::Edge, MergeGraphError> {
        let (graph, _) = self.bound()?;
        graph.try_edge_from_id(edge)
    }
}

impl<'g, G: MergeGraph> NodeItem<'g, G> {
    #[inline]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph: Some(graph),
            own_node: None,
        }
    }

    pub fn try_apply(&self, node: G::Id) -> Result<&'g G::Node, MergeGraphError> {
        let (graph, _) = self.bound()?;
        graph.try_node_from_id(node)
    }
}

impl<'g, G: MergeGraph> OtherNodeId<'g, G> {
    #[inline]
    pub fn new(graph: &'g G, own_node: G::Id) -> Self {
        Self {
            graph: Some(graph),
            own_node: Some(own_node),
        }
    }

    pub fn try_apply(&self, edge: G::Id) -> Result<G::Id, MergeGraphError> {
        match self.bound()? {
            (graph, Some(own)) => graph.try_other_node_id(edge, own),
            (_, None) => Err(MergeGraphError::UnboundGraph),
        }
    }
}

impl<'g, G: MergeGraph> OtherNode<'g, G> {
    #[inline]
    pub fn new(graph: &'g G, own_node: G::Id) -> Self {
        Self {
            graph: Some(graph),
            own_node: Some(own_node),
        }
    }

    /// Resolves the opposite id and looks the node up in one call.
    pub fn try_apply(&self, edge: G::Id) -> Result<&'g G::Node, MergeGraphError> {
        match self.bound()? {
            (graph, Some(own)) => graph.try_node_from_id(graph.try_other_node_id(edge, own)?),
            (_, None) => Err(MergeGraphError::UnboundGraph),
        }
    }
}

#[track_caller]
fn unwrap_projection<T>(name: &str, r: Result<T, MergeGraphError>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{name}: {e}"),
    }
}

impl<'g, G: MergeGraph> IdTransform<G::Id> for EdgeItem<'g, G> {
    type Output = G::Edge;

    #[inline]
    #[track_caller]
    fn apply(&self, edge: G::Id) -> G::Edge {
        unwrap_projection("EdgeItem", self.try_apply(edge))
    }
}

impl<'g, G: MergeGraph> IdTransform<G::Id> for NodeItem<'g, G> {
    type Output = &'g G::Node;

    #[inline]
    #[track_caller]
    fn apply(&self, node: G::Id) -> &'g G::Node {
        unwrap_projection("NodeItem", self.try_apply(node))
    }
}

impl<'g, G: MergeGraph> IdTransform<G::Id> for OtherNodeId<'g, G> {
    type Output = G::Id;

    #[inline]
    #[track_caller]
    fn apply(&self, edge: G::Id) -> G::Id {
        unwrap_projection("OtherNodeId", self.try_apply(edge))
    }
}

impl<'g, G: MergeGraph> IdTransform<G::Id> for OtherNode<'g, G> {
    type Output = &'g G::Node;

    #[inline]
    #[track_caller]
    fn apply(&self, edge: G::Id) -> &'g G::Node {
        unwrap_projection("OtherNode", self.try_apply(edge))
    }
}
