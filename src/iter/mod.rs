//! Lazy iteration stages over a merge graph's incidence structure.
//!
//! Stages stack bottom-up, each holding the one below by value:
//!
//! ```text
//! incident_edge_ids(u) → EndAwareIter → FilterIter<BackEdgeFilter> → TransformIter<OtherNodeId>
//! ```
//!
//! Every stage is both a [`Cursor`] and a std [`Iterator`].

pub mod cursor;
pub mod filter;
pub mod predicate;
pub mod projection;
pub mod transform;

pub use cursor::{Cursor, CursorState, EndAwareIter};
pub use filter::FilterIter;
pub use predicate::{BackEdgeFilter, IdFilter, SmallerThan};
pub use projection::{EdgeItem, IdTransform, NodeItem, OtherNode, OtherNodeId};
pub use transform::TransformIter;
