pub mod bounds;
pub mod in_memory;
pub mod merge_graph_trait;
pub mod neighborhood;

// Re-export the core trait, the incidence views, and the in-memory impl at top level
pub use bounds::IdLike;
pub use in_memory::{Contraction, EdgeRecord, GraphSnapshot, InMemoryMergeGraph};
pub use merge_graph_trait::MergeGraph;
pub use neighborhood::MergeGraphIterExt;
