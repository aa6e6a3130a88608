//! Relationship graph representation and traversal module

pub mod adjacency;
pub mod builder;
pub mod extended;

pub use adjacency::FamilyGraph;
pub use builder::build_adjacency;
pub use extended::{find_extended_connections, ExtendedConnection};
