//! Adjacency construction from relationship rows

use crate::graph::FamilyGraph;
use crate::registry::{MemberId, Relationship};

/// Builder for incrementally constructing a FamilyGraph
pub struct GraphBuilder {
    /// Adjacency under construction
    graph: FamilyGraph,

    /// Raw edges seen, multiplicities included
    edges_seen: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: FamilyGraph::with_capacity(capacity, capacity),
            edges_seen: 0,
        }
    }

    /// Register a connection in both directions
    pub fn add_edge(&mut self, member: MemberId, related: MemberId) {
        self.graph.inner.add_edge(member, related, ());
        self.edges_seen += 1;
    }

    /// Register the connection carried by a relationship row
    pub fn add_relationship(&mut self, relationship: &Relationship) {
        self.add_edge(relationship.member_id, relationship.related_member_id);
    }

    /// Finish construction
    pub fn build(self) -> FamilyGraph {
        log::debug!(
            "Built adjacency with {} members and {} connections from {} edges",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.edges_seen
        );
        self.graph
    }
}

/// Build the undirected adjacency view of a relationship list
pub fn build_adjacency(relationships: &[Relationship]) -> FamilyGraph {
    let mut builder = GraphBuilder::with_capacity(relationships.len());
    for relationship in relationships {
        builder.add_relationship(relationship);
    }
    builder.build()
}
