//! Undirected adjacency view over directed relationship edges

use crate::registry::MemberId;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

/// Member id -> set of connected member ids.
///
/// Built from the typed edge list without copying the edge records; the edge
/// direction and type are dropped and parallel edges collapse into one.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    pub(crate) inner: UnGraphMap<MemberId, ()>,
}

impl FamilyGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            inner: UnGraphMap::with_capacity(node_count, edge_count),
        }
    }

    /// Connected member ids, in first-registered order
    pub fn neighbors(&self, member: MemberId) -> impl Iterator<Item = MemberId> + '_ {
        self.inner.neighbors(member)
    }

    /// Size of the member's adjacency set. A self loop counts once.
    pub fn degree(&self, member: MemberId) -> usize {
        if !self.inner.contains_node(member) {
            return 0;
        }
        self.inner.neighbors(member).count()
    }

    /// Whether the member has at least one adjacency entry
    pub fn contains(&self, member: MemberId) -> bool {
        self.inner.contains_node(member)
    }

    /// Whether the two members share an undirected connection
    pub fn is_connected(&self, a: MemberId, b: MemberId) -> bool {
        self.inner.contains_edge(a, b)
    }

    /// Number of members with at least one connection
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of distinct undirected connections
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Breadth-first walk of the component containing `start`.
    ///
    /// Returns an empty list when `start` has no adjacency entry. Visited
    /// tracking keeps self loops and cycles from being revisited.
    pub fn component_of(&self, start: MemberId) -> Vec<MemberId> {
        if !self.inner.contains_node(start) {
            return Vec::new();
        }

        let mut component = Vec::new();
        let mut bfs = Bfs::new(&self.inner, start);
        while let Some(member) = bfs.next(&self.inner) {
            component.push(member);
        }
        component
    }
}
