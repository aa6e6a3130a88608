//! Family cluster analysis module

pub mod detection;
pub mod metrics;

use crate::registry::{Member, MemberId};
use serde::Serialize;

pub use detection::find_family_clusters;

/// A maximal connected group of related members
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCluster {
    /// Position in the size-sorted output, starting at 1
    pub id: u32,

    /// Members of this cluster, in traversal order
    pub members: Vec<Member>,

    /// Size of the cluster
    pub size: usize,

    /// Undirected connections inside the cluster, each counted once
    pub connection_count: usize,

    /// Distinct coarse generation categories seen among the cluster's edges
    pub generation_span: usize,

    /// Distinct `"{city}, {state}"` values, first-seen order
    pub locations: Vec<String>,
}

impl FamilyCluster {
    /// Ids of the cluster's members
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    pub fn contains(&self, member: MemberId) -> bool {
        self.members.iter().any(|m| m.id == member)
    }
}
