//! Relationship-graph analysis for a community membership registry

pub mod analysis;
pub mod cache;
pub mod classify;
pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod registry;
pub mod stats;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};

pub use analysis::{NetworkAnalysis, RegistryAnalyzer};
pub use classify::{classify, Classification, RelationshipGroup};
pub use cluster::FamilyCluster;
pub use config::Config;
pub use error::RegistryError;
pub use graph::{build_adjacency, ExtendedConnection, FamilyGraph};
pub use registry::{Gender, Member, MemberDirectory, MemberId, Relationship};
pub use stats::{compute_stats, NetworkStats};

/// Family clusters with the default minimum size of two members
pub fn find_clusters(members: &[Member], relationships: &[Relationship]) -> Vec<FamilyCluster> {
    cluster::find_family_clusters(members, relationships, config::DEFAULT_MIN_CLUSTER_SIZE)
}

/// Up to ten second-degree relatives of `focal`, resolved against `members`
pub fn find_extended(
    focal: &Member,
    direct: &[Relationship],
    all: &[Relationship],
    members: &[Member],
) -> Vec<ExtendedConnection> {
    let directory = MemberDirectory::new(members);
    graph::find_extended_connections(
        focal,
        direct,
        all,
        &directory,
        config::DEFAULT_MAX_EXTENDED_CONNECTIONS,
    )
}
