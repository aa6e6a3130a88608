//! Combined registry analysis over one member/relationship snapshot

use crate::cache::AnalysisCache;
use crate::classify::grouping::{group_relationships, non_empty_sections, unknown_types, RelationshipSection};
use crate::cluster::{find_family_clusters, FamilyCluster};
use crate::config::Config;
use crate::data::preprocessing::{count_dangling, relationships_for, unreciprocated};
use crate::error::RegistryError;
use crate::graph::{find_extended_connections, ExtendedConnection};
use crate::registry::{Member, MemberDirectory, MemberId, Relationship, RelationshipId};
use crate::stats::{compute_stats, NetworkStats};
use serde::Serialize;

/// Number of snapshots the analyzer memoizes
const CACHE_CAPACITY: usize = 8;

/// Everything derived from one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnalysis {
    pub member_count: usize,
    pub clusters: Vec<FamilyCluster>,
    pub stats: NetworkStats,

    /// Populated relationship groups, priority order
    pub sections: Vec<RelationshipSection<Relationship>>,

    /// Relationship labels the classifier files under "Other"
    pub unknown_types: Vec<String>,

    /// Edges with no edge back in the opposite direction
    pub unreciprocated: Vec<RelationshipId>,

    /// Edges referencing a member id absent from the member list
    pub dangling: usize,
}

/// Runs the full analysis pipeline with memoization per snapshot
pub struct RegistryAnalyzer {
    config: Config,
    cache: AnalysisCache<NetworkAnalysis>,
}

impl RegistryAnalyzer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: AnalysisCache::new(CACHE_CAPACITY),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze a snapshot, reusing the previous result for identical input
    pub fn analyze(&mut self, members: &[Member], relationships: &[Relationship]) -> NetworkAnalysis {
        let config = &self.config;
        self.cache
            .get_or_compute(members, relationships, || analyze_snapshot(config, members, relationships))
    }

    /// Second-degree relatives of `focal`
    pub fn extended_connections(
        &self,
        members: &[Member],
        relationships: &[Relationship],
        focal: MemberId,
    ) -> Result<Vec<ExtendedConnection>, RegistryError> {
        let directory = MemberDirectory::new(members);
        let focal_member = directory.get(focal).ok_or(RegistryError::UnknownMember(focal))?;
        let direct = relationships_for(focal, relationships);

        let connections = find_extended_connections(
            focal_member,
            &direct,
            relationships,
            &directory,
            self.config.max_extended_connections,
        );
        log::info!(
            "Found {} extended connections for member {}",
            connections.len(),
            focal
        );
        Ok(connections)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }
}

impl Default for RegistryAnalyzer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Compute a fresh analysis without consulting any cache
pub fn analyze_snapshot(config: &Config, members: &[Member], relationships: &[Relationship]) -> NetworkAnalysis {
    log::info!("Analyzing {} members and {} relationships", members.len(), relationships.len());

    let dangling = count_dangling(members, relationships);

    let clusters = find_family_clusters(members, relationships, config.min_cluster_size);
    let stats = compute_stats(members, relationships);

    let sections = non_empty_sections(group_relationships(relationships))
        .into_iter()
        .map(RelationshipSection::cloned)
        .collect();

    let unknown = unknown_types(relationships);
    if !unknown.is_empty() {
        log::debug!("Unrecognized relationship types: {:?}", unknown);
    }

    let one_way: Vec<RelationshipId> = unreciprocated(relationships).iter().map(|r| r.id).collect();

    NetworkAnalysis {
        member_count: members.len(),
        clusters,
        stats,
        sections,
        unknown_types: unknown,
        unreciprocated: one_way,
        dangling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<Member>, Vec<Relationship>) {
        let members = (1..=4).map(|id| Member::new(id, format!("Member {}", id))).collect();
        let relationships = vec![
            Relationship::new(1, 1, 2, "Father"),
            Relationship::new(2, 2, 3, "Brother"),
            Relationship::new(3, 2, 1, "Best Friend"),
            Relationship::new(4, 3, 77, "Cousin"),
        ];
        (members, relationships)
    }

    #[test]
    fn test_analyze_snapshot() {
        let (members, rels) = sample();
        let analysis = analyze_snapshot(&Config::default(), &members, &rels);
        assert_eq!(analysis.member_count, 4);
        assert_eq!(analysis.clusters.len(), 1);
        assert_eq!(analysis.clusters[0].size, 3);
        assert_eq!(analysis.stats.total, 4);
        assert_eq!(analysis.unknown_types, vec!["Best Friend".to_string()]);
        assert_eq!(analysis.unreciprocated, vec![2, 4]);
        assert_eq!(analysis.dangling, 1);

        let total: usize = analysis.sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, rels.len());
    }

    #[test]
    fn test_repeated_analysis_is_cached() {
        let (members, rels) = sample();
        let mut analyzer = RegistryAnalyzer::default();
        let first = analyzer.analyze(&members, &rels);
        let second = analyzer.analyze(&members, &rels);
        assert_eq!(first.clusters, second.clusters);
        assert_eq!(first.stats, second.stats);
        assert_eq!(analyzer.cache_hits(), 1);
    }

    #[test]
    fn test_extended_connections_for_unknown_member() {
        let (members, rels) = sample();
        let analyzer = RegistryAnalyzer::default();
        let err = analyzer.extended_connections(&members, &rels, 99).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownMember(99)));

        let found = analyzer.extended_connections(&members, &rels, 1).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].member.id, 3);
        assert_eq!(found[0].relationship, "Brother of Father");
    }
}
