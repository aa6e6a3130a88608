use family_registry_graph::classify::grouping::group_relationships;
use family_registry_graph::data::preprocessing::relationships_for;
use family_registry_graph::{compute_stats, find_clusters, find_extended, Member, Relationship};
use proptest::prelude::*;
use std::collections::HashSet;

const LABELS: &[&str] = &[
    "Father", "Mother", "Wife", "Son", "Elder Brother", "Cousin", "Best Friend",
    "Paternal Grandmother", "Sister-in-Law", "Uncle", "Grandson", "neighbour",
];

fn snapshot() -> impl Strategy<Value = (Vec<Member>, Vec<Relationship>)> {
    (1u64..25).prop_flat_map(|n| {
        let edge = (1..=n, 1..=n, 0..LABELS.len());
        prop::collection::vec(edge, 0..40).prop_map(move |edges| {
            let members: Vec<Member> = (1..=n)
                .map(|id| Member::new(id, format!("Member {}", id)).with_location(format!("City {}", id % 3), "ST"))
                .collect();
            let relationships = edges
                .into_iter()
                .enumerate()
                .map(|(i, (a, b, label))| Relationship::new(i as u64 + 1, a, b, LABELS[label]))
                .collect();
            (members, relationships)
        })
    })
}

proptest! {
    #[test]
    fn grouping_is_a_partition((_, relationships) in snapshot()) {
        let sections = group_relationships(&relationships);
        let mut seen: Vec<u64> = sections
            .iter()
            .flat_map(|s| s.items.iter().map(|r| r.id))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<u64> = relationships.iter().map(|r| r.id).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn clustering_is_idempotent((members, relationships) in snapshot()) {
        let first = find_clusters(&members, &relationships);
        let second = find_clusters(&members, &relationships);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clusters_cover_connected_members((members, relationships) in snapshot()) {
        let clusters = find_clusters(&members, &relationships);

        let mut clustered: HashSet<u64> = HashSet::new();
        for cluster in &clusters {
            prop_assert!(cluster.size >= 2);
            for id in cluster.member_ids() {
                // Each member appears in at most one cluster
                prop_assert!(clustered.insert(id));
            }
        }

        let connected: HashSet<u64> = relationships
            .iter()
            .filter(|r| !r.is_self_loop())
            .flat_map(|r| [r.member_id, r.related_member_id])
            .collect();
        for member in &members {
            let has_edges = relationships
                .iter()
                .any(|r| r.member_id == member.id || r.related_member_id == member.id);
            if !has_edges {
                prop_assert!(!clustered.contains(&member.id));
            }
            if connected.contains(&member.id) {
                prop_assert!(clustered.contains(&member.id));
            }
        }

        for pair in clusters.windows(2) {
            prop_assert!(pair[0].size >= pair[1].size);
        }
    }

    #[test]
    fn connection_count_bounded_by_edges((members, relationships) in snapshot()) {
        let clusters = find_clusters(&members, &relationships);
        let total: usize = clusters.iter().map(|c| c.connection_count).sum();
        prop_assert!(total <= relationships.len());
        for cluster in &clusters {
            prop_assert!(cluster.connection_count >= cluster.size - 1);
            prop_assert!(cluster.generation_span <= 4);
        }
    }

    #[test]
    fn extended_never_overlaps_direct((members, relationships) in snapshot()) {
        let focal = &members[0];
        let direct = relationships_for(focal.id, &relationships);
        let found = find_extended(focal, &direct, &relationships, &members);

        prop_assert!(found.len() <= 10);
        let direct_ids: HashSet<u64> = direct.iter().map(|r| r.related_member_id).collect();
        let mut seen = HashSet::new();
        for connection in &found {
            prop_assert_ne!(connection.member.id, focal.id);
            prop_assert!(!direct_ids.contains(&connection.member.id));
            prop_assert!(seen.insert(connection.member.id));
        }
    }

    #[test]
    fn average_is_finite_and_excludes_silent((members, relationships) in snapshot()) {
        let stats = compute_stats(&members, &relationships);
        prop_assert!(stats.avg_connections.is_finite());

        let sources: HashSet<u64> = relationships.iter().map(|r| r.member_id).collect();
        if sources.is_empty() {
            prop_assert_eq!(stats.avg_connections, 0.0);
        } else {
            let expected = relationships.len() as f64 / sources.len() as f64;
            prop_assert!((stats.avg_connections - expected).abs() < 1e-9);
        }
    }
}
