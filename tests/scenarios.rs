use family_registry_graph::classify::grouping::group_relationships;
use family_registry_graph::data::preprocessing::relationships_for;
use family_registry_graph::{
    classify, compute_stats, find_clusters, find_extended, Member, Relationship, RelationshipGroup,
};

fn members(n: u64) -> Vec<Member> {
    (1..=n)
        .map(|id| Member::new(id, format!("Member {}", id)).with_location("Edison", "NJ"))
        .collect()
}

#[test]
fn three_member_chain_forms_one_cluster() {
    let members = members(4);
    let relationships = vec![
        Relationship::new(1, 1, 2, "Father"),
        Relationship::new(2, 2, 3, "Brother"),
    ];

    let clusters = find_clusters(&members, &relationships);
    assert_eq!(clusters.len(), 1);

    let cluster = &clusters[0];
    assert_eq!(cluster.size, 3);
    assert_eq!(cluster.member_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(cluster.connection_count, 2);
    assert_eq!(cluster.locations, vec!["Edison, NJ".to_string()]);
    assert!(clusters.iter().all(|c| !c.contains(4)));
}

#[test]
fn unknown_label_lands_in_other_group() {
    let classification = classify("Best Friend");
    assert_eq!(classification.group, RelationshipGroup::Other);
    assert_eq!(classification.group.priority(), 10);

    let relationships = vec![Relationship::new(1, 1, 2, "Best Friend")];
    let sections = group_relationships(&relationships);
    let other = sections
        .iter()
        .find(|s| s.group == RelationshipGroup::Other)
        .unwrap();
    assert_eq!(other.label, "Other Family Connections");
    assert_eq!(other.items.len(), 1);
}

#[test]
fn average_connections_excludes_silent_members() {
    let members = members(9);
    let mut relationships = vec![
        Relationship::new(1, 1, 4, "Son"),
        Relationship::new(2, 1, 5, "Daughter"),
    ];
    for (id, target) in (3..=6).zip(5..=8) {
        relationships.push(Relationship::new(id, 3, target, "Cousin"));
    }

    let stats = compute_stats(&members, &relationships);
    assert_eq!(stats.avg_connections, 3.0);
    assert_eq!(stats.most_connected.unwrap().member.id, 3);
}

#[test]
fn extended_connections_capped_at_ten() {
    let members = members(30);
    let mut relationships = vec![
        Relationship::new(1, 1, 2, "Father"),
        Relationship::new(2, 1, 3, "Mother"),
    ];
    for target in 4..=30 {
        relationships.push(Relationship::new(100 + target, 2 + target % 2, target, "Sibling"));
    }

    let direct = relationships_for(1, &relationships);
    let found = find_extended(&members[0], &direct, &relationships, &members);
    assert_eq!(found.len(), 10);

    let direct_ids: Vec<u64> = direct.iter().map(|r| r.related_member_id).collect();
    for connection in &found {
        assert_ne!(connection.member.id, 1);
        assert!(!direct_ids.contains(&connection.member.id));
        assert_eq!(connection.distance, 2);
    }

    // Father's relatives are exhausted before Mother's are considered
    assert!(found.iter().all(|c| c.relationship == "Sibling of Father"));
}

#[test]
fn empty_inputs_produce_empty_outputs() {
    assert!(find_clusters(&[], &[]).is_empty());

    let stats = compute_stats(&[], &[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_connections, 0.0);

    let focal = Member::new(1, "Alone");
    assert!(find_extended(&focal, &[], &[], &[]).is_empty());
}
