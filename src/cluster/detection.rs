//! Family cluster detection

use crate::cluster::metrics::{connection_count, generation_span, locations};
use crate::cluster::FamilyCluster;
use crate::graph::builder::GraphBuilder;
use crate::registry::{Member, MemberDirectory, MemberId, Relationship};
use std::collections::{HashMap, HashSet};

/// Find connected components of the undirected member graph.
///
/// Traversal starts from members in input order; members with no
/// relationships never start a component and so are never emitted. Edges
/// with an endpoint missing from `members` are dropped before traversal.
/// Components smaller than `min_cluster_size` are discarded. The result is
/// sorted by size, largest first, keeping discovery order among equal sizes.
pub fn find_family_clusters(
    members: &[Member],
    relationships: &[Relationship],
    min_cluster_size: usize,
) -> Vec<FamilyCluster> {
    log::info!(
        "Finding family clusters among {} members and {} relationships",
        members.len(),
        relationships.len()
    );

    let directory = MemberDirectory::new(members);

    // Build the adjacency over resolvable edges only
    let mut builder = GraphBuilder::with_capacity(relationships.len());
    let mut resolved: Vec<&Relationship> = Vec::with_capacity(relationships.len());
    for relationship in relationships {
        if directory.resolves(relationship) {
            builder.add_relationship(relationship);
            resolved.push(relationship);
        } else {
            log::debug!(
                "Ignoring relationship {} ({} -> {}): unknown member",
                relationship.id,
                relationship.member_id,
                relationship.related_member_id
            );
        }
    }
    let graph = builder.build();

    // Breadth-first discovery of components
    let mut visited: HashSet<MemberId> = HashSet::with_capacity(graph.node_count());
    let mut components: Vec<Vec<MemberId>> = Vec::new();

    for member in members {
        if visited.contains(&member.id) || !graph.contains(member.id) {
            continue;
        }

        let component = graph.component_of(member.id);
        visited.extend(component.iter().copied());

        if component.len() < min_cluster_size {
            log::debug!("Discarding component of size {} at member {}", component.len(), member.id);
            continue;
        }
        components.push(component);
    }

    // Assign each resolved edge to the component of its source member
    let mut component_of: HashMap<MemberId, usize> = HashMap::new();
    for (idx, component) in components.iter().enumerate() {
        for &id in component {
            component_of.insert(id, idx);
        }
    }
    let mut internal_edges: Vec<Vec<&Relationship>> = vec![Vec::new(); components.len()];
    for relationship in resolved {
        if let Some(&idx) = component_of.get(&relationship.member_id) {
            internal_edges[idx].push(relationship);
        }
    }

    let mut clusters: Vec<FamilyCluster> = components
        .into_iter()
        .zip(internal_edges)
        .map(|(ids, edges)| {
            let cluster_members: Vec<Member> = ids
                .iter()
                .filter_map(|&id| directory.get(id))
                .cloned()
                .collect();

            FamilyCluster {
                id: 0,
                size: cluster_members.len(),
                connection_count: connection_count(&graph, &ids),
                generation_span: generation_span(edges),
                locations: locations(&cluster_members),
                members: cluster_members,
            }
        })
        .collect();

    // Stable sort keeps discovery order among equal sizes
    clusters.sort_by(|a, b| b.size.cmp(&a.size));
    for (idx, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = idx as u32 + 1;
    }

    log::info!(
        "Found {} clusters with {} or more members",
        clusters.len(),
        min_cluster_size
    );

    clusters
}
