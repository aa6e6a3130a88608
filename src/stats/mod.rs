//! Network-wide relationship statistics

use crate::registry::{Member, MemberDirectory, MemberId, Relationship};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// The member with the most outgoing relationships
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostConnected {
    pub member: Member,
    pub connections: usize,
}

/// Global counts over the relationship list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Raw relationship count, duplicates included
    pub total: usize,

    /// Occurrences of each relationship type, keyed by the label as stored
    pub by_type: BTreeMap<String, usize>,

    pub most_connected: Option<MostConnected>,

    /// Mean out-degree over members that have at least one outgoing edge
    pub avg_connections: f64,
}

/// Compute global statistics.
///
/// Out-degree is counted per `member_id` over known members only; members
/// without outgoing relationships are left out of the average rather than
/// counted as zero. Among equal out-degrees the member whose first
/// relationship appears earliest wins.
pub fn compute_stats(members: &[Member], relationships: &[Relationship]) -> NetworkStats {
    let directory = MemberDirectory::new(members);

    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    for relationship in relationships {
        *by_type.entry(relationship.relationship_type.clone()).or_insert(0) += 1;
    }

    // Out-degree per source, in first-appearance order
    let mut order: Vec<MemberId> = Vec::new();
    let mut out_degree: HashMap<MemberId, usize> = HashMap::new();
    for relationship in relationships {
        if !directory.contains(relationship.member_id) {
            continue;
        }
        let count = out_degree.entry(relationship.member_id).or_insert_with(|| {
            order.push(relationship.member_id);
            0
        });
        *count += 1;
    }

    let mut best: Option<(MemberId, usize)> = None;
    let mut degree_sum = 0usize;
    for id in &order {
        let degree = out_degree[id];
        degree_sum += degree;
        if best.map_or(true, |(_, max)| degree > max) {
            best = Some((*id, degree));
        }
    }

    let most_connected = best.and_then(|(id, connections)| {
        directory.get(id).map(|member| MostConnected {
            member: member.clone(),
            connections,
        })
    });

    let avg_connections = if order.is_empty() {
        0.0
    } else {
        degree_sum as f64 / order.len() as f64
    };

    NetworkStats {
        total: relationships.len(),
        by_type,
        most_connected,
        avg_connections,
    }
}
