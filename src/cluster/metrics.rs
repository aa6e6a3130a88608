//! Cluster statistics and metrics

use crate::graph::FamilyGraph;
use crate::registry::{Member, MemberId, Relationship};
use itertools::Itertools;
use std::collections::HashSet;

/// Coarse generation bucket inferred from a relationship-type label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationCategory {
    Grandparent,
    Parent,
    Child,
    Same,
}

impl GenerationCategory {
    /// Case-insensitive substring match. Labels such as "Son" or "Cousin"
    /// fall into `Same`; only the literal markers below are recognized.
    pub fn of(relationship_type: &str) -> Self {
        let lower = relationship_type.to_lowercase();
        if lower.contains("grandfather") || lower.contains("grandmother") {
            GenerationCategory::Grandparent
        } else if lower.contains("father") || lower.contains("mother") {
            GenerationCategory::Parent
        } else if lower.contains("child") {
            GenerationCategory::Child
        } else {
            GenerationCategory::Same
        }
    }
}

/// Undirected connections among `members`: sum of adjacency sizes halved
pub fn connection_count(graph: &FamilyGraph, members: &[MemberId]) -> usize {
    let degree_sum: usize = members.iter().map(|&m| graph.degree(m)).sum();
    degree_sum / 2
}

/// Number of distinct generation categories among the given edges
pub fn generation_span<'a, I>(relationships: I) -> usize
where
    I: IntoIterator<Item = &'a Relationship>,
{
    relationships
        .into_iter()
        .map(|r| GenerationCategory::of(&r.relationship_type))
        .collect::<HashSet<_>>()
        .len()
}

/// Distinct member locations, first-seen order
pub fn locations<'a, I>(members: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Member>,
{
    members.into_iter().map(Member::location).unique().collect()
}
