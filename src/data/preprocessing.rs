//! Data preprocessing and hygiene checks for relationship lists

use crate::registry::{Member, MemberDirectory, MemberId, Relationship};
use std::collections::HashSet;

/// Number of relationships with an endpoint missing from `members`
pub fn count_dangling(members: &[Member], relationships: &[Relationship]) -> usize {
    let directory = MemberDirectory::new(members);
    let dangling = relationships.iter().filter(|r| !directory.resolves(r)).count();

    if dangling > 0 {
        log::debug!("{} relationships reference unknown members", dangling);
    }

    dangling
}

/// Relationships `A -> B` with no relationship of any type `B -> A`.
///
/// Inverse types are not required to match; these are reported for review
/// and never repaired.
pub fn unreciprocated(relationships: &[Relationship]) -> Vec<&Relationship> {
    let pairs: HashSet<(MemberId, MemberId)> = relationships
        .iter()
        .map(|r| (r.member_id, r.related_member_id))
        .collect();

    relationships
        .iter()
        .filter(|r| !r.is_self_loop())
        .filter(|r| !pairs.contains(&(r.related_member_id, r.member_id)))
        .collect()
}

/// The member's direct (outgoing) relationships, input order
pub fn relationships_for(member: MemberId, relationships: &[Relationship]) -> Vec<Relationship> {
    relationships
        .iter()
        .filter(|r| r.member_id == member)
        .cloned()
        .collect()
}
