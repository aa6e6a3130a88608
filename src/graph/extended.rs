//! Second-degree ("extended") relatives of a focal member

use crate::registry::{Member, MemberDirectory, MemberId, Relationship};
use serde::Serialize;
use std::collections::HashSet;

/// Hop count of every extended connection
pub const EXTENDED_DISTANCE: u8 = 2;

/// A relative reached through exactly one intermediate member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedConnection {
    /// The second-degree member
    pub member: Member,

    /// `"{indirect type} of {direct type}"`, e.g. "Brother of Father"
    pub relationship: String,

    /// `["{direct type} of {focal}", "{indirect type} of {intermediate}"]`
    pub path: [String; 2],

    pub distance: u8,
}

/// Walk one hop past the focal member's direct relationships.
///
/// Candidates already directly related, the focal member itself, and members
/// reached earlier through another direct relationship are skipped, so the
/// first path found wins. Output stops at `limit` entries. Edges whose
/// intermediate or target member is missing from `directory` are ignored.
pub fn find_extended_connections(
    focal: &Member,
    direct: &[Relationship],
    all: &[Relationship],
    directory: &MemberDirectory<'_>,
    limit: usize,
) -> Vec<ExtendedConnection> {
    let mut visited: HashSet<MemberId> = HashSet::with_capacity(direct.len() + 1);
    visited.insert(focal.id);
    visited.extend(direct.iter().map(|r| r.related_member_id));

    let mut connections = Vec::new();
    if limit == 0 {
        return connections;
    }

    'direct: for direct_rel in direct {
        let Some(intermediate) = directory.get(direct_rel.related_member_id) else {
            log::debug!(
                "Skipping relationship {}: member {} not in registry",
                direct_rel.id,
                direct_rel.related_member_id
            );
            continue;
        };

        for indirect_rel in all
            .iter()
            .filter(|r| r.member_id == direct_rel.related_member_id)
        {
            if visited.contains(&indirect_rel.related_member_id) {
                continue;
            }
            let Some(target) = directory.get(indirect_rel.related_member_id) else {
                continue;
            };

            visited.insert(target.id);
            connections.push(ExtendedConnection {
                member: target.clone(),
                relationship: format!(
                    "{} of {}",
                    indirect_rel.relationship_type, direct_rel.relationship_type
                ),
                path: [
                    format!("{} of {}", direct_rel.relationship_type, focal.full_name),
                    format!("{} of {}", indirect_rel.relationship_type, intermediate.full_name),
                ],
                distance: EXTENDED_DISTANCE,
            });

            if connections.len() >= limit {
                break 'direct;
            }
        }
    }

    connections
}
