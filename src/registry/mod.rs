//! Registry records: members and the typed relationships between them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage-assigned member identifier
pub type MemberId = u64;

/// Storage-assigned relationship identifier
pub type RelationshipId = u64;

/// Recorded gender of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A person record in the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub current_city: String,
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub current_country: String,
    #[serde(default)]
    pub birth_city: String,
    #[serde(default)]
    pub birth_state: String,
    #[serde(default)]
    pub birth_country: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_name: String,
}

impl Member {
    /// Create a member with only the identifying fields set
    pub fn new(id: MemberId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Set the current city and state
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.current_city = city.into();
        self.current_state = state.into();
        self
    }

    /// Current location rendered as `"{city}, {state}"`
    pub fn location(&self) -> String {
        format!("{}, {}", self.current_city, self.current_state)
    }
}

/// Directed, typed edge: `related_member_id` is `relationship_type` of `member_id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: RelationshipId,
    pub member_id: MemberId,
    pub related_member_id: MemberId,
    pub relationship_type: String,
    pub created_at: DateTime<Utc>,
}

impl Relationship {
    /// Create a relationship stamped with the current time
    pub fn new(
        id: RelationshipId,
        member_id: MemberId,
        related_member_id: MemberId,
        relationship_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            member_id,
            related_member_id,
            relationship_type: relationship_type.into(),
            created_at: Utc::now(),
        }
    }

    /// True when the edge points back at its own source
    pub fn is_self_loop(&self) -> bool {
        self.member_id == self.related_member_id
    }
}

/// Id lookup over a member snapshot
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory<'a> {
    by_id: HashMap<MemberId, &'a Member>,
}

impl<'a> MemberDirectory<'a> {
    /// Index a member list; on duplicate ids the first record wins
    pub fn new(members: &'a [Member]) -> Self {
        let mut by_id = HashMap::with_capacity(members.len());
        for member in members {
            by_id.entry(member.id).or_insert(member);
        }
        Self { by_id }
    }

    pub fn get(&self, id: MemberId) -> Option<&'a Member> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// True when both endpoints of the edge resolve to known members
    pub fn resolves(&self, relationship: &Relationship) -> bool {
        self.contains(relationship.member_id) && self.contains(relationship.related_member_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_wire_format() {
        let json = r#"{
            "id": 7,
            "fullName": "Asha Patel",
            "phone": "555-0101",
            "email": "asha@example.com",
            "gender": "Female",
            "maritalStatus": null,
            "currentCity": "Edison",
            "currentState": "NJ",
            "currentCountry": "USA"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.id, 7);
        assert_eq!(member.full_name, "Asha Patel");
        assert_eq!(member.gender, Some(Gender::Female));
        assert_eq!(member.marital_status, None);
        assert_eq!(member.birth_city, "");
        assert_eq!(member.location(), "Edison, NJ");
    }

    #[test]
    fn test_relationship_wire_format() {
        let json = r#"{
            "id": 1,
            "memberId": 2,
            "relatedMemberId": 3,
            "relationshipType": "Elder Sister-in-Law",
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let rel: Relationship = serde_json::from_str(json).unwrap();
        assert_eq!(rel.member_id, 2);
        assert_eq!(rel.related_member_id, 3);
        assert_eq!(rel.relationship_type, "Elder Sister-in-Law");
        assert!(!rel.is_self_loop());
    }

    #[test]
    fn test_directory_first_record_wins() {
        let members = vec![Member::new(1, "First"), Member::new(1, "Second"), Member::new(2, "Other")];
        let directory = MemberDirectory::new(&members);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get(1).map(|m| m.full_name.as_str()), Some("First"));
        assert!(directory.get(3).is_none());
        assert!(directory.resolves(&Relationship::new(1, 1, 2, "Father")));
        assert!(!directory.resolves(&Relationship::new(2, 1, 9, "Father")));
    }
}
