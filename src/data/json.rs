//! JSON file handling for registry snapshots
//!
//! Files hold the same shapes the registry REST API serves for
//! `GET /api/members` and `GET /api/relationships`.

use crate::error::RegistryError;
use crate::registry::{Member, Relationship};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load the member list and reject duplicate ids
pub fn load_members(path: impl AsRef<Path>) -> Result<Vec<Member>, RegistryError> {
    let members: Vec<Member> = read_json(path.as_ref())?;

    let mut seen = HashSet::with_capacity(members.len());
    for member in &members {
        if !seen.insert(member.id) {
            return Err(RegistryError::DuplicateMemberId(member.id));
        }
    }

    log::info!("Loaded {} members", members.len());
    Ok(members)
}

/// Load the relationship list
pub fn load_relationships(path: impl AsRef<Path>) -> Result<Vec<Relationship>, RegistryError> {
    let relationships: Vec<Relationship> = read_json(path.as_ref())?;
    log::info!("Loaded {} relationships", relationships.len());
    Ok(relationships)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RegistryError> {
    log::info!("Reading JSON file: {}", path.display());

    if !path.exists() {
        return Err(RegistryError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| RegistryError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_members() {
        let file = write_temp(
            r#"[{"id": 1, "fullName": "Ravi Shah", "gender": "Male"},
                {"id": 2, "fullName": "Meera Shah", "gender": null}]"#,
        );
        let members = load_members(file.path()).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].full_name, "Meera Shah");
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let file = write_temp(r#"[{"id": 1, "fullName": "A"}, {"id": 1, "fullName": "B"}]"#);
        let err = load_members(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateMemberId(1)));
    }

    #[test]
    fn test_member_without_id_rejected() {
        let file = write_temp(r#"[{"fullName": "No Id"}, {"id": 1, "fullName": "Ravi Shah"}]"#);
        let err = load_members(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_member_without_name_rejected() {
        let file = write_temp(r#"[{"id": 3, "phone": "555-0100"}]"#);
        let err = load_members(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_relationship_without_timestamp_rejected() {
        let file = write_temp(
            r#"[{"id": 10, "memberId": 1, "relatedMemberId": 2, "relationshipType": "Wife"}]"#,
        );
        let err = load_relationships(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_relationships("/nonexistent/relationships.json").unwrap_err();
        assert!(matches!(err, RegistryError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_relationships() {
        let file = write_temp(r#"[{"id": 1, "memberId": "one"}]"#);
        let err = load_relationships(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_relationships() {
        let file = write_temp(
            r#"[{"id": 10, "memberId": 1, "relatedMemberId": 2,
                 "relationshipType": "Wife", "createdAt": "2024-01-05T08:30:00Z"}]"#,
        );
        let rels = load_relationships(file.path()).unwrap();
        assert_eq!(rels[0].relationship_type, "Wife");
        assert_eq!(rels[0].related_member_id, 2);
    }
}
