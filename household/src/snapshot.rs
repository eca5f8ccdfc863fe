//! Snapshot import and tree export
//!
//! Reads the household member list the records API returns and writes the
//! built tree as JSON for the family tree view.

use serde::{Deserialize, Serialize};

use crate::components::Member;
use crate::error::SnapshotError;
use crate::tree::FamilyTree;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Member list of one household at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSnapshot {
    #[serde(default = "default_version")]
    pub version: u8,
    #[serde(default, alias = "household_id", skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    pub members: Vec<Member>,
}

fn default_version() -> u8 {
    SNAPSHOT_VERSION
}

/// Either a full snapshot object or the bare member array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnapshot {
    Full(HouseholdSnapshot),
    Members(Vec<Member>),
}

impl HouseholdSnapshot {
    pub fn new(household_id: Option<String>, members: Vec<Member>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            household_id,
            members,
        }
    }

    /// Parse a snapshot, accepting a bare member array as version 1.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        // Syntax errors surface here, before the untagged match
        let value: serde_json::Value = serde_json::from_str(json).map_err(SnapshotError::Parse)?;
        let snapshot = match serde_json::from_value(value).map_err(SnapshotError::Parse)? {
            RawSnapshot::Full(snapshot) => snapshot,
            RawSnapshot::Members(members) => HouseholdSnapshot::new(None, members),
        };

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }

        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Serialize)
    }
}

/// Serialize a tree to a JSON array of nodes.
pub fn export_tree(tree: &FamilyTree) -> Result<String, SnapshotError> {
    serde_json::to_string(&tree.nodes).map_err(SnapshotError::Serialize)
}

/// Same as [`export_tree`] with indentation.
pub fn export_tree_pretty(tree: &FamilyTree) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(&tree.nodes).map_err(SnapshotError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MemberId;
    use crate::tree::build_family_tree;
    use serde_json::json;

    #[test]
    fn test_parse_full_snapshot() {
        let json = json!({
            "version": 1,
            "householdId": "HH-0042",
            "members": [
                {"id": 1, "firstName": "Ramon", "lastName": "Reyes", "role": "Head"},
                {"id": 2, "firstName": "Liza", "lastName": "Reyes", "role": "Spouse"}
            ]
        })
        .to_string();

        let snapshot = HouseholdSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.household_id.as_deref(), Some("HH-0042"));
        assert_eq!(snapshot.members.len(), 2);
        assert_eq!(snapshot.members[1].id, MemberId::from("2"));
    }

    #[test]
    fn test_parse_bare_member_array() {
        let json = r#"[{"id": "7", "first_name": "Ana", "last_name": "Cruz", "role": "Head"}]"#;
        let snapshot = HouseholdSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.household_id, None);
        assert_eq!(snapshot.members[0].display_name(), "Ana Cruz");
    }

    #[test]
    fn test_missing_version_defaults() {
        let json = r#"{"members": []}"#;
        let snapshot = HouseholdSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(snapshot.members.is_empty());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let json = r#"{"version": 3, "members": []}"#;
        assert!(matches!(
            HouseholdSnapshot::from_json(json),
            Err(SnapshotError::UnsupportedVersion(3))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            HouseholdSnapshot::from_json("{\"members\": ["),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(
            HouseholdSnapshot::from_json(r#"{"members": [{"role": "Head"}]}"#),
            Err(SnapshotError::Parse(_))
        ));
    }

    #[test]
    fn test_export_shape() {
        let members = vec![
            Member::new(1u64, "Ramon", "Reyes", "Head"),
            Member::new(2u64, "Liza", "Reyes", "Spouse"),
            Member::new(3u64, "Paolo", "Reyes", "Adopted Son"),
        ];
        let tree = build_family_tree(&members);
        let exported: serde_json::Value =
            serde_json::from_str(&export_tree(&tree).unwrap()).unwrap();

        assert_eq!(
            exported[2],
            json!({
                "id": "3",
                "name": "Paolo Reyes",
                "role": "Adopted Son",
                "parents": ["1", "2"],
                "relation": "adopted"
            })
        );
        assert_eq!(exported[0]["parents"], json!([]));
    }
}
