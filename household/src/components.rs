//! Household data types
//!
//! Members come in from the records layer; tree nodes go out to the renderer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// String form of a member identifier.
///
/// The records API hands out numeric ids, older exports use strings. Both
/// deserialize to the same value so `1` and `"1"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        MemberId(id.to_string())
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        MemberId(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        MemberId(id)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => MemberId(n.to_string()),
            RawId::Signed(n) => MemberId(n.to_string()),
            RawId::Text(s) => MemberId(s),
        })
    }
}

// ============================================================================
// Input
// ============================================================================

/// A household member as recorded in the resident registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    #[serde(default, alias = "first_name")]
    pub first_name: String,
    #[serde(default, alias = "last_name")]
    pub last_name: String,
    /// Free text. Usually drawn from the role vocabulary, never trusted to be.
    #[serde(default)]
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// First and last name joined by a space, skipping empty parts.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Output
// ============================================================================

/// How a member is related to the parents they are linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Blood,
    Step,
    Adopted,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Blood => "blood",
            RelationType::Step => "step",
            RelationType::Adopted => "adopted",
        }
    }
}

/// One member's place in the inferred family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    /// Parent ids, in the order the inference rules add them.
    pub parents: Vec<MemberId>,
    pub relation: RelationType,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_from_number_or_string() {
        let from_number: MemberId = serde_json::from_str("42").unwrap();
        let from_string: MemberId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");

        let negative: MemberId = serde_json::from_str("-3").unwrap();
        assert_eq!(negative, MemberId::from("-3"));
    }

    #[test]
    fn test_member_accepts_both_field_casings() {
        let camel: Member = serde_json::from_str(
            r#"{"id": 7, "firstName": "Maria", "lastName": "Santos", "role": "Head"}"#,
        )
        .unwrap();
        let snake: Member = serde_json::from_str(
            r#"{"id": "7", "first_name": "Maria", "last_name": "Santos", "role": "Head"}"#,
        )
        .unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_display_name_skips_empty_parts() {
        assert_eq!(Member::new(1u64, "Jose", "Rizal", "Head").display_name(), "Jose Rizal");
        assert_eq!(Member::new(2u64, "", "Rizal", "Son").display_name(), "Rizal");
        assert_eq!(Member::new(3u64, " Ana ", "", "Daughter").display_name(), "Ana");
        assert_eq!(Member::new(4u64, "", "", "Boarder").display_name(), "");
    }

    #[test]
    fn test_relation_serializes_lowercase() {
        let json = serde_json::to_string(&RelationType::Adopted).unwrap();
        assert_eq!(json, "\"adopted\"");
    }
}
