//! Role vocabulary
//!
//! Fixed tables of the role strings the registry forms offer. Matching is
//! exact and case-sensitive; only the "in law", "step" and "adopted"
//! checks look inside the string.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::components::RelationType;

/// Role string of the household head.
pub const HEAD_ROLE: &str = "Head";

const SPOUSE_ROLES: &[&str] = &["Spouse", "Partner"];

const CHILD_ROLES: &[&str] = &[
    "Son", "Daughter", "Stepdaughter", "Stepson", "Adopted Daughter", "Adopted Son",
    "Stepdaughter in law", "Stepson in law", "Daughter in law", "Son in law",
];

/// Parents of the head.
const PARENT_ROLES: &[&str] = &[
    "Father", "Mother", "Stepfather", "Stepmother", "Father in law", "Mother in law",
];

const GRANDPARENT_ROLES: &[&str] = &[
    "Grandfather", "Grandmother", "Step Grandfather", "Step Grandmother",
];

const SIBLING_ROLES: &[&str] = &[
    "Brother", "Sister", "Stepbrother", "Stepsister", "Half Brother", "Half Sister",
];

const EXTENDED_ROLES: &[&str] = &[
    "Grandson", "Granddaughter", "Uncle", "Aunt", "Nephew", "Niece", "Cousin",
    "Brother in law", "Sister in law",
];

const OTHER_ROLES: &[&str] = &["Boarder", "Domestic Helper", "Other Relative", "Non-relative"];

/// Bucket a recognized role string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    Spouse,
    Child,
    Parent,
    Grandparent,
    Sibling,
    ExtendedFamily,
    Other,
}

impl RoleCategory {
    pub const ALL: [RoleCategory; 7] = [
        RoleCategory::Spouse,
        RoleCategory::Child,
        RoleCategory::Parent,
        RoleCategory::Grandparent,
        RoleCategory::Sibling,
        RoleCategory::ExtendedFamily,
        RoleCategory::Other,
    ];

    /// Role strings that belong to this category.
    pub fn roles(&self) -> &'static [&'static str] {
        match self {
            RoleCategory::Spouse => SPOUSE_ROLES,
            RoleCategory::Child => CHILD_ROLES,
            RoleCategory::Parent => PARENT_ROLES,
            RoleCategory::Grandparent => GRANDPARENT_ROLES,
            RoleCategory::Sibling => SIBLING_ROLES,
            RoleCategory::ExtendedFamily => EXTENDED_ROLES,
            RoleCategory::Other => OTHER_ROLES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoleCategory::Spouse => "spouse",
            RoleCategory::Child => "children",
            RoleCategory::Parent => "parents",
            RoleCategory::Grandparent => "grandparents",
            RoleCategory::Sibling => "siblings",
            RoleCategory::ExtendedFamily => "extended",
            RoleCategory::Other => "others",
        }
    }
}

static ROLE_TABLE: Lazy<HashMap<&'static str, RoleCategory>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for category in RoleCategory::ALL {
        for role in category.roles() {
            table.insert(*role, category);
        }
    }
    table
});

/// Category of a role string, or `None` when it is not in the vocabulary.
/// `"Head"` is not a category and also returns `None`.
pub fn classify(role: &str) -> Option<RoleCategory> {
    ROLE_TABLE.get(role).copied()
}

pub fn is_head(role: &str) -> bool {
    role == HEAD_ROLE
}

/// True when `role` contains "in law", ignoring case.
pub fn is_in_law(role: &str) -> bool {
    contains_ignore_case(role, "in law")
}

/// Relation of a member to their tree parents, read off the role text.
pub fn relation_type(role: &str) -> RelationType {
    if contains_ignore_case(role, "adopted") {
        RelationType::Adopted
    } else if contains_ignore_case(role, "step") {
        RelationType::Step
    } else {
        RelationType::Blood
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
