//! Family Tree Builder
//!
//! Infers a parent-pointer tree from a household's member list. The head is
//! the single generational reference point: the spouse co-parents the
//! children, and the head's own parents and grandparents sit above without
//! further links.

use tracing::debug;

use crate::components::{Member, MemberId, TreeNode};
use crate::roles::{self, RoleCategory};

/// First-match lookups shared by every member's rule evaluation.
#[derive(Debug, Default)]
struct HouseholdIndex<'a> {
    head: Option<&'a MemberId>,
    spouse: Option<&'a MemberId>,
    /// Members whose role is in the parents category, in input order.
    parents: Vec<&'a MemberId>,
}

impl<'a> HouseholdIndex<'a> {
    fn scan(members: &'a [Member]) -> Self {
        let mut index = HouseholdIndex::default();

        for member in members {
            if roles::is_head(&member.role) {
                index.head.get_or_insert(&member.id);
                continue;
            }
            match roles::classify(&member.role) {
                Some(RoleCategory::Spouse) => {
                    index.spouse.get_or_insert(&member.id);
                }
                Some(RoleCategory::Parent) => index.parents.push(&member.id),
                _ => {}
            }
        }

        index
    }

    fn first_parent(&self) -> Option<&'a MemberId> {
        self.parents.first().copied()
    }
}

/// Inferred tree for one household, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyTree {
    pub nodes: Vec<TreeNode>,
}

impl FamilyTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &MemberId) -> Option<&TreeNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// Nodes with no parents.
    pub fn roots(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|node| node.is_root())
    }

    /// Nodes listing `id` as a parent, in input order.
    pub fn children_of<'t>(&'t self, id: &'t MemberId) -> impl Iterator<Item = &'t TreeNode> {
        self.nodes.iter().filter(move |node| node.parents.contains(id))
    }

    pub fn into_nodes(self) -> Vec<TreeNode> {
        self.nodes
    }
}

/// Build the family tree for a household snapshot.
///
/// Total over its input: missing relatives only mean fewer parent links.
/// Produces one node per member in input order.
pub fn build_family_tree(members: &[Member]) -> FamilyTree {
    let index = HouseholdIndex::scan(members);

    let nodes = members
        .iter()
        .map(|member| TreeNode {
            id: member.id.clone(),
            name: member.display_name(),
            role: member.role.clone(),
            parents: infer_parents(&member.role, &index),
            relation: roles::relation_type(&member.role),
        })
        .collect();

    FamilyTree { nodes }
}

/// Apply the first matching rule for `role`.
fn infer_parents(role: &str, index: &HouseholdIndex<'_>) -> Vec<MemberId> {
    let head = || index.head.into_iter().cloned().collect::<Vec<_>>();

    if roles::is_head(role) {
        return Vec::new();
    }

    let parents = match roles::classify(role) {
        Some(RoleCategory::Spouse) => head(),
        Some(RoleCategory::Child) => index
            .head
            .into_iter()
            .chain(index.spouse)
            .cloned()
            .collect(),
        // Parents of the head are the top generation
        Some(RoleCategory::Parent) => Vec::new(),
        // Only the first parent is linked, even when both are recorded
        Some(RoleCategory::Grandparent) => index.first_parent().into_iter().cloned().collect(),
        Some(RoleCategory::Sibling) => index.parents.iter().map(|id| (*id).clone()).collect(),
        _ if roles::is_in_law(role) => index
            .spouse
            .or(index.head)
            .into_iter()
            .cloned()
            .collect(),
        _ => head(),
    };

    debug!(
        role,
        category = roles::classify(role).map_or("none", |c| c.name()),
        parents = parents.len(),
        "inferred parents"
    );
    parents
}
