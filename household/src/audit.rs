//! Household audit
//!
//! Flags snapshots the registry should not have produced. None of these stop
//! the tree from being built; they are surfaced so clerks can fix the record.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

use crate::components::{Member, MemberId};
use crate::error::TreeError;
use crate::roles;
use crate::tree::FamilyTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// No member has the role "Head".
    MissingHead,
    /// More than one member has the role "Head". The first one is used.
    MultipleHeads { ids: Vec<MemberId> },
    DuplicateId { id: MemberId },
    BlankRole { id: MemberId },
    /// Role is neither "Head" nor in the vocabulary.
    UnrecognizedRole { id: MemberId, role: String },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::MissingHead => write!(f, "household has no head"),
            Anomaly::MultipleHeads { ids } => {
                let ids: Vec<&str> = ids.iter().map(MemberId::as_str).collect();
                write!(f, "household has {} heads: {}", ids.len(), ids.join(", "))
            }
            Anomaly::DuplicateId { id } => write!(f, "member id {} appears more than once", id),
            Anomaly::BlankRole { id } => write!(f, "member {} has no role", id),
            Anomaly::UnrecognizedRole { id, role } => {
                write!(f, "member {} has unrecognized role {:?}", id, role)
            }
        }
    }
}

/// Check a member snapshot for anomalies.
///
/// Head problems come first, then per-member findings in input order.
pub fn audit_household(members: &[Member]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    let heads: Vec<MemberId> = members
        .iter()
        .filter(|m| roles::is_head(&m.role))
        .map(|m| m.id.clone())
        .collect();

    match heads.len() {
        0 if !members.is_empty() => anomalies.push(Anomaly::MissingHead),
        0 | 1 => {}
        _ => anomalies.push(Anomaly::MultipleHeads { ids: heads }),
    }

    let mut seen: HashMap<&MemberId, usize> = HashMap::new();
    for member in members {
        let count = seen.entry(&member.id).or_insert(0);
        *count += 1;
        // Report each duplicated id once
        if *count == 2 {
            anomalies.push(Anomaly::DuplicateId {
                id: member.id.clone(),
            });
        }

        if member.role.trim().is_empty() {
            anomalies.push(Anomaly::BlankRole {
                id: member.id.clone(),
            });
        } else if !roles::is_head(&member.role) && roles::classify(&member.role).is_none() {
            anomalies.push(Anomaly::UnrecognizedRole {
                id: member.id.clone(),
                role: member.role.clone(),
            });
        }
    }

    for anomaly in &anomalies {
        warn!("{}", anomaly);
    }

    anomalies
}

/// Confirm a tree lines up with the members it was built from: one node per
/// member in the same order, and every parent id present in the household.
pub fn verify_tree(members: &[Member], tree: &FamilyTree) -> Result<(), TreeError> {
    if members.len() != tree.len() {
        return Err(TreeError::CountMismatch {
            members: members.len(),
            nodes: tree.len(),
        });
    }

    for (position, (member, node)) in members.iter().zip(&tree.nodes).enumerate() {
        if member.id != node.id {
            return Err(TreeError::OrderMismatch {
                position,
                expected: member.id.clone(),
                found: node.id.clone(),
            });
        }
    }

    let known: HashSet<&MemberId> = members.iter().map(|m| &m.id).collect();
    for node in &tree.nodes {
        if let Some(parent) = node.parents.iter().find(|p| !known.contains(p)) {
            return Err(TreeError::DanglingParent {
                node: node.id.clone(),
                parent: parent.clone(),
            });
        }
    }

    Ok(())
}
