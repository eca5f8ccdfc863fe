//! Batch builder - trees for many households at once
//!
//! Households are independent, so they are built in parallel. Each tree is
//! still produced by the single-threaded builder.

use rayon::prelude::*;
use tracing::info;

use crate::audit::{audit_household, Anomaly};
use crate::snapshot::HouseholdSnapshot;
use crate::tree::{build_family_tree, FamilyTree};

/// Built tree for one household along with its audit findings.
#[derive(Debug, Clone)]
pub struct HouseholdTree {
    pub household_id: Option<String>,
    pub tree: FamilyTree,
    pub anomalies: Vec<Anomaly>,
}

impl HouseholdTree {
    pub fn from_snapshot(snapshot: &HouseholdSnapshot) -> Self {
        Self {
            household_id: snapshot.household_id.clone(),
            tree: build_family_tree(&snapshot.members),
            anomalies: audit_household(&snapshot.members),
        }
    }
}

/// Build trees for every snapshot. Output order matches input order.
pub fn build_households(snapshots: &[HouseholdSnapshot]) -> Vec<HouseholdTree> {
    let start = std::time::Instant::now();

    let trees: Vec<HouseholdTree> = snapshots
        .par_iter()
        .map(HouseholdTree::from_snapshot)
        .collect();

    let members: usize = trees.iter().map(|t| t.tree.len()).sum();
    let flagged = trees.iter().filter(|t| !t.anomalies.is_empty()).count();
    info!(
        households = trees.len(),
        members,
        flagged,
        elapsed = ?start.elapsed(),
        "built household trees"
    );

    trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Member, MemberId};

    fn household(id: &str, roles: &[&str]) -> HouseholdSnapshot {
        let members = roles
            .iter()
            .enumerate()
            .map(|(i, role)| Member::new(format!("{}-{}", id, i), "Tala", "Bautista", *role))
            .collect();
        HouseholdSnapshot::new(Some(id.to_string()), members)
    }

    #[test]
    fn test_batch_preserves_order() {
        let snapshots: Vec<HouseholdSnapshot> = (0..50)
            .map(|n| household(&format!("HH-{}", n), &["Head", "Spouse", "Son"]))
            .collect();

        let trees = build_households(&snapshots);
        assert_eq!(trees.len(), 50);
        for (n, tree) in trees.iter().enumerate() {
            assert_eq!(tree.household_id, Some(format!("HH-{}", n)));
            let son = &tree.tree.nodes[2];
            assert_eq!(
                son.parents,
                vec![
                    MemberId::from(format!("HH-{}-0", n)),
                    MemberId::from(format!("HH-{}-1", n))
                ]
            );
        }
    }

    #[test]
    fn test_batch_carries_anomalies() {
        let snapshots = vec![
            household("ok", &["Head", "Daughter"]),
            household("headless", &["Spouse", "Daughter"]),
        ];
        let trees = build_households(&snapshots);
        assert!(trees[0].anomalies.is_empty());
        assert_eq!(trees[1].anomalies, vec![Anomaly::MissingHead]);
        assert_eq!(trees[1].tree.nodes[1].parents, vec![MemberId::from("headless-0")]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(build_households(&[]).is_empty());
    }
}
