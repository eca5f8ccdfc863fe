//! Household Family Tree
//!
//! Infers a parent-pointer family tree from a household's member list,
//! classifying each member's free-text role against a fixed vocabulary.

pub mod audit;
pub mod batch;
pub mod components;
pub mod error;
pub mod roles;
pub mod snapshot;
pub mod tree;

#[cfg(feature = "node")]
pub mod napi_bindings;

pub use audit::{audit_household, verify_tree, Anomaly};
pub use batch::{build_households, HouseholdTree};
pub use components::*;
pub use error::{SnapshotError, TreeError};
pub use roles::RoleCategory;
pub use snapshot::{export_tree, export_tree_pretty, HouseholdSnapshot};
pub use tree::{build_family_tree, FamilyTree};
