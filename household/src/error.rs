//! Error types for the fallible edges around the tree builder.

use thiserror::Error;

use crate::components::MemberId;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u8),

    #[error("JSON serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A built tree that does not line up with the members it came from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("tree has {nodes} nodes for {members} members")]
    CountMismatch { members: usize, nodes: usize },

    #[error("node {position} is {found}, expected member {expected}")]
    OrderMismatch {
        position: usize,
        expected: MemberId,
        found: MemberId,
    },

    #[error("node {node} lists parent {parent} which is not in the household")]
    DanglingParent { node: MemberId, parent: MemberId },
}
