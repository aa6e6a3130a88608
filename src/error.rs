//! Error types for registry input handling

use crate::registry::MemberId;
use thiserror::Error;

/// Errors raised at the boundary where registry data enters the analyzer
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate member id {0} in member list")]
    DuplicateMemberId(MemberId),

    #[error("Member {0} not found in registry")]
    UnknownMember(MemberId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
