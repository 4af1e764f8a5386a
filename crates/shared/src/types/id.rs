//! Store-generated row identifiers.
//!
//! The hosted store may key a table by a `bigserial` or by a text/uuid column,
//! so identifiers are kept in whichever shape the store echoes back.

use serde::{Deserialize, Serialize};

/// Identifier generated by the store for a persisted row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Integer key (`bigint` / `bigserial`).
    Int(i64),
    /// Text key (`uuid`, `text`).
    Text(String),
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}
