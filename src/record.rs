//! Normalized inventory records.

use serde::{Deserialize, Serialize};

/// A normalized, read-only view of one inventory item.
///
/// Records are immutable once produced and carry no relationships to each
/// other. Uniqueness of `id` is the provider's guarantee; nothing is
/// deduplicated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Provider-assigned identifier (instance id, DB identifier)
    pub id: String,
    /// What the resource is (instance type, DB engine)
    pub kind: String,
    /// Where the resource stands (instance state, DB instance class)
    pub status: String,
}

impl ResourceRecord {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            status: status.into(),
        }
    }
}
