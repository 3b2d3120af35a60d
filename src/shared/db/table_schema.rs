// src/shared/db/table_schema.rs
use async_trait::async_trait;

use super::StoreFault;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Table does not exist: {0}")]
    TableMissing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StoreFault> for SchemaError {
    fn from(fault: StoreFault) -> Self {
        match fault {
            StoreFault::TableMissing(msg) => SchemaError::TableMissing(msg),
            other => SchemaError::DatabaseError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port (table lifecycle)
// ──────────────────────────────────────────────────────────
//

/// Physical lifecycle of a single backing table.
///
/// Every table-backed repository pairs with one of these. `initialize` is
/// expected to run once before the repository is used.
#[async_trait]
pub trait TableSchema: Send + Sync {
    fn table_name(&self) -> &'static str;

    /// Create the table if it is not already there.
    async fn initialize(&self) -> Result<(), SchemaError>;

    /// Delete every row, keeping the schema and identity sequence.
    /// Returns the number of rows removed.
    async fn clear_table(&self) -> Result<u64, SchemaError>;

    /// Drop the table. Queries against it fail afterwards.
    async fn drop_table(&self) -> Result<(), SchemaError>;
}
