//! Table schema introspection
//!
//! A [`SchemaSource`] returns the columns of a table, ordered by their
//! position in the table. Two sources ship with the crate:
//!
//! - [`MySqlSchema`] - reads `information_schema.columns` over sqlx
//! - [`JsonSchema`] - reads a JSON file, for offline generation and tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod json;
pub mod mysql;

pub use json::JsonSchema;
pub use mysql::MySqlSchema;

/// Metadata for one table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name as declared in the table
    pub name: String,

    /// Raw SQL type, e.g. `varchar(255)` or `int(10) unsigned`
    #[serde(rename = "type")]
    pub declared_type: String,

    /// Key role flag: `PRI`, `UNI`, `MUL` or empty
    #[serde(default, rename = "key")]
    pub key_role: String,

    /// Position of the column in the table
    #[serde(default)]
    pub ordinal: u32,
}

impl ColumnDescriptor {
    /// Create a column descriptor
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        key_role: impl Into<String>,
        ordinal: u32,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            key_role: key_role.into(),
            ordinal,
        }
    }
}

/// Supplier of table column metadata
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Columns of `table`, sorted by ordinal position
    ///
    /// A table that does not exist, or has no columns, is an error.
    async fn table_columns(&self, table: &str) -> crate::Result<Vec<ColumnDescriptor>>;
}

/// Sort columns into table order
///
/// Stable, so columns sharing an ordinal keep the order they arrived in.
pub fn sort_by_ordinal(columns: &mut [ColumnDescriptor]) {
    columns.sort_by_key(|c| c.ordinal);
}
