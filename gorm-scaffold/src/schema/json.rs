//! JSON file schema source
//!
//! The file maps table names to column lists:
//!
//! ```json
//! {
//!   "t_sys_user": [
//!     { "name": "id", "type": "int(10) unsigned", "key": "PRI", "ordinal": 0 },
//!     { "name": "created_at", "type": "datetime", "key": "", "ordinal": 1 }
//!   ]
//! }
//! ```
//!
//! Columns without an `ordinal` take their position in the list.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use super::{sort_by_ordinal, ColumnDescriptor, SchemaSource};
use crate::error::{Result, ScaffoldError};

#[derive(serde::Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    declared_type: String,
    #[serde(default)]
    key: String,
    ordinal: Option<u32>,
}

/// Column metadata loaded from a JSON file
#[derive(Debug, Clone, Default)]
pub struct JsonSchema {
    tables: HashMap<String, Vec<ColumnDescriptor>>,
}

impl JsonSchema {
    /// Load and parse a schema file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::SchemaFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ScaffoldError::SchemaParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a schema document
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<RawColumn>> = serde_json::from_str(content)?;
        let tables = raw
            .into_iter()
            .map(|(table, columns)| {
                let mut columns: Vec<_> = columns
                    .into_iter()
                    .enumerate()
                    .map(|(index, c)| ColumnDescriptor {
                        name: c.name,
                        declared_type: c.declared_type,
                        key_role: c.key,
                        ordinal: c
                            .ordinal
                            .unwrap_or_else(|| u32::try_from(index).unwrap_or(u32::MAX)),
                    })
                    .collect();
                sort_by_ordinal(&mut columns);
                (table, columns)
            })
            .collect();
        Ok(Self { tables })
    }
}

#[async_trait]
impl SchemaSource for JsonSchema {
    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        match self.tables.get(table) {
            Some(columns) if !columns.is_empty() => Ok(columns.clone()),
            _ => Err(ScaffoldError::TableNotFound(table.to_string())),
        }
    }
}
