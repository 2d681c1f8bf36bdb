//! `MySQL` schema source

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::debug;

use super::{ColumnDescriptor, SchemaSource};
use crate::error::{Result, ScaffoldError};

// information_schema text columns come back as binary collations on some
// server versions; the casts keep sqlx decoding them as strings.
const COLUMNS_QUERY: &str = "SELECT \
        CAST(COLUMN_NAME AS CHAR) AS name, \
        CAST(COLUMN_TYPE AS CHAR) AS declared_type, \
        CAST(COLUMN_KEY AS CHAR) AS key_role, \
        CAST(ORDINAL_POSITION AS UNSIGNED) AS ordinal \
    FROM information_schema.columns \
    WHERE table_schema = DATABASE() AND table_name = ? \
    ORDER BY ORDINAL_POSITION";

/// Reads column metadata from a live `MySQL` database
pub struct MySqlSchema {
    pool: MySqlPool,
}

impl MySqlSchema {
    /// Connect to the database named in `url`
    ///
    /// A single connection is enough; tables are read one at a time.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|source| ScaffoldError::Database {
                table: String::new(),
                source,
            })?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl SchemaSource for MySqlSchema {
    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows: Vec<(String, String, String, u64)> = sqlx::query_as(COLUMNS_QUERY)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| ScaffoldError::Database {
                table: table.to_string(),
                source,
            })?;

        if rows.is_empty() {
            return Err(ScaffoldError::TableNotFound(table.to_string()));
        }

        debug!(table, columns = rows.len(), "fetched column metadata");

        // ORDINAL_POSITION is 1-based; descriptors are 0-based.
        Ok(rows
            .into_iter()
            .map(|(name, declared_type, key_role, ordinal)| ColumnDescriptor {
                name,
                declared_type,
                key_role,
                ordinal: u32::try_from(ordinal.saturating_sub(1)).unwrap_or(u32::MAX),
            })
            .collect())
    }
}
