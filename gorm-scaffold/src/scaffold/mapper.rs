//! SQL column type to Go field type mapping
//!
//! The mapping is a best-effort heuristic over `MySQL` type strings. The base
//! keyword of the declared type (length/precision suffix removed, first
//! word, lower-cased) is matched against a fixed table; anything unknown is
//! sniffed by substring and finally falls back to `string`. There is no error
//! path.
//!
//! # Examples
//!
//! ```
//! use gorm_scaffold::scaffold::{StorageType, map_column};
//! use gorm_scaffold::schema::ColumnDescriptor;
//!
//! let field = map_column(&ColumnDescriptor::new("id", "int(10) unsigned", "PRI", 0));
//! assert_eq!(field.storage_type, StorageType::Uint);
//! assert_eq!(field.persistence_tag, "id,primary");
//! ```

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use super::naming::Naming;
use crate::schema::ColumnDescriptor;

static PRECISION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+\)").expect("precision suffix pattern is valid"));

/// Go type of a generated struct field
///
/// Serializes as its Go spelling so templates can print it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// `[]byte`
    Bytes,
    /// `int`
    Int,
    /// `uint`
    Uint,
    /// `int64`
    Int64,
    /// `uint64`
    Uint64,
    /// `float64`
    Float64,
    /// `bool`
    Bool,
    /// `*time.Time`
    Timestamp,
    /// `string`
    String,
}

impl StorageType {
    /// Go spelling of the type
    #[must_use]
    pub const fn go_type(self) -> &'static str {
        match self {
            Self::Bytes => "[]byte",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Timestamp => "*time.Time",
            Self::String => "string",
        }
    }

    /// Map a declared SQL type
    ///
    /// # Examples
    ///
    /// ```
    /// use gorm_scaffold::scaffold::StorageType;
    ///
    /// assert_eq!(StorageType::from_sql("varchar(255)"), StorageType::String);
    /// assert_eq!(StorageType::from_sql("decimal(10,2)"), StorageType::Float64);
    /// assert_eq!(StorageType::from_sql("BIGINT(20) UNSIGNED"), StorageType::Uint64);
    /// ```
    #[must_use]
    pub fn from_sql(declared_type: &str) -> Self {
        let base = base_keyword(declared_type);
        let unsigned = declared_type.to_lowercase().contains("unsigned");

        match base.as_str() {
            "binary" | "varbinary" | "blob" | "tinyblob" | "mediumblob" | "longblob" => Self::Bytes,
            "bit" | "int" | "tinyint" | "smallint" | "mediumint" => {
                if unsigned {
                    Self::Uint
                } else {
                    Self::Int
                }
            }
            "bigint" => {
                if unsigned {
                    Self::Uint64
                } else {
                    Self::Int64
                }
            }
            "float" | "double" | "decimal" => Self::Float64,
            "bool" => Self::Bool,
            "datetime" | "timestamp" | "date" | "time" => Self::Timestamp,
            other => Self::sniff(other),
        }
    }

    // Order matters: "int64" before "int", "text"/"char" before "date"/"time".
    fn sniff(base: &str) -> Self {
        if base.contains("int64") {
            Self::Int64
        } else if base.contains("int") {
            Self::Int
        } else if base.contains("text") || base.contains("char") {
            Self::String
        } else if base.contains("float") || base.contains("double") {
            Self::Float64
        } else if base.contains("bool") {
            Self::Bool
        } else if base.contains("binary") || base.contains("blob") {
            Self::Bytes
        } else if base.contains("date") || base.contains("time") {
            Self::Timestamp
        } else {
            Self::String
        }
    }
}

impl Serialize for StorageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.go_type())
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_type())
    }
}

/// A table column as a Go struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Original column name
    pub column_name: String,
    /// Exported Go field name (`PascalCase`)
    pub field_name: String,
    /// Go type
    pub storage_type: StorageType,
    /// Value of the `gorm` struct tag
    pub persistence_tag: String,
    /// Value of the `json` struct tag (lowerCamelCase)
    pub serialization_tag: String,
}

/// Lower-cased first word of a declared type with any `(...)` removed
///
/// # Examples
///
/// ```
/// use gorm_scaffold::scaffold::mapper::base_keyword;
///
/// assert_eq!(base_keyword("INT(10) UNSIGNED"), "int");
/// assert_eq!(base_keyword("enum('a','b')"), "enum");
/// ```
#[must_use]
pub fn base_keyword(declared_type: &str) -> String {
    let stripped = PRECISION_SUFFIX.replace_all(declared_type, "");
    stripped
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Map one column
#[must_use]
pub fn map_column(column: &ColumnDescriptor) -> FieldDescriptor {
    let storage_type = StorageType::from_sql(&column.declared_type);
    debug!(
        column = %column.name,
        declared_type = %column.declared_type,
        go_type = storage_type.go_type(),
        "mapped column"
    );

    let key_role = column.key_role.to_lowercase();
    let mut persistence_tag = column.name.clone();
    if key_role.contains("pri") {
        persistence_tag.push_str(",primary");
    }
    if key_role.contains("uni") {
        persistence_tag.push_str(",unique");
    }

    FieldDescriptor {
        column_name: column.name.clone(),
        field_name: Naming::to_pascal_case(&column.name),
        storage_type,
        persistence_tag,
        serialization_tag: Naming::to_camel_case(&column.name),
    }
}

/// Map columns in ordinal order
///
/// Columns sharing an ordinal keep the order they were passed in.
#[must_use]
pub fn map_columns(columns: &[ColumnDescriptor]) -> Vec<FieldDescriptor> {
    let mut ordered: Vec<&ColumnDescriptor> = columns.iter().collect();
    ordered.sort_by_key(|c| c.ordinal);
    ordered.into_iter().map(map_column).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, declared_type: &str, key: &str) -> ColumnDescriptor {
        ColumnDescriptor::new(name, declared_type, key, 0)
    }

    #[test]
    fn test_keyword_table() {
        let cases = [
            ("binary(16)", StorageType::Bytes),
            ("varbinary(255)", StorageType::Bytes),
            ("longblob", StorageType::Bytes),
            ("bit(1)", StorageType::Int),
            ("tinyint(4)", StorageType::Int),
            ("tinyint(3) unsigned", StorageType::Uint),
            ("int(11)", StorageType::Int),
            ("int(10) unsigned", StorageType::Uint),
            ("mediumint(8) UNSIGNED", StorageType::Uint),
            ("bigint(20)", StorageType::Int64),
            ("bigint(20) unsigned", StorageType::Uint64),
            ("float", StorageType::Float64),
            ("double(8,2)", StorageType::Float64),
            ("decimal(10,2)", StorageType::Float64),
            ("bool", StorageType::Bool),
            ("datetime", StorageType::Timestamp),
            ("timestamp", StorageType::Timestamp),
            ("date", StorageType::Timestamp),
            ("time", StorageType::Timestamp),
        ];
        for (declared, expected) in cases {
            assert_eq!(StorageType::from_sql(declared), expected, "{declared}");
        }
    }

    #[test]
    fn test_fallback_sniffing() {
        let cases = [
            ("varchar(255)", StorageType::String),
            ("char(36)", StorageType::String),
            ("longtext", StorageType::String),
            ("int64", StorageType::Int64),
            ("integer", StorageType::Int),
            ("boolean", StorageType::Bool),
            ("real", StorageType::String),
            ("datetime2", StorageType::Timestamp),
            ("json", StorageType::String),
            ("enum('on','off')", StorageType::String),
            ("", StorageType::String),
        ];
        for (declared, expected) in cases {
            assert_eq!(StorageType::from_sql(declared), expected, "{declared}");
        }
    }

    #[test]
    fn test_unsigned_does_not_apply_to_fallback() {
        // "integer" is not in the keyword table, so the unsigned flag is ignored.
        assert_eq!(StorageType::from_sql("integer unsigned"), StorageType::Int);
    }

    #[test]
    fn test_key_role_suffixes() {
        assert_eq!(map_column(&column("id", "int", "PRI")).persistence_tag, "id,primary");
        assert_eq!(map_column(&column("code", "char(8)", "uni")).persistence_tag, "code,unique");
        assert_eq!(map_column(&column("idx", "int", "MUL")).persistence_tag, "idx");
        assert_eq!(
            map_column(&column("both", "int", "PRI,UNI")).persistence_tag,
            "both,primary,unique"
        );
    }

    #[test]
    fn test_field_names() {
        let field = map_column(&column("created_at", "datetime", ""));
        assert_eq!(field.column_name, "created_at");
        assert_eq!(field.field_name, "CreatedAt");
        assert_eq!(field.storage_type, StorageType::Timestamp);
        assert_eq!(field.persistence_tag, "created_at");
        assert_eq!(field.serialization_tag, "createdAt");
    }

    #[test]
    fn test_map_columns_example() {
        let fields = map_columns(&[
            column("id", "int(10) unsigned", "PRI"),
            column("created_at", "datetime", ""),
        ]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].storage_type.go_type(), "uint");
        assert_eq!(fields[0].persistence_tag, "id,primary");
        assert_eq!(fields[0].serialization_tag, "id");
        assert_eq!(fields[1].storage_type.to_string(), "*time.Time");
        assert_eq!(fields[1].serialization_tag, "createdAt");
    }

    #[test]
    fn test_map_columns_follows_ordinals() {
        let fields = map_columns(&[
            ColumnDescriptor::new("created_at", "datetime", "", 2),
            ColumnDescriptor::new("id", "int(10) unsigned", "PRI", 0),
            ColumnDescriptor::new("name", "varchar(64)", "", 1),
        ]);
        let names: Vec<_> = fields.iter().map(|f| f.column_name.as_str()).collect();
        assert_eq!(names, ["id", "name", "created_at"]);
    }

    #[test]
    fn test_serializes_as_go_type() {
        let field = map_column(&column("raw", "longblob", ""));
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["storage_type"], "[]byte");
        assert_eq!(value["field_name"], "Raw");
    }
}
