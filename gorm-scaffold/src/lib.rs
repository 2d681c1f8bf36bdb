//! gorm-scaffold: CRUD boilerplate generation from live table schemas
//!
//! Given a table name, the generator reads the column metadata of that table,
//! maps every SQL column type to a Go field type and renders three Go source
//! files from templates:
//!
//! - `<module>/module.go` - module registration
//! - `<module>/gormModel/<table>_model.go` - gorm struct and query helpers
//! - `<module>/controller/<table>_controller.go` - controller stub
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gorm_scaffold::prelude::*;
//!
//! # async fn example() -> gorm_scaffold::Result<()> {
//! let config = ScaffoldConfig::load(None)?;
//! let source = MySqlSchema::connect("mysql://root@localhost/shop").await?;
//! let generator = ScaffoldGenerator::new(config)?;
//!
//! let table = "t_sys_shop_merchant_record";
//! let module = generator.generate_module("shop_manage", "shop_manage", &[table])?;
//! let columns = source.table_columns(table).await?;
//! let files = generator.generate_table("shop_manage", "shop_manage", table, &columns)?;
//!
//! generator.write_all(std::iter::once(&module).chain(&files))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`schema`] - column descriptors and schema sources (`MySQL`, JSON file)
//! - [`scaffold`] - type mapping, struct rendering, templates and file generation
//! - [`config`] - figment-backed configuration
//! - [`error`] - the crate error type
//! - [`observability`] - tracing subscriber setup

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod schema;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};

/// Commonly used items
pub mod prelude {
    pub use crate::config::ScaffoldConfig;
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::scaffold::{
        FieldDescriptor, GeneratedFile, RenderedStruct, ScaffoldGenerator, StorageType,
        TemplateRegistry,
    };
    pub use crate::schema::{ColumnDescriptor, JsonSchema, MySqlSchema, SchemaSource};
}
