//! Code generation from column metadata
//!
//! The pipeline for one table is:
//!
//! 1. [`mapper`] turns each column into a [`FieldDescriptor`]
//! 2. [`renderer`] lays the fields out as an aligned Go struct body and
//!    builds the select expression
//! 3. [`generator`] feeds both into the [`templates`] and produces
//!    [`GeneratedFile`]s at the paths given by [`naming`]

pub mod generator;
pub mod mapper;
pub mod naming;
pub mod renderer;
pub mod templates;

pub use generator::{GeneratedFile, ScaffoldGenerator};
pub use mapper::{map_column, map_columns, FieldDescriptor, StorageType};
pub use naming::Naming;
pub use renderer::{render_fields, struct_definition, RenderedStruct};
pub use templates::{TemplateKind, TemplateRegistry};
