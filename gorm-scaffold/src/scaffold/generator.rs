//! Generation orchestrator
//!
//! Builds the template context for each artifact, renders it and returns a
//! [`GeneratedFile`]. Writing is a separate step so callers can preview the
//! output (`--dry-run`) before anything touches the disk.

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::mapper::{map_columns, StorageType};
use super::naming::Naming;
use super::renderer::{render_fields, struct_definition};
use super::templates::{TemplateKind, TemplateRegistry};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::schema::ColumnDescriptor;

/// A rendered file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root
    pub path: PathBuf,
    /// File content, trimmed of surrounding whitespace
    pub content: String,
    /// Short description for user feedback
    pub description: String,
}

/// Renders module, model and controller files
pub struct ScaffoldGenerator {
    config: ScaffoldConfig,
    templates: TemplateRegistry,
    date: String,
}

impl ScaffoldGenerator {
    /// Create a generator
    ///
    /// Templates are loaded from the configured override directory when it
    /// exists; the generation date defaults to today.
    pub fn new(config: ScaffoldConfig) -> Result<Self> {
        let templates = TemplateRegistry::with_overrides(config.template_dir().as_deref())?;
        Ok(Self::with_templates(config, templates))
    }

    /// Create a generator around an existing registry
    #[must_use]
    pub fn with_templates(config: ScaffoldConfig, templates: TemplateRegistry) -> Self {
        Self {
            config,
            templates,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Fix the date written into file headers
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Render `<module>/module.go`
    ///
    /// `tables` are the tables generated in this run; the default template
    /// registers one controller route per table.
    pub fn generate_module<S: AsRef<str>>(
        &self,
        module: &str,
        project: &str,
        tables: &[S],
    ) -> Result<GeneratedFile> {
        require("module", module)?;

        let tables: Vec<_> = tables
            .iter()
            .map(|t| {
                let table = t.as_ref();
                json!({
                    "table_name": table,
                    "model_name": Naming::to_pascal_case(table),
                    "path_name": Naming::table_path(table),
                })
            })
            .collect();

        let context = json!({
            "module": module,
            "project": project,
            "tables": tables,
            "date": self.date,
            "author": self.config.author,
            "email": self.config.email,
        });

        let content = self.templates.render(TemplateKind::Module, &context)?;
        Ok(GeneratedFile {
            path: Naming::module_path(module),
            content: content.trim().to_string(),
            description: format!("module registration for {module}"),
        })
    }

    /// Render `<module>/gormModel/<table>_model.go` from column metadata
    pub fn generate_model(
        &self,
        module: &str,
        project: &str,
        table: &str,
        columns: &[ColumnDescriptor],
    ) -> Result<GeneratedFile> {
        require("module", module)?;
        require("table", table)?;

        let fields = map_columns(columns);
        let rendered = render_fields(&fields);
        let has_time = fields
            .iter()
            .any(|f| f.storage_type == StorageType::Timestamp);

        let context = json!({
            "module": module,
            "project": project,
            "table_name": table,
            "model_name": Naming::to_pascal_case(table),
            "group_name": self.config.group_name,
            "package_name": super::naming::MODEL_DIR,
            "struct_define": struct_definition(table, &rendered),
            "column_define": rendered.select_expr,
            "fields": fields,
            "has_time": has_time,
            "date": self.date,
            "author": self.config.author,
            "email": self.config.email,
        });

        let content = self.templates.render(TemplateKind::Model, &context)?;
        Ok(GeneratedFile {
            path: Naming::model_path(module, table),
            content: content.trim().to_string(),
            description: format!("gorm model for {table}"),
        })
    }

    /// Render `<module>/controller/<table>_controller.go`
    pub fn generate_controller(&self, module: &str, project: &str, table: &str) -> Result<GeneratedFile> {
        require("module", module)?;
        require("table", table)?;

        let context = json!({
            "module": module,
            "project": project,
            "table_name": table,
            "model_name": Naming::to_pascal_case(table),
            "group_name": self.config.group_name,
            "package_name": super::naming::CONTROLLER_DIR,
            "path_name": Naming::table_path(table),
            "date": self.date,
            "author": self.config.author,
            "email": self.config.email,
        });

        let content = self.templates.render(TemplateKind::Controller, &context)?;
        Ok(GeneratedFile {
            path: Naming::controller_path(module, table),
            content: content.trim().to_string(),
            description: format!("controller for {table}"),
        })
    }

    /// Render the model and controller for one table
    pub fn generate_table(
        &self,
        module: &str,
        project: &str,
        table: &str,
        columns: &[ColumnDescriptor],
    ) -> Result<Vec<GeneratedFile>> {
        Ok(vec![
            self.generate_model(module, project, table, columns)?,
            self.generate_controller(module, project, table)?,
        ])
    }

    /// Absolute target of a generated file
    #[must_use]
    pub fn target_path(&self, file: &GeneratedFile) -> PathBuf {
        self.config.output_root.join(&file.path)
    }

    /// Write one file below the output root, creating directories as needed
    pub fn write(&self, file: &GeneratedFile) -> Result<PathBuf> {
        let path = self.target_path(file);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, &file.content).map_err(|source| ScaffoldError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "wrote {}", file.description);
        Ok(path)
    }

    /// Write files in order, stopping at the first failure
    ///
    /// Files written before the failure stay on disk.
    pub fn write_all<'a, I>(&self, files: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = &'a GeneratedFile>,
    {
        files.into_iter().map(|file| self.write(file)).collect()
    }
}

fn require(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidInput(format!("{what} name must not be empty")));
    }
    Ok(())
}
