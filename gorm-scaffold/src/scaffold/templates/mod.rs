//! Template registry for generated Go files
//!
//! Every template kind has a built-in default. A file with the same name in
//! the override directory replaces the default, so projects can adapt the
//! generated code without rebuilding the tool.
//!
//! Templates can call these helpers:
//!
//! | helper | example | output |
//! |---|---|---|
//! | `pascal_case` | `{{pascal_case table_name}}` | `TSysUser` |
//! | `camel_case` | `{{camel_case table_name}}` | `tSysUser` |
//! | `snake_case` | `{{snake_case model_name}}` | `t_sys_user` |
//! | `table_path` | `{{table_path table_name}}` | `t/sys/user` |
//! | `sub_table` | `{{sub_table table_name}}` | `sys` |

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::naming::Naming;
use crate::error::{Result, ScaffoldError};

pub mod defaults;

pub use defaults::{CONTROLLER_TEMPLATE, MODEL_TEMPLATE, MODULE_TEMPLATE};

handlebars_helper!(pascal_case: |s: str| Naming::to_pascal_case(s));
handlebars_helper!(camel_case: |s: str| Naming::to_camel_case(s));
handlebars_helper!(snake_case: |s: str| Naming::to_snake_case(s));
handlebars_helper!(table_path: |s: str| Naming::table_path(s));
handlebars_helper!(sub_table: |s: str| Naming::sub_table(s));

/// The three generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `module.go`
    Module,
    /// `gormModel/<table>_model.go`
    Model,
    /// `controller/<table>_controller.go`
    Controller,
}

impl TemplateKind {
    /// All kinds, in generation order
    pub const ALL: [Self; 3] = [Self::Module, Self::Model, Self::Controller];

    /// Registry name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Model => "model",
            Self::Controller => "controller",
        }
    }

    /// File name of an override template
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Module => "module.go.hbs",
            Self::Model => "model.go.hbs",
            Self::Controller => "controller.go.hbs",
        }
    }

    /// Built-in template source
    #[must_use]
    pub const fn default_source(self) -> &'static str {
        match self {
            Self::Module => MODULE_TEMPLATE,
            Self::Model => MODEL_TEMPLATE,
            Self::Controller => CONTROLLER_TEMPLATE,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handlebars registry holding the three templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
    overridden: Vec<TemplateKind>,
}

impl TemplateRegistry {
    /// Registry with the built-in templates only
    pub fn new() -> Result<Self> {
        Self::with_overrides(None)
    }

    /// Registry with built-ins replaced by files found in `dir`
    ///
    /// A missing directory is not an error; the built-ins are used.
    pub fn with_overrides(dir: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_helper("pascal_case", Box::new(pascal_case));
        handlebars.register_helper("camel_case", Box::new(camel_case));
        handlebars.register_helper("snake_case", Box::new(snake_case));
        handlebars.register_helper("table_path", Box::new(table_path));
        handlebars.register_helper("sub_table", Box::new(sub_table));

        let dir = dir.filter(|d| {
            let exists = d.is_dir();
            if !exists {
                debug!(dir = %d.display(), "template override directory not found, using built-ins");
            }
            exists
        });

        let mut overridden = Vec::new();
        for kind in TemplateKind::ALL {
            match dir.map(|d| d.join(kind.file_name())).filter(|p| p.is_file()) {
                Some(path) => {
                    let source = std::fs::read_to_string(&path).map_err(|source| {
                        ScaffoldError::TemplateFile {
                            path: path.clone(),
                            source,
                        }
                    })?;
                    debug!(template = %kind, path = %path.display(), "using template override");
                    handlebars.register_template_string(kind.name(), source)?;
                    overridden.push(kind);
                }
                None => {
                    handlebars.register_template_string(kind.name(), kind.default_source())?;
                }
            }
        }

        Ok(Self {
            handlebars,
            overridden,
        })
    }

    /// Render a template with `context`
    pub fn render<T: Serialize>(&self, kind: TemplateKind, context: &T) -> Result<String> {
        self.handlebars
            .render(kind.name(), context)
            .map_err(|source| ScaffoldError::Render {
                name: kind.name().to_string(),
                source: Box::new(source),
            })
    }

    /// Whether `kind` was loaded from the override directory
    #[must_use]
    pub fn is_overridden(&self, kind: TemplateKind) -> bool {
        self.overridden.contains(&kind)
    }

    /// Write the built-in templates into `dir`
    ///
    /// Existing files are left untouched unless `force` is set. Returns the
    /// paths that were written.
    pub fn export_defaults(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir).map_err(|source| ScaffoldError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::new();
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            if path.exists() && !force {
                continue;
            }
            std::fs::write(&path, kind.default_source()).map_err(|source| ScaffoldError::Write {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        Ok(written)
    }
}
