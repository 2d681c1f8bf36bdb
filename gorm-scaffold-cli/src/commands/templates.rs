//! `gorm-scaffold templates` commands
//!
//! Manage template overrides:
//! - `export`: write the built-in templates for customization
//! - `list`: show which templates are customized
//! - `diff`: compare customized templates with the built-ins

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use gorm_scaffold::prelude::*;
use gorm_scaffold::scaffold::TemplateKind;
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✓ ", "+ ");

/// Template management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesCommand {
    /// Write the built-in templates to a directory for customization
    Export {
        /// Target directory (defaults to the configured template directory)
        dir: Option<PathBuf>,
        /// Overwrite templates that already exist
        #[arg(long)]
        force: bool,
    },
    /// List templates and whether they are customized
    List {
        /// Template directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show differences between customized templates and the built-ins
    Diff {
        /// Template to compare (`module`, `model` or `controller`); all when omitted
        template: Option<String>,
        /// Template directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl TemplatesCommand {
    /// Run the subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Export { dir, force } => export(&resolve_dir(dir.as_deref())?, *force),
            Self::List { dir } => list(&resolve_dir(dir.as_deref())?),
            Self::Diff { template, dir } => diff(&resolve_dir(dir.as_deref())?, template.as_deref()),
        }
    }
}

fn resolve_dir(dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.to_path_buf());
    }
    let config = ScaffoldConfig::load(None).context("Failed to load configuration")?;
    config
        .template_dir()
        .context("Could not determine a template directory, pass one explicitly")
}

/// Look up a template by its short name
pub fn parse_kind(name: &str) -> Result<TemplateKind> {
    TemplateKind::ALL
        .into_iter()
        .find(|kind| kind.name() == name || kind.file_name() == name)
        .with_context(|| format!("Unknown template '{name}', expected one of: module, model, controller"))
}

fn export(dir: &Path, force: bool) -> Result<()> {
    let written = TemplateRegistry::export_defaults(dir, force)
        .with_context(|| format!("Failed to export templates to {}", dir.display()))?;

    println!("{FOLDER}{}", style(dir.display()).bold());
    if written.is_empty() {
        println!("All templates already exist. Use --force to overwrite.");
        return Ok(());
    }
    for path in &written {
        println!("  {}{}", style(CHECK).green(), path.display());
    }
    println!(
        "\n{} {} templates. Edit them to customize generated code.",
        style("Exported").green().bold(),
        written.len()
    );
    Ok(())
}

fn list(dir: &Path) -> Result<()> {
    println!("{FOLDER}{}", style(dir.display()).bold());
    for kind in TemplateKind::ALL {
        let customized = dir.join(kind.file_name()).is_file();
        let status = if customized {
            style("customized").yellow()
        } else {
            style("built-in").dim()
        };
        println!("  {FILE}{:<20} {status}", kind.file_name());
    }
    Ok(())
}

fn diff(dir: &Path, template: Option<&str>) -> Result<()> {
    let kinds = match template {
        Some(name) => vec![parse_kind(name)?],
        None => TemplateKind::ALL.to_vec(),
    };

    let mut found_any = false;
    for kind in kinds {
        let path = dir.join(kind.file_name());
        if !path.is_file() {
            if template.is_some() {
                bail!("Template '{kind}' is not customized in {}", dir.display());
            }
            continue;
        }
        found_any = true;

        let custom = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        println!("{FILE}{}", style(kind.file_name()).bold());
        println!();
        for line in diff_lines(kind.default_source(), &custom) {
            match line.chars().next() {
                Some('-') => print!("{}", style(line).red()),
                Some('+') => print!("{}", style(line).green()),
                _ => print!("{line}"),
            }
        }
        println!();
    }

    if !found_any {
        println!("No customized templates found.");
    }
    Ok(())
}

/// Line diff of `custom` against `default`, prefixed `-`, `+` or ` `
///
/// Each entry keeps its trailing newline.
#[must_use]
pub fn diff_lines(default: &str, custom: &str) -> Vec<String> {
    TextDiff::from_lines(default, custom)
        .iter_all_changes()
        .map(|change| {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            let mut line = format!("{sign}{change}");
            if change.missing_newline() {
                line.push('\n');
            }
            line
        })
        .collect()
}
