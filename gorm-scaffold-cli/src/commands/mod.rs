//! CLI command implementations

pub mod generate;
pub mod templates;

pub use generate::GenerateCommand;
pub use templates::TemplatesCommand;
