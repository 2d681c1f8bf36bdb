//! Naming conventions for generated code and file paths
//!
//! Case conversion for identifiers, route paths and the file names of the
//! three generated artifacts.

use inflector::Inflector;
use std::path::PathBuf;

/// Subfolder for controller files
pub const CONTROLLER_DIR: &str = "controller";

/// Subfolder for model files
pub const MODEL_DIR: &str = "gormModel";

/// Module registration file name
pub const MODULE_FILE: &str = "module.go";

/// Naming helpers for templates and generated file paths
pub struct Naming;

impl Naming {
    /// Convert to `PascalCase` (exported Go identifier)
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::to_pascal_case("created_at"), "CreatedAt");
    /// assert_eq!(Naming::to_pascal_case("t_sys_user"), "TSysUser");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Convert to lowerCamelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::to_camel_case("created_at"), "createdAt");
    /// assert_eq!(Naming::to_camel_case("id"), "id");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::to_snake_case("MerchantRecord"), "merchant_record");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Route path for a table: lower-cased, `_` becomes `/`
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::table_path("T_Sys_User"), "t/sys/user");
    /// ```
    #[must_use]
    pub fn table_path(table: &str) -> String {
        table.to_lowercase().replace('_', "/")
    }

    /// Second `_`-separated segment of a table name, or empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::sub_table("t_sys_user"), "sys");
    /// assert_eq!(Naming::sub_table("users"), "");
    /// ```
    #[must_use]
    pub fn sub_table(table: &str) -> String {
        table.split('_').nth(1).unwrap_or_default().to_string()
    }

    /// Base file name for a table: `snake_case`, trimmed of `-`, `_` and `.`
    #[must_use]
    pub fn file_stem(table: &str) -> String {
        Self::to_snake_case(table)
            .trim_matches(|c| matches!(c, '-' | '_' | '.'))
            .to_string()
    }

    /// Base name of the model file
    ///
    /// A stem ending in `_test` would make the Go toolchain treat the file as
    /// a test file, so `_table` is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gorm_scaffold::scaffold::naming::Naming;
    /// assert_eq!(Naming::model_stem("user_test"), "user_test_table");
    /// assert_eq!(Naming::model_stem("user_tester"), "user_tester");
    /// ```
    #[must_use]
    pub fn model_stem(table: &str) -> String {
        let mut stem = Self::file_stem(table);
        if stem.len() > 5 && stem.ends_with("_test") {
            stem.push_str("_table");
        }
        stem
    }

    /// `<module>/module.go`
    #[must_use]
    pub fn module_path(module: &str) -> PathBuf {
        PathBuf::from(module).join(MODULE_FILE)
    }

    /// `<module>/gormModel/<stem>_model.go`
    #[must_use]
    pub fn model_path(module: &str, table: &str) -> PathBuf {
        PathBuf::from(module)
            .join(MODEL_DIR)
            .join(format!("{}_model.go", Self::model_stem(table)))
    }

    /// `<module>/controller/<stem>_controller.go`
    #[must_use]
    pub fn controller_path(module: &str, table: &str) -> PathBuf {
        PathBuf::from(module)
            .join(CONTROLLER_DIR)
            .join(format!("{}_controller.go", Self::file_stem(table)))
    }
}
