//! Integration tests for the generate command

use gorm_scaffold_cli::GenerateCommand;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "t_sys_user": [
        { "name": "id", "type": "int(10) unsigned", "key": "PRI" },
        { "name": "user_name", "type": "varchar(64)", "key": "UNI" },
        { "name": "created_at", "type": "timestamp", "key": "" }
    ]
}"#;

fn command(dir: &Path, tables: &[&str]) -> GenerateCommand {
    let schema = dir.join("schema.json");
    fs::write(&schema, SCHEMA).unwrap();

    GenerateCommand {
        tables: tables.iter().map(ToString::to_string).collect(),
        module: "sys_manage".to_string(),
        project: "admin".to_string(),
        config: Some(dir.join("gorm-scaffold.toml")),
        output: Some(dir.join("result")),
        database_url: None,
        schema_file: Some(schema),
        templates: Some(dir.join("templates")),
        dry_run: false,
    }
}

#[tokio::test]
async fn test_generate_writes_files() {
    let dir = TempDir::new().unwrap();
    let paths = command(dir.path(), &["t_sys_user"]).execute().await.unwrap();

    let root = dir.path().join("result/sys_manage");
    assert_eq!(
        paths,
        [
            root.join("module.go"),
            root.join("gormModel/t_sys_user_model.go"),
            root.join("controller/t_sys_user_controller.go"),
        ]
    );
    for path in &paths {
        assert!(path.is_file(), "missing {}", path.display());
    }

    let model = fs::read_to_string(root.join("gormModel/t_sys_user_model.go")).unwrap();
    assert!(model.contains("type TSysUser struct {"));
    assert!(model.contains("`gorm:\"user_name,unique\""));
    assert!(model.contains("t.id as id,t.user_name as userName,t.created_at as createdAt"));
}

#[tokio::test]
async fn test_config_file_sets_author() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("gorm-scaffold.toml"),
        "author = \"Jane\"\nemail = \"jane@example.com\"\n",
    )
    .unwrap();

    command(dir.path(), &["t_sys_user"]).execute().await.unwrap();

    let module = fs::read_to_string(dir.path().join("result/sys_manage/module.go")).unwrap();
    assert!(module.contains("Jane <jane@example.com>"));
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut cmd = command(dir.path(), &["t_sys_user"]);
    cmd.dry_run = true;

    let paths = cmd.execute().await.unwrap();
    assert_eq!(paths.len(), 3);
    assert!(!dir.path().join("result").exists());
}

#[tokio::test]
async fn test_unknown_table_fails_after_module() {
    let dir = TempDir::new().unwrap();
    let err = command(dir.path(), &["t_sys_user", "t_unknown"])
        .execute()
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("t_unknown"));
    let root = dir.path().join("result/sys_manage");
    assert!(root.join("module.go").is_file());
    assert!(root.join("gormModel/t_sys_user_model.go").is_file());
    assert!(!root.join("controller/t_unknown_controller.go").exists());
}

#[tokio::test]
async fn test_template_override_is_used() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("controller.go.hbs"),
        "package controller // {{model_name}} at /{{path_name}}\n",
    )
    .unwrap();

    command(dir.path(), &["t_sys_user"]).execute().await.unwrap();

    let controller = fs::read_to_string(
        dir.path()
            .join("result/sys_manage/controller/t_sys_user_controller.go"),
    )
    .unwrap();
    assert_eq!(controller, "package controller // TSysUser at /t/sys/user");
}
