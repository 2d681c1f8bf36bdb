//! End-to-end generation from a JSON schema file

use gorm_scaffold::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "t_sys_shop_merchant_record": [
        { "name": "created_at", "type": "datetime", "key": "", "ordinal": 3 },
        { "name": "id", "type": "bigint(20) unsigned", "key": "PRI", "ordinal": 0 },
        { "name": "merchant_code", "type": "varchar(32)", "key": "UNI", "ordinal": 1 },
        { "name": "amount", "type": "decimal(12,2)", "key": "", "ordinal": 2 }
    ],
    "order_test": [
        { "name": "id", "type": "int(11)", "key": "PRI" }
    ]
}"#;

fn setup() -> (TempDir, JsonSchema, ScaffoldGenerator) {
    let dir = TempDir::new().unwrap();
    let schema_path = dir.path().join("schema.json");
    fs::write(&schema_path, SCHEMA).unwrap();

    let source = JsonSchema::from_file(&schema_path).unwrap();
    let config = ScaffoldConfig::default()
        .with_output_root(dir.path().join("result"))
        .with_template_dir(dir.path().join("no-templates"))
        .with_author("Jane", "jane@example.com");
    let generator = ScaffoldGenerator::new(config).unwrap().with_date("2024-05-01");
    (dir, source, generator)
}

async fn run(
    source: &dyn SchemaSource,
    generator: &ScaffoldGenerator,
    module: &str,
    tables: &[&str],
) -> gorm_scaffold::Result<Vec<std::path::PathBuf>> {
    let mut written = vec![generator.write(&generator.generate_module(module, "shop", tables)?)?];
    for table in tables {
        let columns = source.table_columns(table).await?;
        let files = generator.generate_table(module, "shop", table, &columns)?;
        written.extend(generator.write_all(&files)?);
    }
    Ok(written)
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join("result").join(relative)).unwrap()
}

#[tokio::test]
async fn test_generates_all_three_files() {
    let (dir, source, generator) = setup();
    let written = run(&source, &generator, "shop_manage", &["t_sys_shop_merchant_record"])
        .await
        .unwrap();
    assert_eq!(written.len(), 3);

    let module = read(dir.path(), "shop_manage/module.go");
    assert!(module.contains("package shop_manage"));
    assert!(module.contains("controller.TSysShopMerchantRecordController"));

    let model = read(
        dir.path(),
        "shop_manage/gormModel/t_sys_shop_merchant_record_model.go",
    );
    assert!(model.contains("type TSysShopMerchantRecord struct {"));
    assert!(model.contains(
        "\"t.id as id,t.merchant_code as merchantCode,t.amount as amount,t.created_at as createdAt\""
    ));
    assert!(model.contains("`gorm:\"merchant_code,unique\""));
    assert!(!model.ends_with('\n'));

    let controller = read(
        dir.path(),
        "shop_manage/controller/t_sys_shop_merchant_record_controller.go",
    );
    assert!(controller.starts_with("// ====="));
    assert!(controller.contains("type TSysShopMerchantRecordController struct{}"));
}

#[tokio::test]
async fn test_struct_fields_follow_column_order() {
    let (dir, source, generator) = setup();
    run(&source, &generator, "shop", &["t_sys_shop_merchant_record"])
        .await
        .unwrap();

    let model = read(dir.path(), "shop/gormModel/t_sys_shop_merchant_record_model.go");
    let body: Vec<&str> = model
        .lines()
        .skip_while(|line| !line.starts_with("type TSysShopMerchantRecord struct"))
        .skip(1)
        .take_while(|line| *line != "}")
        .collect();

    let names: Vec<&str> = body
        .iter()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(names, ["Id", "MerchantCode", "Amount", "CreatedAt"]);

    let types: Vec<&str> = body
        .iter()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(types, ["uint64", "string", "float64", "*time.Time"]);
}

#[tokio::test]
async fn test_test_suffix_table_gets_model_suffix() {
    let (dir, source, generator) = setup();
    run(&source, &generator, "shop", &["order_test"]).await.unwrap();

    let root = dir.path().join("result/shop");
    assert!(root.join("gormModel/order_test_table_model.go").is_file());
    assert!(root.join("controller/order_test_controller.go").is_file());
}

#[tokio::test]
async fn test_missing_table_aborts_after_earlier_files() {
    let (dir, source, generator) = setup();
    let result = run(&source, &generator, "shop", &["order_test", "t_missing"]).await;

    assert!(matches!(result, Err(ScaffoldError::TableNotFound(ref t)) if t == "t_missing"));
    // Files for tables processed before the failure are kept.
    assert!(dir
        .path()
        .join("result/shop/gormModel/order_test_table_model.go")
        .is_file());
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let (dir, source, generator) = setup();
    run(&source, &generator, "shop", &["t_sys_shop_merchant_record"])
        .await
        .unwrap();
    let first = read(dir.path(), "shop/gormModel/t_sys_shop_merchant_record_model.go");

    run(&source, &generator, "shop", &["t_sys_shop_merchant_record"])
        .await
        .unwrap();
    let second = read(dir.path(), "shop/gormModel/t_sys_shop_merchant_record_model.go");

    assert_eq!(first, second);
}
