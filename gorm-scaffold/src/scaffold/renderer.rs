//! Struct body and select expression rendering
//!
//! Fields are laid out as a four-column table (name, type, gorm tag, json
//! tag). Column widths come from the widest entry of each column, measured in
//! terminal columns so wide characters stay aligned; the last column is not
//! padded so no line carries trailing whitespace.

use console::measure_text_width;

use super::mapper::FieldDescriptor;
use super::naming::Naming;

/// Indentation of every struct field line
const FIELD_INDENT: &str = "    ";

/// Alias of the queried table in generated select expressions
pub const TABLE_ALIAS: &str = "t";

/// Rendered struct text and select expression for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStruct {
    /// Aligned field lines, each terminated by `\n`
    pub body: String,
    /// `t.<column> as <alias>` entries joined by `,`
    pub select_expr: String,
}

/// Render the struct body and select expression for `fields`
///
/// # Examples
///
/// ```
/// use gorm_scaffold::scaffold::{map_columns, render_fields};
/// use gorm_scaffold::schema::ColumnDescriptor;
///
/// let fields = map_columns(&[
///     ColumnDescriptor::new("id", "int(10) unsigned", "PRI", 0),
///     ColumnDescriptor::new("created_at", "datetime", "", 1),
/// ]);
/// let rendered = render_fields(&fields);
/// assert_eq!(rendered.select_expr, "t.id as id,t.created_at as createdAt");
/// ```
#[must_use]
pub fn render_fields(fields: &[FieldDescriptor]) -> RenderedStruct {
    RenderedStruct {
        body: render_body(fields),
        select_expr: select_expression(fields),
    }
}

/// Aligned struct body
#[must_use]
pub fn render_body(fields: &[FieldDescriptor]) -> String {
    let rows: Vec<[String; 4]> = fields.iter().map(row).collect();

    let mut widths = [0usize; 3];
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut body = String::new();
    for [name, go_type, gorm, json] in &rows {
        body.push_str(FIELD_INDENT);
        for (cell, width) in [name, go_type, gorm].into_iter().zip(widths) {
            body.push_str(cell);
            body.push_str(&" ".repeat(width - measure_text_width(cell) + 1));
        }
        body.push_str(json);
        body.push('\n');
    }
    body
}

/// Comma-joined `t.<column> as <alias>` list in field order
#[must_use]
pub fn select_expression(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|f| format!("{TABLE_ALIAS}.{} as {}", f.column_name, f.serialization_tag))
        .collect::<Vec<_>>()
        .join(",")
}

/// Full Go struct declaration for a table
///
/// # Examples
///
/// ```
/// use gorm_scaffold::scaffold::{map_columns, render_fields, struct_definition};
/// use gorm_scaffold::schema::ColumnDescriptor;
///
/// let fields = map_columns(&[ColumnDescriptor::new("id", "bigint(20)", "PRI", 0)]);
/// let definition = struct_definition("t_sys_user", &render_fields(&fields));
/// assert!(definition.starts_with("type TSysUser struct {\n"));
/// assert!(definition.ends_with("}"));
/// ```
#[must_use]
pub fn struct_definition(table: &str, rendered: &RenderedStruct) -> String {
    format!(
        "type {} struct {{\n{}}}",
        Naming::to_pascal_case(table),
        rendered.body
    )
}

fn row(field: &FieldDescriptor) -> [String; 4] {
    [
        field.field_name.clone(),
        field.storage_type.go_type().to_string(),
        format!("`gorm:\"{}\"", field.persistence_tag),
        format!("json:\"{},omitempty\"`", field.serialization_tag),
    ]
}
