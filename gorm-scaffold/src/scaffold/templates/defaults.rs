//! Built-in Go templates
//!
//! Rendered with handlebars in strict mode; HTML escaping is disabled.

/// Module registration file (`module.go`)
pub const MODULE_TEMPLATE: &str = r#"// ==========================================================================
// Code generated by gorm-scaffold.
// Author: {{author}} <{{email}}>
// Date:   {{date}}
// ==========================================================================

package {{module}}

import (
	"github.com/gogf/gf/frame/g"
	"github.com/gogf/gf/net/ghttp"
{{#if tables}}

	"{{project}}/app/{{module}}/controller"
{{/if}}
)

// Register mounts the {{module}} routes of {{project}}.
func Register() {
	s := g.Server()
	s.Group("/{{module}}", func(group *ghttp.RouterGroup) {
{{#each tables}}
		group.ALL("/{{path_name}}", new(controller.{{model_name}}Controller))
{{/each}}
	})
}
"#;

/// gorm model file (`gormModel/<table>_model.go`)
pub const MODEL_TEMPLATE: &str = r#"// ==========================================================================
// Code generated by gorm-scaffold.
// Author: {{author}} <{{email}}>
// Date:   {{date}}
// ==========================================================================

package gormModel

import (
{{#if has_time}}
	"time"

{{/if}}
	"github.com/gogf/gf/frame/g"
	"gorm.io/gorm"

	"{{project}}/library/gormdb"
)

// {{model_name}} maps table {{table_name}}.
{{struct_define}}

// {{model_name}}Columns selects every column of {{table_name}} under its json name.
const {{model_name}}Columns = "{{column_define}}"

// TableName binds {{model_name}} to {{table_name}}.
func ({{model_name}}) TableName() string {
	return "{{table_name}}"
}

// {{model_name}}Query starts a query on {{table_name}} in the {{group_name}} group.
func {{model_name}}Query() *gorm.DB {
	return gormdb.Group("{{group_name}}").Table("{{table_name}} t")
}

// {{model_name}}Maps returns matching {{table_name}} rows keyed by json name.
func {{model_name}}Maps(where g.Map) (rows []map[string]interface{}, err error) {
	err = {{model_name}}Query().Select({{model_name}}Columns).Where(map[string]interface{}(where)).Find(&rows).Error
	return rows, err
}

// {{model_name}}Page returns one page of {{table_name}} rows and the total count.
func {{model_name}}Page(page, size int, where g.Map) (rows []{{model_name}}, total int64, err error) {
	query := {{model_name}}Query().Where(map[string]interface{}(where))
	if err = query.Count(&total).Error; err != nil {
		return nil, 0, err
	}
	err = query.Offset((page - 1) * size).Limit(size).Find(&rows).Error
	return rows, total, err
}
"#;

/// Controller stub (`controller/<table>_controller.go`)
pub const CONTROLLER_TEMPLATE: &str = r#"// ==========================================================================
// Code generated by gorm-scaffold.
// Author: {{author}} <{{email}}>
// Date:   {{date}}
// ==========================================================================

package controller

import (
	"github.com/gogf/gf/frame/g"
	"github.com/gogf/gf/net/ghttp"

	"{{project}}/app/{{module}}/gormModel"
	"{{project}}/library/gormdb"
	"{{project}}/library/response"
)

// {{model_name}}Controller serves /{{module}}/{{path_name}}.
type {{model_name}}Controller struct{}

// List returns one page of {{table_name}} rows.
func (c *{{model_name}}Controller) List(r *ghttp.Request) {
	page := r.GetInt("page", 1)
	size := r.GetInt("size", 20)
	where := g.Map(r.GetMap())
	delete(where, "page")
	delete(where, "size")
	rows, total, err := gormModel.{{model_name}}Page(page, size, where)
	if err != nil {
		response.JsonExit(r, 1, err.Error())
	}
	response.JsonExit(r, 0, "ok", g.Map{"list": rows, "total": total})
}

// Get returns a single {{table_name}} row by id.
func (c *{{model_name}}Controller) Get(r *ghttp.Request) {
	var row gormModel.{{model_name}}
	if err := gormModel.{{model_name}}Query().Where("t.id = ?", r.Get("id")).First(&row).Error; err != nil {
		response.JsonExit(r, 1, err.Error())
	}
	response.JsonExit(r, 0, "ok", row)
}

// Save creates or updates a {{table_name}} row.
func (c *{{model_name}}Controller) Save(r *ghttp.Request) {
	var row gormModel.{{model_name}}
	if err := r.Parse(&row); err != nil {
		response.JsonExit(r, 1, err.Error())
	}
	if err := gormdb.Group("{{group_name}}").Save(&row).Error; err != nil {
		response.JsonExit(r, 1, err.Error())
	}
	response.JsonExit(r, 0, "ok", row)
}

// Delete removes a {{table_name}} row by id.
func (c *{{model_name}}Controller) Delete(r *ghttp.Request) {
	if err := gormdb.Group("{{group_name}}").Delete(&gormModel.{{model_name}}{}, r.Get("id")).Error; err != nil {
		response.JsonExit(r, 1, err.Error())
	}
	response.JsonExit(r, 0, "ok")
}
"#;
