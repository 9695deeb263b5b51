use anyhow::{Result, anyhow};
use ddl_core::TableSchema;
use std::path::Path;

use super::load_tables;
use crate::app::CliApp;
use crate::cli::CrudKind;

/// 生成指定表的 CRUD 模板
pub async fn run_crud(
    app: &CliApp,
    path: &Path,
    table: Option<&str>,
    kind: CrudKind,
) -> Result<()> {
    let tables = load_tables(path).await?;
    let schema = select_table(&tables, table)?;

    for sql in render(app, schema, kind) {
        println!("{sql}");
    }
    Ok(())
}

fn select_table<'a>(tables: &'a [TableSchema], name: Option<&str>) -> Result<&'a TableSchema> {
    match name {
        Some(name) => tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| anyhow!("未找到表: {name}")),
        None => tables.first().ok_or_else(|| anyhow!("文件中没有任何表")),
    }
}

fn render(app: &CliApp, schema: &TableSchema, kind: CrudKind) -> Vec<String> {
    let (name, columns) = (schema.name.as_str(), schema.columns.as_slice());
    match kind {
        CrudKind::Select => vec![app.crud.select(name, columns)],
        CrudKind::Insert => vec![app.crud.insert(name, columns)],
        CrudKind::Update => vec![app.crud.update(name, columns)],
        CrudKind::Delete => vec![app.crud.delete(name, columns)],
        CrudKind::All => {
            let statements = app.crud.generate(name, columns);
            vec![
                statements.select,
                statements.insert,
                statements.update,
                statements.delete,
            ]
        }
    }
}
