use anyhow::Result;
use std::path::Path;

use super::load_tables;

/// 打印解析出的列模型
pub async fn run_describe(path: &Path, json: bool) -> Result<()> {
    let tables = load_tables(path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    for table in &tables {
        println!("{} ({})", table.name, ddl_core::detect(&table.raw_ddl));
        for column in &table.columns {
            let mut line = format!(
                "  {:<24} {:<16} {}",
                column.name,
                column.display_type(),
                if column.nullable { "NULL" } else { "NOT NULL" }
            );
            if column.is_primary_key {
                line.push_str(" PK");
            }
            if let Some(comment) = column.comment_text() {
                line.push_str(&format!(" -- {comment}"));
            }
            println!("{line}");
        }
    }
    Ok(())
}
