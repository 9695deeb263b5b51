use anyhow::{Context, Result};
use ddl_core::TableSchema;
use ddl_core::schema::parse_create_tables;
use std::path::Path;
use tracing::debug;

/// 读取表结构
///
/// `.json` 文件按表结构 JSON 解析（单个对象或数组），其余按 DDL 脚本解析
pub async fn load_tables(path: &Path) -> Result<Vec<TableSchema>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取文件失败: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let tables = if is_json {
        debug!("按 JSON 表结构解析: {}", path.display());
        parse_json_tables(&content)
            .with_context(|| format!("JSON 表结构解析失败: {}", path.display()))?
    } else {
        debug!("按 DDL 脚本解析: {}", path.display());
        parse_create_tables(&content)
            .with_context(|| format!("DDL 解析失败: {}", path.display()))?
    };

    Ok(tables)
}

fn parse_json_tables(content: &str) -> serde_json::Result<Vec<TableSchema>> {
    match serde_json::from_str::<Vec<TableSchema>>(content) {
        Ok(tables) => Ok(tables),
        Err(_) => serde_json::from_str::<TableSchema>(content).map(|table| vec![table]),
    }
}
