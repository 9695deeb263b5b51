use anyhow::{Context, Result};
use ddl_core::{Dialect, Direction};
use std::path::Path;
use tracing::info;

use super::load_tables;
use crate::app::CliApp;

/// 转换文件中的所有表，输出为单个脚本
pub async fn run_convert(
    app: &CliApp,
    path: &Path,
    to: Option<Dialect>,
    output: Option<&Path>,
) -> Result<()> {
    let tables = load_tables(path).await?;
    let direction = to.map(Direction::to_target);

    let batch = app.translator.convert_batch(&tables, direction);
    for (table, direction) in &batch.directions {
        info!("🔄 {}: {} -> {}", table, direction.source(), direction.target());
    }

    match output {
        Some(output) => {
            tokio::fs::write(output, &batch.script)
                .await
                .with_context(|| format!("写入文件失败: {}", output.display()))?;
            info!(
                "✅ 已转换 {} 张表，保存到 {}",
                batch.table_count(),
                output.display()
            );
        }
        None => print!("{}", batch.script),
    }

    Ok(())
}
