use anyhow::{Context, Result};
use ddl_core::detect;
use std::path::Path;
use tracing::debug;

/// 识别 DDL 文件的方言并打印
pub async fn run_detect(path: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取文件失败: {}", path.display()))?;

    let dialect = detect(&content);
    debug!("{} 识别为 {}", path.display(), dialect);
    println!("{dialect}");
    Ok(())
}
