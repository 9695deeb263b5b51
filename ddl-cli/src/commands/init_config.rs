use anyhow::{Result, bail};
use ddl_core::EngineConfig;
use std::path::Path;
use tracing::info;

/// 写入带注释的默认配置文件
pub fn run_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("配置文件已存在: {}（使用 --force 覆盖）", path.display());
    }

    EngineConfig::default().save_to_file(path)?;
    info!("✅ 已生成配置文件: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_config_respects_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ddl.toml");

        run_init_config(&path, false).unwrap();
        assert_eq!(EngineConfig::load_from_file(&path).unwrap(), EngineConfig::default());

        assert!(run_init_config(&path, false).is_err());
        assert!(run_init_config(&path, true).is_ok());
    }
}
