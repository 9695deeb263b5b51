use crate::constants::{config, crud, general, olap};
use crate::error::{DdlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 引擎配置结构
///
/// 默认值生成的 DDL 与 CRUD 文本和无配置的自由函数完全一致
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub olap: OlapConfig,
    pub general: GeneralConfig,
    pub crud: CrudConfig,
}

/// OLAP 目标表配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OlapConfig {
    pub buckets: u32,
    pub replication_num: u32,
    pub merge_on_write: bool,
    pub fallback_key: String,
}

/// 通用关系型目标表配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub engine: String,
    pub charset: String,
}

/// CRUD 模板配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CrudConfig {
    pub select_limit: u32,
}

impl Default for OlapConfig {
    fn default() -> Self {
        Self {
            buckets: olap::DEFAULT_BUCKETS,
            replication_num: olap::DEFAULT_REPLICATION_NUM,
            merge_on_write: olap::DEFAULT_MERGE_ON_WRITE,
            fallback_key: olap::FALLBACK_KEY_COLUMN.to_string(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            engine: general::DEFAULT_ENGINE.to_string(),
            charset: general::DEFAULT_CHARSET.to_string(),
        }
    }
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            select_limit: crud::DEFAULT_SELECT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// 智能查找并加载配置文件
    /// 按优先级查找：ddl.toml -> .ddl.toml
    pub fn find_and_load_config() -> Result<Self> {
        for config_file in config::CONFIG_FILE_NAMES {
            if Path::new(config_file).exists() {
                tracing::info!("找到配置文件: {}", config_file);
                return Self::load_from_file(config_file);
            }
        }

        Err(DdlError::ConfigNotFound)
    }

    /// 加载指定配置文件；未指定时查找默认配置文件，找不到则使用默认值
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::find_and_load_config() {
                Err(DdlError::ConfigNotFound) => {
                    tracing::debug!("未找到配置文件，使用默认配置");
                    Ok(Self::default())
                }
                other => other,
            },
        }
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_with_comments();
        fs::write(&path, content)?;
        Ok(())
    }

    /// 不带注释的 TOML 文本
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 生成带注释的TOML配置
    fn to_toml_with_comments(&self) -> String {
        const TEMPLATE: &str = include_str!("../templates/ddl.toml.template");

        TEMPLATE
            .replace("{buckets}", &self.olap.buckets.to_string())
            .replace("{replication_num}", &self.olap.replication_num.to_string())
            .replace("{merge_on_write}", &self.olap.merge_on_write.to_string())
            .replace("{fallback_key}", &self.olap.fallback_key)
            .replace("{engine}", &self.general.engine)
            .replace("{charset}", &self.general.charset)
            .replace("{select_limit}", &self.crud.select_limit.to_string())
    }
}
