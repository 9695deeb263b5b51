use anyhow::Result;
use ddl_core::{CrudGenerator, DdlTranslator, EngineConfig};
use std::path::Path;

use crate::cli::Commands;
use crate::commands;

#[derive(Debug, Clone)]
pub struct CliApp {
    pub config: EngineConfig,
    pub translator: DdlTranslator,
    pub crud: CrudGenerator,
}

impl CliApp {
    /// 加载配置并初始化CLI应用
    ///
    /// 未指定配置文件且找不到默认配置文件时使用默认配置
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = EngineConfig::load_or_default(config_path)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            translator: DdlTranslator::new(config.clone()),
            crud: CrudGenerator::from_engine_config(&config),
            config,
        }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Detect { file } => commands::run_detect(&file).await,
            Commands::Convert { file, to, output } => {
                commands::run_convert(self, &file, to, output.as_deref()).await
            }
            Commands::Check {
                source_type,
                target_type,
            } => {
                commands::run_check(&source_type, &target_type);
                Ok(())
            }
            Commands::Crud { file, table, kind } => {
                commands::run_crud(self, &file, table.as_deref(), kind).await
            }
            Commands::Describe { file, json } => commands::run_describe(&file, json).await,
            Commands::InitConfig { path, force } => commands::run_init_config(&path, force),
        }
    }
}
