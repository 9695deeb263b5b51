//! 建表语句方言转换
//!
//! 所有转换都是纯函数：输入表名、列模型和原始 DDL，输出目标方言的 DDL 文本，
//! 不会失败。两个方向刻意不对称（主键兜底、表注释提取规则都不同）。

mod batch;
mod general;
mod olap;
pub mod type_map;

#[cfg(test)]
mod tests;

pub use batch::BatchOutput;
pub use type_map::{GeneralToOlapMapper, OlapToGeneralMapper, TypeMapper};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::dialect::{Dialect, MetadataExtractor, PatternExtractor};
use crate::schema::{Column, TableSchema};

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    GeneralToOlap,
    OlapToGeneral,
}

impl Direction {
    /// 从指定方言转出去的方向
    pub fn from_source(source: Dialect) -> Self {
        match source {
            Dialect::General => Direction::GeneralToOlap,
            Dialect::Olap => Direction::OlapToGeneral,
        }
    }

    /// 转为指定方言的方向
    pub fn to_target(target: Dialect) -> Self {
        Self::from_source(target.other())
    }

    pub fn source(&self) -> Dialect {
        match self {
            Direction::GeneralToOlap => Dialect::General,
            Direction::OlapToGeneral => Dialect::Olap,
        }
    }

    pub fn target(&self) -> Dialect {
        self.source().other()
    }
}

/// 一次转换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub direction: Direction,
    pub ddl: String,
}

/// 可配置的 DDL 转换器
///
/// 默认配置下的输出与 [`to_olap_ddl`] / [`to_general_ddl`] 完全一致。
#[derive(Debug, Clone, Default)]
pub struct DdlTranslator<E = PatternExtractor> {
    config: EngineConfig,
    extractor: E,
}

impl DdlTranslator<PatternExtractor> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            extractor: PatternExtractor,
        }
    }
}

impl<E: MetadataExtractor> DdlTranslator<E> {
    pub fn with_extractor(config: EngineConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 通用方言 → OLAP 方言
    ///
    /// 表注释取 `COMMENT = '...'` 的第一个匹配，找不到时使用表名。
    pub fn to_olap(&self, table_name: &str, columns: &[Column], raw_ddl: &str) -> String {
        let table_comment = self
            .extractor
            .olap_table_comment(raw_ddl)
            .unwrap_or_else(|| table_name.to_string());

        if !columns.iter().any(|c| c.is_primary_key) {
            debug!(
                "表 {} 没有主键列，使用 {} 作为 UNIQUE KEY",
                table_name, self.config.olap.fallback_key
            );
        }

        olap::render_create_table(&self.config.olap, table_name, columns, &table_comment)
    }

    /// OLAP 方言 → 通用方言
    ///
    /// 表注释取列定义右括号之后的 COMMENT 子句，找不到时不输出。
    pub fn to_general(&self, table_name: &str, columns: &[Column], raw_ddl: &str) -> String {
        let table_comment = self.extractor.general_table_comment(raw_ddl);
        general::render_create_table(
            &self.config.general,
            table_name,
            columns,
            table_comment.as_deref(),
        )
    }

    pub fn convert(&self, schema: &TableSchema, direction: Direction) -> String {
        match direction {
            Direction::GeneralToOlap => {
                self.to_olap(&schema.name, &schema.columns, &schema.raw_ddl)
            }
            Direction::OlapToGeneral => {
                self.to_general(&schema.name, &schema.columns, &schema.raw_ddl)
            }
        }
    }

    /// 先识别原始 DDL 的方言，再转换为另一种方言
    pub fn convert_auto(&self, schema: &TableSchema) -> Conversion {
        let source = self.extractor.detect(&schema.raw_ddl);
        let direction = Direction::from_source(source);
        debug!("表 {} 识别为 {} 方言", schema.name, source);
        Conversion {
            direction,
            ddl: self.convert(schema, direction),
        }
    }
}

fn default_translator() -> DdlTranslator {
    DdlTranslator::new(EngineConfig::default())
}

/// 通用方言 → OLAP 方言（默认配置）
pub fn to_olap_ddl(table_name: &str, columns: &[Column], raw_ddl: &str) -> String {
    default_translator().to_olap(table_name, columns, raw_ddl)
}

/// OLAP 方言 → 通用方言（默认配置）
pub fn to_general_ddl(table_name: &str, columns: &[Column], raw_ddl: &str) -> String {
    default_translator().to_general(table_name, columns, raw_ddl)
}

/// 按指定方向转换（默认配置）
pub fn convert(schema: &TableSchema, direction: Direction) -> String {
    default_translator().convert(schema, direction)
}

/// 自动识别方向转换（默认配置）
pub fn convert_auto(schema: &TableSchema) -> Conversion {
    default_translator().convert_auto(schema)
}

/// 批量转换为单个脚本（默认配置），`direction` 为 `None` 时逐表自动识别
pub fn convert_batch(tables: &[TableSchema], direction: Option<Direction>) -> BatchOutput {
    default_translator().convert_batch(tables, direction)
}
