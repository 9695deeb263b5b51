//! SQL 方言识别
//!
//! 只识别两种方言：通用关系型（MySQL 风格）和 OLAP 列存（Doris 风格）。
//! 所有基于正则/子串的元数据提取都收敛在 [`MetadataExtractor`] 之后。

mod extract;


pub use extract::{MetadataExtractor, PatternExtractor};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 出现任意一个即判定为 OLAP 的标记（大写比较）
const OLAP_MARKERS: &[&str] = &[
    "ENGINE=OLAP",
    "ENGINE = OLAP",
    "DISTRIBUTED BY HASH",
    "DUPLICATE KEY",
    "AGGREGATE KEY",
    "BUCKETS",
];

/// `UNIQUE KEY` 只在没有 InnoDB 引擎声明时算作 OLAP 标记
const UNIQUE_KEY_MARKER: &str = "UNIQUE KEY";
const INNODB_MARKER: &str = "ENGINE=INNODB";

/// 建表语句所属方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// MySQL 风格的通用关系型方言
    #[default]
    General,
    /// Doris 风格的 OLAP 列存方言
    Olap,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::General => "General",
            Dialect::Olap => "Olap",
        }
    }

    /// 另一种方言
    pub fn other(&self) -> Dialect {
        match self {
            Dialect::General => Dialect::Olap,
            Dialect::Olap => Dialect::General,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "mysql" => Ok(Dialect::General),
            "olap" | "doris" => Ok(Dialect::Olap),
            other => Err(format!("未知方言: {other}")),
        }
    }
}

/// 根据 DDL 内容判断方言
///
/// 大小写不敏感的子串匹配，各标记之间是简单的“或”关系，没有优先级。
/// InnoDB 声明只排除 `UNIQUE KEY` 这一个标记。空文本返回 [`Dialect::General`]。
pub fn detect(raw_ddl: &str) -> Dialect {
    if raw_ddl.is_empty() {
        return Dialect::General;
    }

    let upper = raw_ddl.to_uppercase();
    let olap = OLAP_MARKERS.iter().any(|marker| upper.contains(marker))
        || (upper.contains(UNIQUE_KEY_MARKER) && !upper.contains(INNODB_MARKER));

    if olap { Dialect::Olap } else { Dialect::General }
}

/// 调用方可能拿不到 DDL 文本，缺失时按空文本处理
pub fn detect_optional(raw_ddl: Option<&str>) -> Dialect {
    raw_ddl.map(detect).unwrap_or_default()
}
