use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::scan::column_list_close;

/// `COMMENT = '...'`，只认等号加单引号的写法
static ASSIGNED_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)COMMENT\s*=\s*'([^']*)'").expect("assigned comment pattern"));

/// 右括号之后（跨行、非贪婪）的可选 `ENGINE = xxx` 与 `COMMENT` 子句
static TRAILING_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\).*?(?:ENGINE\s*=\s*\w+)?.*?COMMENT\s*=?\s*['"]([^'"]*)['"]"#)
        .expect("trailing comment pattern")
});

/// 从原始 DDL 中提取结构化信息
///
/// 转换器只通过这个接口读取 DDL 文本，替换成基于语法的实现时调用方不用改。
pub trait MetadataExtractor {
    /// 判断方言
    fn detect(&self, raw_ddl: &str) -> Dialect;

    /// 转为 OLAP 方言时使用的表注释，找不到时返回 `None`
    fn olap_table_comment(&self, raw_ddl: &str) -> Option<String>;

    /// 转为通用方言时使用的表注释，找不到时返回 `None`
    fn general_table_comment(&self, raw_ddl: &str) -> Option<String>;
}

/// 基于正则和子串匹配的默认实现
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl MetadataExtractor for PatternExtractor {
    fn detect(&self, raw_ddl: &str) -> Dialect {
        super::detect(raw_ddl)
    }

    fn olap_table_comment(&self, raw_ddl: &str) -> Option<String> {
        first_capture(&ASSIGNED_COMMENT, raw_ddl).filter(|c| !c.is_empty())
    }

    /// 从列定义的右括号开始匹配；括号不配对时退回整段文本，
    /// 这时第一个右括号可能来自列类型（如 `VARCHAR(100)`），捕获到的是列注释。
    fn general_table_comment(&self, raw_ddl: &str) -> Option<String> {
        let tail = column_list_close(raw_ddl).map_or(raw_ddl, |close| &raw_ddl[close..]);
        first_capture(&TRAILING_COMMENT, tail).filter(|c| !c.is_empty())
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
