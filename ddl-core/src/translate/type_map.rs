//! 列类型映射
//!
//! 两个方向的映射不是互逆的：通用 → OLAP 会丢失整型显示宽度、
//! 浮点精度和 TEXT 的细分，OLAP → 通用只处理 STRING 和 BOOLEAN。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dialect::Dialect;
use crate::schema::Column;

static TINYINT_ONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^TINYINT\s*\(\s*1\s*\)$").expect("tinyint(1) pattern"));

static INTEGER_WITH_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(BIGINT|INT|TINYINT|SMALLINT|MEDIUMINT)\s*\(\s*\d+\s*\)$")
        .expect("integer width pattern")
});

static FLOAT_WITH_PRECISION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(DOUBLE|FLOAT)\s*\(\s*\d+\s*,\s*\d+\s*\)$").expect("float precision pattern")
});

static DATETIME_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(DATETIME|TIMESTAMP)(\s*\(\s*\d+\s*\))?$").expect("datetime pattern")
});

/// 单个方向的列类型映射
pub trait TypeMapper {
    fn source(&self) -> Dialect;

    fn target(&self) -> Dialect;

    /// 返回目标方言下的类型文本
    fn map_column(&self, column: &Column) -> String;
}

/// 通用 → OLAP
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralToOlapMapper;

/// OLAP → 通用
#[derive(Debug, Clone, Copy, Default)]
pub struct OlapToGeneralMapper;

impl TypeMapper for GeneralToOlapMapper {
    fn source(&self) -> Dialect {
        Dialect::General
    }

    fn target(&self) -> Dialect {
        Dialect::Olap
    }

    fn map_column(&self, column: &Column) -> String {
        olap_type(&column.data_type, column.length)
    }
}

impl TypeMapper for OlapToGeneralMapper {
    fn source(&self) -> Dialect {
        Dialect::Olap
    }

    fn target(&self) -> Dialect {
        Dialect::General
    }

    fn map_column(&self, column: &Column) -> String {
        general_type(&column.data_type)
    }
}

/// 通用方言类型 → OLAP 类型，自上而下第一个命中的规则生效
pub fn olap_type(raw_type: &str, length: Option<u32>) -> String {
    let upper = raw_type.trim().to_uppercase();

    if TINYINT_ONE.is_match(&upper) {
        return "BOOLEAN".to_string();
    }

    // OLAP 不支持整型显示宽度：BIGINT(20) -> BIGINT
    if let Some(caps) = INTEGER_WITH_WIDTH.captures(&upper) {
        return caps[1].to_string();
    }

    // 精度交给 DECIMAL 表达：DOUBLE(10,2) -> DOUBLE
    if let Some(caps) = FLOAT_WITH_PRECISION.captures(&upper) {
        return caps[1].to_string();
    }

    if upper.contains("TEXT") {
        return "STRING".to_string();
    }

    if upper == "VARCHAR" {
        return match length.filter(|l| *l > 0) {
            Some(l) => format!("VARCHAR({l})"),
            None => "STRING".to_string(),
        };
    }

    if DATETIME_LIKE.is_match(&upper) {
        return "DATETIME".to_string();
    }

    upper
}

/// OLAP 类型 → 通用方言类型
pub fn general_type(raw_type: &str) -> String {
    let upper = raw_type.trim().to_uppercase();
    match upper.as_str() {
        "STRING" => "TEXT".to_string(),
        "BOOLEAN" => "TINYINT(1)".to_string(),
        _ => upper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_olap_type_table() {
        assert_eq!(olap_type("TINYINT(1)", None), "BOOLEAN");
        assert_eq!(olap_type("tinyint(1)", None), "BOOLEAN");
        assert_eq!(olap_type("TINYINT(4)", None), "TINYINT");
        assert_eq!(olap_type("bigint(20)", None), "BIGINT");
        assert_eq!(olap_type("INT(11)", None), "INT");
        assert_eq!(olap_type("MEDIUMINT(8)", None), "MEDIUMINT");
        assert_eq!(olap_type("DOUBLE(10,2)", None), "DOUBLE");
        assert_eq!(olap_type("float(7, 3)", None), "FLOAT");
        assert_eq!(olap_type("LONGTEXT", None), "STRING");
        assert_eq!(olap_type("text", None), "STRING");
        assert_eq!(olap_type("VARCHAR", Some(64)), "VARCHAR(64)");
        assert_eq!(olap_type("varchar", Some(0)), "STRING");
        assert_eq!(olap_type("VARCHAR", None), "STRING");
        assert_eq!(olap_type("VARCHAR(100)", Some(100)), "VARCHAR(100)");
        assert_eq!(olap_type("timestamp", None), "DATETIME");
        assert_eq!(olap_type("DATETIME(3)", None), "DATETIME");
        assert_eq!(olap_type("decimal(10,2)", None), "DECIMAL(10,2)");
        assert_eq!(olap_type("date", None), "DATE");
    }

    #[test]
    fn test_unsigned_integer_is_left_alone() {
        // 只有完整匹配 `INT(n)` 才会去掉宽度
        assert_eq!(olap_type("bigint(20) unsigned", None), "BIGINT(20) UNSIGNED");
    }

    #[test]
    fn test_general_type_table() {
        assert_eq!(general_type("STRING"), "TEXT");
        assert_eq!(general_type("string"), "TEXT");
        assert_eq!(general_type("Boolean"), "TINYINT(1)");
        assert_eq!(general_type("largeint"), "LARGEINT");
        assert_eq!(general_type("VARCHAR(32)"), "VARCHAR(32)");
    }

    #[test]
    fn test_mapper_directions() {
        let column = Column::new("flag", "tinyint(1)");
        assert_eq!(GeneralToOlapMapper.map_column(&column), "BOOLEAN");
        assert_eq!(GeneralToOlapMapper.source(), Dialect::General);
        assert_eq!(OlapToGeneralMapper.target(), Dialect::General);
        assert_eq!(
            OlapToGeneralMapper.map_column(&Column::new("flag", "BOOLEAN")),
            "TINYINT(1)"
        );
    }
}
