use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// 表列定义
///
/// `data_type` 是方言相关的原始类型文本（如 `BIGINT(20)`、`STRING`），
/// 引擎只做子串/模式匹配，不会把它解析成结构化类型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(
        default,
        deserialize_with = "positive_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<u32>,
    #[serde(
        default,
        deserialize_with = "positive_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub scale: Option<u32>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// 表定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, alias = "ddl")]
    pub raw_ddl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// 长度/精度只保留正数，`0`、负数和 `null` 都视为未设置
fn positive_size<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(|v| u32::try_from(v).ok()).filter(|v| *v > 0))
}

static HAS_SIZE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.*\)").expect("size suffix pattern"));

impl Column {
    /// 创建一个可空、非主键的列
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            length: None,
            scale: None,
            nullable: true,
            is_primary_key: false,
            default_value: None,
            comment: None,
        }
    }

    /// 标记为主键列（主键列不可为空）
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.nullable = false;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// 非空注释
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    /// 格式化列类型，补全长度和精度信息
    ///
    /// 例如：varchar + length=50 => VARCHAR(50)，
    /// decimal + length=10 + scale=2 => DECIMAL(10,2)。
    /// 只用于展示，不参与方言转换。
    pub fn display_type(&self) -> String {
        let upper = self.data_type.trim().to_uppercase();

        // 已经带括号的类型直接返回
        if HAS_SIZE_SUFFIX.is_match(&upper) {
            return upper;
        }

        let length = self.length.filter(|l| *l > 0);
        let scale = self.scale.filter(|s| *s > 0);

        match upper.as_str() {
            "VARCHAR" | "CHAR" | "VARBINARY" | "BINARY" => match length {
                Some(l) => format!("{upper}({l})"),
                None => upper,
            },
            "DECIMAL" | "NUMERIC" => match (length, scale) {
                (Some(l), Some(s)) => format!("{upper}({l},{s})"),
                (Some(l), None) => format!("{upper}({l})"),
                _ => upper,
            },
            "DATETIME" | "TIMESTAMP" | "TIME" => match scale {
                Some(s) => format!("{upper}({s})"),
                None => upper,
            },
            _ => upper,
        }
    }
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<Column>, raw_ddl: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            raw_ddl: raw_ddl.into(),
            engine: None,
            collation: None,
        }
    }

    /// 主键列名，保持输入顺序
    pub fn primary_keys(&self) -> Vec<&str> {
        primary_key_names(&self.columns)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// 所有 `is_primary_key` 列的列名，保持输入顺序
pub(crate) fn primary_key_names(columns: &[Column]) -> Vec<&str> {
    columns
        .iter()
        .filter(|c| c.is_primary_key)
        .map(|c| c.name.as_str())
        .collect()
}
