//! 字段映射的类型兼容性检查
//!
//! 基于原始类型文本的子串匹配，不做结构化解析。


use std::fmt;

use serde::{Deserialize, Serialize};

/// 类型转换风险
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionRisk {
    /// 字符串写入数值列
    #[serde(rename = "String -> Number risk")]
    StringToNumber,
    /// BIGINT 写入较窄的整型列
    #[serde(rename = "BigInt -> Int overflow risk")]
    BigIntOverflow,
    /// 日期时间写入非日期、非字符串列
    #[serde(rename = "Date -> Non-Date/String")]
    DateToNonDate,
}

impl ConversionRisk {
    pub fn message(&self) -> &'static str {
        match self {
            ConversionRisk::StringToNumber => "String -> Number risk",
            ConversionRisk::BigIntOverflow => "BigInt -> Int overflow risk",
            ConversionRisk::DateToNonDate => "Date -> Non-Date/String",
        }
    }
}

impl fmt::Display for ConversionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 兼容性结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub compatible: bool,
    #[serde(rename = "warning", default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<ConversionRisk>,
}

impl Compatibility {
    pub const COMPATIBLE: Compatibility = Compatibility {
        compatible: true,
        risk: None,
    };

    fn risky(risk: ConversionRisk) -> Self {
        Self {
            compatible: false,
            risk: Some(risk),
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.risk.map(|r| r.message())
    }
}

/// 检查源类型能否安全写入目标类型
///
/// 任一侧为空时不做判断，直接视为兼容。规则按固定顺序匹配，命中即返回。
pub fn check(source_type: &str, target_type: &str) -> Compatibility {
    let s = source_type.to_lowercase();
    let t = target_type.to_lowercase();

    if s.is_empty() || t.is_empty() {
        return Compatibility::COMPATIBLE;
    }

    let contains_any = |text: &str, needles: &[&str]| needles.iter().any(|n| text.contains(n));

    if contains_any(&s, &["char", "text"]) && contains_any(&t, &["int", "decimal", "double"]) {
        return Compatibility::risky(ConversionRisk::StringToNumber);
    }

    if s.contains("bigint") && t.contains("int") && !t.contains("big") {
        return Compatibility::risky(ConversionRisk::BigIntOverflow);
    }

    if contains_any(&s, &["date", "time"]) && !contains_any(&t, &["date", "time", "char", "text"]) {
        return Compatibility::risky(ConversionRisk::DateToNonDate);
    }

    Compatibility::COMPATIBLE
}

/// 可视化映射工具中的一条字段映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub id: String,
    pub source_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    pub target_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

/// 单条映射的检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub id: String,
    pub source_field: String,
    pub target_field: String,
    #[serde(flatten)]
    pub compatibility: Compatibility,
}

/// 逐条检查字段映射，缺失的类型按空处理
pub fn check_mappings(mappings: &[FieldMapping]) -> Vec<MappingReport> {
    mappings
        .iter()
        .map(|m| MappingReport {
            id: m.id.clone(),
            source_field: m.source_field.clone(),
            target_field: m.target_field.clone(),
            compatibility: check(
                m.source_type.as_deref().unwrap_or_default(),
                m.target_type.as_deref().unwrap_or_default(),
            ),
        })
        .collect()
}
