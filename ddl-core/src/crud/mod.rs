//! CRUD 模板语句生成
//!
//! 用于表浏览器中的“生成 SQL”菜单，输出的是模板而不是可直接执行的语句：
//! INSERT 使用 `?` 占位符，UPDATE / DELETE 用类型默认字面量占位。


use serde::Serialize;

use crate::config::{CrudConfig, EngineConfig};
use crate::constants::crud::{AUTO_INCREMENT_HINT, PLACEHOLDER};
use crate::schema::Column;

/// 一张表的四条模板语句
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrudStatements {
    pub select: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

/// 可配置的 CRUD 模板生成器
#[derive(Debug, Clone, Default)]
pub struct CrudGenerator {
    config: CrudConfig,
}

impl CrudGenerator {
    pub fn new(config: CrudConfig) -> Self {
        Self { config }
    }

    pub fn from_engine_config(config: &EngineConfig) -> Self {
        Self::new(config.crud.clone())
    }

    pub fn select(&self, table_name: &str, columns: &[Column]) -> String {
        let col_names = quoted_names(columns.iter());
        format!(
            "SELECT {col_names} FROM `{table_name}` LIMIT {};",
            self.config.select_limit
        )
    }

    /// 主键列名中包含 `auto` 的视为自增列，不出现在 INSERT 中
    pub fn insert(&self, table_name: &str, columns: &[Column]) -> String {
        let valid_cols: Vec<&Column> = columns
            .iter()
            .filter(|c| !(c.is_primary_key && c.name.contains(AUTO_INCREMENT_HINT)))
            .collect();
        let col_names = quoted_names(valid_cols.iter().copied());
        let values = vec![PLACEHOLDER; valid_cols.len()].join(", ");
        format!("INSERT INTO `{table_name}` ({col_names}) VALUES ({values});")
    }

    pub fn update(&self, table_name: &str, columns: &[Column]) -> String {
        let set_clause = columns
            .iter()
            .filter(|c| !c.is_primary_key)
            .map(|c| format!("`{}` = {}", c.name, default_literal(&c.data_type)))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE `{table_name}` SET {set_clause} WHERE {};",
            where_clause(columns)
        )
    }

    pub fn delete(&self, table_name: &str, columns: &[Column]) -> String {
        format!("DELETE FROM `{table_name}` WHERE {};", where_clause(columns))
    }

    pub fn generate(&self, table_name: &str, columns: &[Column]) -> CrudStatements {
        CrudStatements {
            select: self.select(table_name, columns),
            insert: self.insert(table_name, columns),
            update: self.update(table_name, columns),
            delete: self.delete(table_name, columns),
        }
    }
}

/// 按类型给出模板中的默认字面量
pub fn default_literal(data_type: &str) -> &'static str {
    let t = data_type.to_lowercase();
    if ["int", "decimal", "double", "float"]
        .iter()
        .any(|k| t.contains(k))
    {
        return "0";
    }
    if t.contains("bool") {
        return "false";
    }
    "''"
}

/// 第一个主键列，没有主键时取第一列；没有列时为 `1=1`
fn where_clause(columns: &[Column]) -> String {
    columns
        .iter()
        .find(|c| c.is_primary_key)
        .or_else(|| columns.first())
        .map(|c| format!("`{}` = {}", c.name, default_literal(&c.data_type)))
        .unwrap_or_else(|| "1=1".to_string())
}

fn quoted_names<'a>(columns: impl Iterator<Item = &'a Column>) -> String {
    columns
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn select_sql(table_name: &str, columns: &[Column]) -> String {
    CrudGenerator::default().select(table_name, columns)
}

pub fn insert_sql(table_name: &str, columns: &[Column]) -> String {
    CrudGenerator::default().insert(table_name, columns)
}

pub fn update_sql(table_name: &str, columns: &[Column]) -> String {
    CrudGenerator::default().update(table_name, columns)
}

pub fn delete_sql(table_name: &str, columns: &[Column]) -> String {
    CrudGenerator::default().delete(table_name, columns)
}
