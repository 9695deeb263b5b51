use super::types::{Column, TableSchema};
use crate::error::DdlError;
use crate::scan::column_list_close;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlparser::ast::{ColumnDef, ColumnOption, Statement, TableConstraint};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;
use tracing::{debug, info, warn};

static CREATE_TABLE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*CREATE\s+TABLE").expect("create table pattern"));

static SIZE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*(\d+)\s*(?:,\s*(\d+)\s*)?\)").expect("size suffix pattern")
});

static TAIL_ENGINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bENGINE\s*=\s*(\w+)").expect("engine pattern"));

static TAIL_COLLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bCOLLATE\s*=?\s*(\w+)").expect("collate pattern"));

static TAIL_KEY_COLUMNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:UNIQUE|DUPLICATE|AGGREGATE|PRIMARY)\s+KEY\s*\(([^)]*)\)")
        .expect("key columns pattern")
});

/// 解析 SQL 文本中的全部 CREATE TABLE 语句，构造列模型
///
/// 列定义部分交给 sqlparser（MySQL 方言）解析；列定义之后的表选项
/// （ENGINE、COMMENT、Doris 的 KEY / DISTRIBUTED BY 等）不参与语法解析，
/// 只用于提取引擎、排序规则和 OLAP 键列。无法解析的语句会被跳过。
pub fn parse_create_tables(sql_content: &str) -> Result<Vec<TableSchema>, DdlError> {
    let mut tables = Vec::new();
    let dialect = MySqlDialect {};

    for statement in extract_create_table_statements(sql_content) {
        debug!("解析 CREATE TABLE 语句: {}", statement);

        let Some((definition, tail)) = split_definition(&statement) else {
            warn!("CREATE TABLE 语句缺少完整的列定义，已跳过: {}", statement);
            continue;
        };

        match Parser::parse_sql(&dialect, definition) {
            Ok(parsed) => {
                for stmt in parsed {
                    if let Statement::CreateTable(create_table) = stmt {
                        let name = unquote_ident(&create_table.name.to_string());

                        let mut pk_columns: Vec<String> = Vec::new();
                        for constraint in &create_table.constraints {
                            if let TableConstraint::PrimaryKey { columns, .. } = constraint {
                                pk_columns
                                    .extend(columns.iter().map(|c| unquote_ident(&c.to_string())));
                            }
                        }
                        pk_columns.extend(tail_key_columns(tail));

                        let columns = create_table
                            .columns
                            .iter()
                            .map(|def| {
                                let mut column = parse_column_definition(def);
                                if pk_columns.iter().any(|pk| pk == &column.name) {
                                    column.is_primary_key = true;
                                    column.nullable = false;
                                }
                                column
                            })
                            .collect();

                        let mut table = TableSchema::new(name, columns, statement.clone());
                        table.engine = capture(&TAIL_ENGINE, tail);
                        table.collation = capture(&TAIL_COLLATE, tail);
                        debug!("解析表: {} ({} 列)", table.name, table.columns.len());
                        tables.push(table);
                    }
                }
            }
            Err(e) => {
                warn!("解析 SQL 语句失败: {} - 错误: {}", statement, e);
            }
        }
    }

    if tables.is_empty() {
        return Err(DdlError::NoTables);
    }

    info!("成功解析 {} 个表", tables.len());
    Ok(tables)
}

/// 从脚本中提取 CREATE TABLE 语句
fn extract_create_table_statements(content: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current_statement = String::new();
    let mut in_create_table = false;
    let mut paren_count: i32 = 0;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // 语句之外的空行和注释
        if !in_create_table
            && (trimmed.is_empty() || trimmed.starts_with("--") || trimmed.starts_with("/*"))
        {
            continue;
        }

        if !in_create_table && CREATE_TABLE_START.is_match(line) {
            in_create_table = true;
            current_statement.clear();
            paren_count = 0;
            quote = None;
            escape_next = false;
        }

        if !in_create_table {
            continue;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        for ch in line.chars() {
            if escape_next {
                escape_next = false;
                continue;
            }

            match (quote, ch) {
                (Some(_), '\\') => escape_next = true,
                (Some(open), c) if c == open => quote = None,
                (Some(_), _) => {}
                (None, '\'' | '"' | '`') => quote = Some(ch),
                (None, '(') => paren_count += 1,
                (None, ')') => paren_count -= 1,
                (None, ';') if paren_count <= 0 => {
                    statements.push(current_statement.trim().to_string());
                    current_statement.clear();
                    in_create_table = false;
                    paren_count = 0;
                    break;
                }
                _ => {}
            }
        }
    }

    // 没有分号结尾的最后一条语句
    if in_create_table && !current_statement.trim().is_empty() {
        statements.push(current_statement.trim().to_string());
    }

    debug!("提取到 {} 个 CREATE TABLE 语句", statements.len());
    statements
}

/// 按列定义的右括号把语句切成 `CREATE TABLE x (...)` 和其后的表选项
fn split_definition(statement: &str) -> Option<(&str, &str)> {
    let end = column_list_close(statement)? + 1;
    Some((&statement[..end], &statement[end..]))
}

/// 解析列定义
fn parse_column_definition(column: &ColumnDef) -> Column {
    let data_type = column.data_type.to_string();
    let mut result = Column::new(column.name.value.clone(), data_type.clone());

    if let Some(caps) = SIZE_SUFFIX.captures(&data_type) {
        result.length = caps.get(1).and_then(|m| m.as_str().parse().ok());
        result.scale = caps.get(2).and_then(|m| m.as_str().parse().ok());
    }

    for option in &column.options {
        match &option.option {
            ColumnOption::NotNull => {
                result.nullable = false;
            }
            ColumnOption::Null => {
                result.nullable = true;
            }
            ColumnOption::Default(expr) => {
                result.default_value = Some(unquote_literal(&expr.to_string()));
            }
            ColumnOption::Comment(c) => {
                result.comment = Some(c.clone());
            }
            ColumnOption::Unique { is_primary, .. } => {
                if *is_primary {
                    result.is_primary_key = true;
                    result.nullable = false; // 主键不能为空
                }
            }
            _ => {}
        }
    }

    result
}

/// 表选项中 `UNIQUE KEY(...)` / `DUPLICATE KEY(...)` 等声明的键列
fn tail_key_columns(tail: &str) -> Vec<String> {
    TAIL_KEY_COLUMNS
        .captures_iter(tail)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| m.as_str().split(','))
        .map(unquote_ident)
        .filter(|name| !name.is_empty())
        .collect()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 去掉标识符的引号；带库名时只保留最后一段
fn unquote_ident(raw: &str) -> String {
    let last = raw.rsplit('.').next().unwrap_or(raw);
    last.trim().trim_matches(|c| c == '`' || c == '"').to_string()
}

fn unquote_literal(raw: &str) -> String {
    raw.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw)
        .to_string()
}
