use super::type_map::{OlapToGeneralMapper, TypeMapper};
use crate::config::GeneralConfig;
use crate::schema::{Column, primary_key_names};

/// 生成通用关系型（MySQL 风格）CREATE TABLE 语句
///
/// 每列显式输出 `NULL` / `NOT NULL`；PRIMARY KEY 中的列名加反引号，
/// 没有主键列时不输出该子句，表注释为空时不输出 COMMENT。
pub(crate) fn render_create_table(
    config: &GeneralConfig,
    table_name: &str,
    columns: &[Column],
    table_comment: Option<&str>,
) -> String {
    let field_lines: Vec<String> = columns
        .iter()
        .map(|col| {
            let general_type = OlapToGeneralMapper.map_column(col);
            let null_str = if col.nullable { "NULL" } else { "NOT NULL" };
            let comment = col
                .comment_text()
                .map(|c| format!(" COMMENT '{c}'"))
                .unwrap_or_default();
            format!("    `{}` {} {}{}", col.name, general_type, null_str, comment)
        })
        .collect();

    let primary_keys = primary_key_names(columns);
    let pk_clause = if primary_keys.is_empty() {
        String::new()
    } else {
        let quoted: Vec<String> = primary_keys.iter().map(|k| format!("`{k}`")).collect();
        format!(",\n    PRIMARY KEY ({})", quoted.join(", "))
    };

    let comment_clause = table_comment
        .filter(|c| !c.is_empty())
        .map(|c| format!(" COMMENT='{c}'"))
        .unwrap_or_default();

    format!(
        "CREATE TABLE `{table_name}` (\n{fields}{pk_clause}\n) \
         ENGINE={engine} DEFAULT CHARSET={charset}{comment_clause};",
        fields = field_lines.join(",\n"),
        engine = config.engine,
        charset = config.charset,
    )
}
