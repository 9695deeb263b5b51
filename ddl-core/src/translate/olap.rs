use super::type_map::{GeneralToOlapMapper, TypeMapper};
use crate::config::OlapConfig;
use crate::schema::{Column, primary_key_names};

/// 生成 OLAP（Doris 风格）CREATE TABLE 语句
///
/// 没有主键列时键列退化为 `config.fallback_key`；列不输出可空性。
pub(crate) fn render_create_table(
    config: &OlapConfig,
    table_name: &str,
    columns: &[Column],
    table_comment: &str,
) -> String {
    let primary_keys = primary_key_names(columns);
    let key_list = if primary_keys.is_empty() {
        config.fallback_key.clone()
    } else {
        primary_keys.join(", ")
    };

    let field_lines: Vec<String> = columns
        .iter()
        .map(|col| {
            let olap_type = GeneralToOlapMapper.map_column(col);
            let comment = col
                .comment_text()
                .map(|c| format!(" COMMENT '{c}'"))
                .unwrap_or_default();
            format!("    `{}` {}{}", col.name, olap_type, comment)
        })
        .collect();

    format!(
        "CREATE TABLE `{table_name}` (\n\
         {fields}\n\
         ) ENGINE = OLAP\n\
         UNIQUE KEY({key_list}) COMMENT '{table_comment}'\n\
         DISTRIBUTED BY HASH({key_list}) BUCKETS {buckets}\n\
         PROPERTIES (\n    \
         \"replication_num\" = \"{replication}\",\n    \
         \"enable_unique_key_merge_on_write\" = \"{merge_on_write}\"\n\
         );",
        fields = field_lines.join(",\n"),
        buckets = config.buckets,
        replication = config.replication_num,
        merge_on_write = config.merge_on_write,
    )
}
