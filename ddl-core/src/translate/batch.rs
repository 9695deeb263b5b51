use tracing::info;

use super::{DdlTranslator, Direction};
use crate::constants::batch::TABLE_HEADER_PREFIX;
use crate::dialect::MetadataExtractor;
use crate::schema::TableSchema;

/// 批量转换结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    /// 所有表的 DDL，按输入顺序拼接
    pub script: String,
    /// 每张表实际使用的方向
    pub directions: Vec<(String, Direction)>,
}

impl BatchOutput {
    pub fn table_count(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

impl<E: MetadataExtractor> DdlTranslator<E> {
    /// 把多张表转换到同一个脚本里
    ///
    /// 每条语句前加一行 `-- Table: <name>`，语句之间空一行。
    pub fn convert_batch(
        &self,
        tables: &[TableSchema],
        direction: Option<Direction>,
    ) -> BatchOutput {
        let mut sections = Vec::with_capacity(tables.len());
        let mut directions = Vec::with_capacity(tables.len());

        for table in tables {
            let (direction, ddl) = match direction {
                Some(direction) => (direction, self.convert(table, direction)),
                None => {
                    let conversion = self.convert_auto(table);
                    (conversion.direction, conversion.ddl)
                }
            };
            sections.push(format!("{TABLE_HEADER_PREFIX}{}\n{ddl}", table.name));
            directions.push((table.name.clone(), direction));
        }

        info!("批量转换完成: {} 张表", directions.len());

        let mut script = sections.join("\n\n");
        if !script.is_empty() {
            script.push('\n');
        }

        BatchOutput { script, directions }
    }
}
