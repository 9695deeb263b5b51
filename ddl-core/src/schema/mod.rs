mod parser;
mod types;


// 重新导出公共接口
pub use parser::parse_create_tables;
pub use types::{Column, TableSchema};
pub(crate) use types::primary_key_names;
