pub mod compat;
pub mod config;
pub mod constants;
pub mod crud;
pub mod dialect;
pub mod error;
mod scan;
pub mod schema;
pub mod translate;

pub use compat::{Compatibility, ConversionRisk, FieldMapping, MappingReport, check, check_mappings};
pub use config::EngineConfig;
pub use crud::{
    CrudGenerator, CrudStatements, default_literal, delete_sql, insert_sql, select_sql, update_sql,
};
pub use dialect::{Dialect, MetadataExtractor, PatternExtractor, detect, detect_optional};
pub use error::{DdlError, Result};
pub use schema::{Column, TableSchema};
pub use translate::{
    BatchOutput, Conversion, DdlTranslator, Direction, convert, convert_auto, convert_batch,
    to_general_ddl, to_olap_ddl,
};
