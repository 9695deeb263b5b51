// 私有模块声明
mod app;
mod cli;
mod commands;
pub mod project_info;
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::CliApp;
pub use cli::{Cli, Commands, CrudKind};
pub use commands::load_tables;
pub use utils::setup_logging;
