use crate::project_info::{metadata, version_info};
use clap::{Parser, Subcommand, ValueEnum};
use ddl_core::Dialect;
use std::path::PathBuf;

/// CRUD 模板类型
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrudKind {
    Select,
    Insert,
    Update,
    Delete,
    All,
}

/// DDL CLI - 建表语句方言转换与 SQL 模板生成工具
#[derive(Parser, Debug)]
#[command(name = "ddl-cli")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径（默认查找 ddl.toml / .ddl.toml）
    #[arg(short, long, env = "DDL_CONFIG")]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 识别 DDL 文件的方言
    Detect {
        /// DDL 文件路径
        file: PathBuf,
    },
    /// 转换建表语句（默认自动识别方向）
    Convert {
        /// DDL 文件或 .json 表结构文件
        file: PathBuf,
        /// 目标方言：olap / doris / general / mysql
        #[arg(long)]
        to: Option<Dialect>,
        /// 输出文件，不指定时打印到标准输出
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 检查两个字段类型是否兼容
    Check {
        /// 源字段类型
        source_type: String,
        /// 目标字段类型
        target_type: String,
    },
    /// 生成 CRUD 模板语句
    Crud {
        /// DDL 文件或 .json 表结构文件
        file: PathBuf,
        /// 表名，不指定时使用第一张表
        #[arg(long)]
        table: Option<String>,
        /// 语句类型
        #[arg(long, value_enum, default_value = "all")]
        kind: CrudKind,
    },
    /// 显示解析出的列模型
    Describe {
        /// DDL 文件或 .json 表结构文件
        file: PathBuf,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 生成带注释的默认配置文件
    InitConfig {
        /// 配置文件路径
        #[arg(default_value = "ddl.toml")]
        path: PathBuf,
        /// 如果配置文件已存在，强制覆盖
        #[arg(long)]
        force: bool,
    },
}
