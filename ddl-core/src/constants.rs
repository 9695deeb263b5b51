/// OLAP（Doris 风格）建表相关常量
pub mod olap {
    /// 默认分桶数
    pub const DEFAULT_BUCKETS: u32 = 10;

    /// 默认副本数
    pub const DEFAULT_REPLICATION_NUM: u32 = 1;

    /// 默认开启 merge-on-write
    pub const DEFAULT_MERGE_ON_WRITE: bool = true;

    /// 没有任何主键列时使用的键列
    pub const FALLBACK_KEY_COLUMN: &str = "id";
}

/// 通用关系型（MySQL 风格）建表相关常量
pub mod general {
    /// 默认存储引擎
    pub const DEFAULT_ENGINE: &str = "InnoDB";

    /// 默认字符集
    pub const DEFAULT_CHARSET: &str = "utf8mb4";
}

/// CRUD 模板相关常量
pub mod crud {
    /// SELECT 模板的默认行数限制
    pub const DEFAULT_SELECT_LIMIT: u32 = 100;

    /// INSERT 模板中的参数占位符
    pub const PLACEHOLDER: &str = "?";

    /// 主键列名包含该子串时视为自增列
    pub const AUTO_INCREMENT_HINT: &str = "auto";
}

/// 配置文件相关常量
pub mod config {
    /// 按优先级查找的配置文件名
    pub const CONFIG_FILE_NAMES: &[&str] = &["ddl.toml", ".ddl.toml"];
}

/// 批量转换脚本相关常量
pub mod batch {
    /// 每张表语句前的注释前缀
    pub const TABLE_HEADER_PREFIX: &str = "-- Table: ";
}
