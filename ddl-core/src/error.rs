use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdlError>;

#[derive(Error, Debug)]
pub enum DdlError {
    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("DDL 解析失败: {0}")]
    Parse(String),

    #[error("未找到可解析的 CREATE TABLE 语句")]
    NoTables,

    #[error("配置文件未找到")]
    ConfigNotFound,

    #[error("自定义错误: {0}")]
    Custom(String),
}

// sqlparser 的错误类型只保留文本描述
impl From<sqlparser::parser::ParserError> for DdlError {
    fn from(err: sqlparser::parser::ParserError) -> Self {
        DdlError::Parse(err.to_string())
    }
}

impl DdlError {
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
