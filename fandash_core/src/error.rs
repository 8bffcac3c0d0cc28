use std::{io, path::PathBuf};

use thiserror::Error;

/// 定义数据解码和配置加载过程中可能发生的各种错误。
///
/// 纯计算函数（分级、差值、歌词解析、片段提取）从不返回错误，
/// 只有处理外部输入的边界函数才会用到它。
#[derive(Error, Debug)]
pub enum DashError {
    /// JSON 解析错误。
    #[error("解析 JSON 内容 {context} 失败: {source}")]
    JsonParse {
        /// 底层 `serde_json` 错误
        #[source]
        source: serde_json::Error,
        /// 有关错误发生位置的上下文信息。
        context: String,
    },
    /// TOML 解析错误。
    #[error("解析 TOML 失败: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// 文件读写等IO错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 找不到用户配置目录。
    #[error("无法找到用户配置目录")]
    ConfigDirUnavailable,
    /// 配置文件内容不合法。
    #[error("配置 {path} 无效: {reason}")]
    InvalidConfig {
        /// 配置文件路径
        path: PathBuf,
        /// 具体原因
        reason: String,
    },
}

impl DashError {
    /// 创建一个带有上下文的 `JsonParse` 错误。
    #[must_use]
    pub fn json_parse(source: serde_json::Error, context: impl Into<String>) -> Self {
        Self::JsonParse {
            source,
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
