//! 主题加载错误

use std::path::PathBuf;

/// 主题无法加载时返回的错误
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// 无法读取主题文件
    #[error("failed to read theme file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 格式错误或结构不符
    #[error("invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
