use std::path::PathBuf;
use thiserror::Error;

/// 解析処理のエラー
///
/// 表示文字列はそのまま `{"error": "..."}` として出力されるため英語で統一する。
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("File not found")]
    FileNotFound(PathBuf),

    /// 存在するが読めないファイル（権限不足・ディレクトリ等）
    #[error("{}: '{}'", .source, .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
