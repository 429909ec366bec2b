use crate::error::{AnalyzeError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::Level;

/// ログ設定
///
/// `--config` で明示されたときだけファイルから読み込む。
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// error / warn / info / debug / trace
    pub log_level: String,
    /// stderrへのログ出力で色付けするか
    pub ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            ansi: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        // 不正なレベルは読み込み時点で弾く
        config.level()?;
        Ok(config)
    }

    /// 設定ファイルのパスが指定されていれば読み込み、なければデフォルト
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "error" => Ok(Level::ERROR),
            "warn" | "warning" => Ok(Level::WARN),
            "info" => Ok(Level::INFO),
            "debug" => Ok(Level::DEBUG),
            "trace" => Ok(Level::TRACE),
            other => Err(AnalyzeError::Config(format!(
                "unknown log_level: {}. Use error, warn, info, debug, or trace",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.ansi);
        assert_eq!(config.level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log_level": "DEBUG"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        // 未指定のフィールドはデフォルト
        assert!(!config.ansi);
    }

    #[test]
    fn test_load_unknown_level() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log_level": "loud"}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AnalyzeError::Config(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AnalyzeError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config/12345.json")).unwrap_err();
        assert!(matches!(err, AnalyzeError::Io(_)));
    }
}
