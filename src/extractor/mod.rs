pub mod patterns;
mod types;

pub use patterns::{extract_capacity, extract_score, MAX_SCORE};
pub use types::{ErrorRecord, ExtractionResult};

use crate::error::{AnalyzeError, Result};
use std::path::Path;
use tracing::debug;

/// ファイルを読み込み、スコアとキャパシティを抽出する
pub fn analyze(file_path: &Path) -> Result<ExtractionResult> {
    if !file_path.exists() {
        return Err(AnalyzeError::FileNotFound(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|source| AnalyzeError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), file_path.display());

    let content = decode_text_lossy(&bytes);
    let result = extract(&content);
    debug!(score = ?result.score, capacity = ?result.capacity, "extraction done");

    Ok(result)
}

/// テキストバッファから抽出（ファイルI/Oなし）
pub fn extract(content: &str) -> ExtractionResult {
    ExtractionResult {
        score: extract_score(content),
        capacity: extract_capacity(content),
    }
}

/// UTF-8として不正なバイト列を読み飛ばしてデコード
///
/// `String::from_utf8_lossy` と違い置換文字（U+FFFD）も挿入しない。
pub fn decode_text_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
