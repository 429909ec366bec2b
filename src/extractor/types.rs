use serde::{Deserialize, Serialize};

/// 1ファイル分の抽出結果
///
/// 見つからなかった値は `None`（JSONでは `null`）。0 とは区別する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// 0-100 にクランプ済み
    pub score: Option<u32>,

    /// クランプなし（最大3桁）
    pub capacity: Option<u32>,
}

/// 失敗時の出力レコード
#[derive(Debug, Serialize)]
pub struct ErrorRecord<'a> {
    pub error: &'a str,
}
