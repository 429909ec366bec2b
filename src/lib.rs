//! Agency Analyzer
//!
//! レポートファイルからスコアとキャパシティを抽出し、1行のJSONで出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;

pub use error::{AnalyzeError, Result};
pub use extractor::{analyze, ExtractionResult};
