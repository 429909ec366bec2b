//! 結果の1行JSON出力
//!
//! 区切りは `", "` と `": "`、非ASCII文字は `\uXXXX` にエスケープする。
//! 呼び出し側は stdout の1行をそのまま JSON として読む。

use crate::error::Result;
use crate::extractor::{ErrorRecord, ExtractionResult};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// スペース付き区切り + ASCIIのみのフォーマッタ
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                // BMP外はサロゲートペア
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// 値を1行のJSON文字列にする（改行なし）
pub fn to_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // フォーマッタはASCIIしか書かない
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_line<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let line = to_line(value)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

/// 成功レコードを出力
pub fn emit_result<W: Write>(writer: &mut W, result: &ExtractionResult) -> Result<()> {
    write_line(writer, result)
}

/// エラーレコードを出力
pub fn emit_error<W: Write>(writer: &mut W, message: &str) -> Result<()> {
    write_line(writer, &ErrorRecord { error: message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(result: &ExtractionResult) -> String {
        let mut out = Vec::new();
        emit_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_emit_result_both_present() {
        let result = ExtractionResult { score: Some(87), capacity: Some(5) };
        assert_eq!(emitted(&result), "{\"score\": 87, \"capacity\": 5}\n");
    }

    #[test]
    fn test_emit_result_nulls() {
        let result = ExtractionResult::default();
        assert_eq!(emitted(&result), "{\"score\": null, \"capacity\": null}\n");
    }

    #[test]
    fn test_emit_error() {
        let mut out = Vec::new();
        emit_error(&mut out, "File not found").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"error\": \"File not found\"}\n");
    }

    #[test]
    fn test_non_ascii_escaped() {
        let line = to_line(&ErrorRecord { error: "ファイル é" }).unwrap();
        assert_eq!(line, "{\"error\": \"\\u30d5\\u30a1\\u30a4\\u30eb \\u00e9\"}");
    }

    #[test]
    fn test_astral_char_surrogate_pair() {
        let line = to_line("😀").unwrap();
        assert_eq!(line, "\"\\ud83d\\ude00\"");
    }

    #[test]
    fn test_quotes_and_control_chars_escaped() {
        let line = to_line(&ErrorRecord { error: "a \"b\"\n" }).unwrap();
        assert_eq!(line, "{\"error\": \"a \\\"b\\\"\\n\"}");
    }

    #[test]
    fn test_array_separator() {
        assert_eq!(to_line(&[1, 2, 3]).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_output_round_trips_through_serde() {
        let line = to_line(&ExtractionResult { score: Some(100), capacity: None }).unwrap();
        let parsed: ExtractionResult = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, ExtractionResult { score: Some(100), capacity: None });
    }
}
