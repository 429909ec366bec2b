//! スコア・キャパシティの抽出パターン
//!
//! 2つのパターンは互いに独立しており、片方だけが見つかることもある。

use regex::Regex;

/// スコアの上限
pub const MAX_SCORE: u32 = 100;

lazy_static::lazy_static! {
    // "Score: 95", "Rating=88", "Performance: 92%"
    static ref SCORE_RE: Regex =
        Regex::new(r"(?i)(?:Score|Rating|Performance|Grade)\s*[:=]\s*(\d{1,3})").unwrap();
    // "Capacity: 10", "Cases: 5"
    static ref CAPACITY_RE: Regex =
        Regex::new(r"(?i)(?:Capacity|Load|Handle|Cases)\s*[:=]\s*(\d{1,3})").unwrap();
    // Unicode Nd 1文字
    static ref DIGIT_RE: Regex = Regex::new(r"^\d$").unwrap();
}

/// 最初に見つかったスコアを抽出（100超は100に丸める）
pub fn extract_score(text: &str) -> Option<u32> {
    SCORE_RE
        .captures(text)
        .and_then(|cap| parse_digits(&cap[1]))
        .map(|score| score.min(MAX_SCORE))
}

/// 最初に見つかったキャパシティを抽出
pub fn extract_capacity(text: &str) -> Option<u32> {
    CAPACITY_RE
        .captures(text)
        .and_then(|cap| parse_digits(&cap[1]))
}

/// 全角・アラビア数字などを含む10進数字列を整数に変換
pub fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits
        .chars()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(decimal_value(c)?))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Nd文字の数値（0-9）
///
/// Nd は0から9まで連続する10文字単位で並び、隣接する連続ブロックも
/// 10の倍数長で0始まりになる。ブロック先頭からの距離で値が決まる。
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}
