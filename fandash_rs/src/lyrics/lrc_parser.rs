//! # LRC 格式解析器
//!
//! 逐行分类后再组装成 [`LyricDocument`]。只识别两类方括号行：
//!
//! - 元数据：`[key:value]`，`key` 由 ASCII 字母、数字和下划线组成；
//! - 时间行：`[mm:ss.cc]text`，三段都是两位数字。
//!
//! 其余的方括号行被静默跳过。

use fandash_core::{LrcParseMode, LrcParsingOptions, LyricDocument, LyricLine};
use tracing::trace;

/// 单行的分类结果。
#[derive(Debug, Clone, PartialEq)]
pub enum LrcLineKind<'a> {
    /// `[key:value]`，`value` 已去除首尾空白
    Metadata { key: &'a str, value: &'a str },
    /// `[mm:ss.cc]text`，`text` 已去除首尾空白，可能为空
    Timed {
        time: f64,
        time_text: String,
        text: &'a str,
    },
    /// 空行
    Blank,
    /// 不以 `[` 开头的纯文本行
    Plain(&'a str),
    /// 以 `[` 开头但不符合任何格式的行
    Unrecognized,
}

/// 对一行（会先去除首尾空白）进行分类。
///
/// 同时符合两种格式的行（例如 `[00:05.00]`）按时间行处理。
#[must_use]
pub fn classify_lrc_line(raw_line: &str) -> LrcLineKind<'_> {
    let line = raw_line.trim();
    if line.is_empty() {
        return LrcLineKind::Blank;
    }
    if !line.starts_with('[') {
        return LrcLineKind::Plain(line);
    }
    if let Some(timed) = parse_timed(line) {
        return timed;
    }
    parse_metadata(line).unwrap_or(LrcLineKind::Unrecognized)
}

/// 匹配 `^\[(\d{2}):(\d{2})\.(\d{2})\](.*)$`
fn parse_timed(line: &str) -> Option<LrcLineKind<'_>> {
    let bytes = line.as_bytes();
    if bytes.len() < 10 || bytes[3] != b':' || bytes[6] != b'.' || bytes[9] != b']' {
        return None;
    }
    let minutes = two_digits(&bytes[1..3])?;
    let seconds = two_digits(&bytes[4..6])?;
    let centis = two_digits(&bytes[7..9])?;

    Some(LrcLineKind::Timed {
        time: f64::from(minutes * 60 + seconds) + f64::from(centis) / 100.0,
        // 展示时不带百分秒
        time_text: line[1..6].to_string(),
        text: line[10..].trim(),
    })
}

fn two_digits(pair: &[u8]) -> Option<u32> {
    match pair {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

/// 匹配 `^\[(\w+):(.+)\]$`
fn parse_metadata(line: &str) -> Option<LrcLineKind<'_>> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let (key, value) = inner.split_once(':')?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if key.is_empty() || !key.chars().all(is_word) || value.is_empty() {
        return None;
    }
    Some(LrcLineKind::Metadata {
        key,
        value: value.trim(),
    })
}

/// 使用默认选项解析 LRC 文本。
#[must_use]
pub fn parse_lrc(content: &str) -> LyricDocument {
    parse_lrc_with(content, LrcParsingOptions::default())
}

/// 解析 LRC 文本。
///
/// 解析从不失败：不认识的行会被跳过，空输入得到空文档。
#[must_use]
pub fn parse_lrc_with(content: &str, options: LrcParsingOptions) -> LyricDocument {
    let mut document = LyricDocument::default();

    for (line_num, raw_line) in content.lines().enumerate() {
        match classify_lrc_line(raw_line) {
            LrcLineKind::Metadata { key, value } => {
                document.metadata.insert(key.to_string(), value.to_string());
            }
            LrcLineKind::Timed {
                time,
                time_text,
                text,
            } => {
                // 空文本的时间行只占用时间戳，不产生歌词行
                if !text.is_empty() {
                    document.lines.push(LyricLine {
                        time: Some(time),
                        time_text: Some(time_text),
                        text: text.to_string(),
                    });
                }
            }
            LrcLineKind::Plain(text) => match options.mode {
                LrcParseMode::TolerateUntimed => document.lines.push(LyricLine {
                    time: None,
                    time_text: None,
                    text: text.to_string(),
                }),
                LrcParseMode::Strict => {
                    trace!("[LrcParser] 第 {} 行不是 LRC 行，已忽略", line_num + 1);
                }
            },
            LrcLineKind::Unrecognized => {
                trace!("[LrcParser] 第 {} 行格式无法识别，已跳过", line_num + 1);
            }
            LrcLineKind::Blank => {}
        }
    }

    // 稳定排序：时间行按时间升序，无时间的行保持原顺序排在最后
    document.lines.sort_by(|a, b| match (a.time, b.time) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    document
}
