use std::sync::LazyLock;

use fandash_core::{SearchSnippet, SnippetOptions};
use regex::Regex;
use tracing::trace;

/// 行首的 LRC 时间戳，百分秒/毫秒部分可选
static LEADING_TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[0-9]{1,2}:[0-9]{2}(?:\.[0-9]{2,3})?\]")
        .expect("未能编译 LEADING_TIMESTAMP_REGEX")
});

/// 去掉行首的一个时间戳并去除首尾空白。
#[must_use]
pub fn strip_timestamp(line: &str) -> &str {
    match LEADING_TIMESTAMP_REGEX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// 在原始 LRC 文本中查找包含关键词（不区分大小写）的行，返回带上下文的片段。
///
/// 每个片段由命中行和紧随其后的一行组成。命中行及其前后相邻行都会被标记，
/// 相邻的命中不会再生成新的片段。没有任何命中时返回 `None`，不会返回空列表。
#[must_use]
pub fn extract_snippets(
    lyrics: &str,
    keyword: &str,
    options: &SnippetOptions,
) -> Option<Vec<SearchSnippet>> {
    if keyword.trim().is_empty() || options.max_snippets == 0 {
        return None;
    }
    // 关键词按原样参与匹配，首尾空白也算在内
    let keyword = keyword.to_lowercase();

    let lines: Vec<&str> = lyrics.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut processed = vec![false; lines.len()];
    let mut snippets = Vec::new();

    for (i, raw_line) in lines.iter().enumerate() {
        if snippets.len() >= options.max_snippets {
            break;
        }
        if processed[i] {
            continue;
        }
        let clean = strip_timestamp(raw_line);
        if !clean.to_lowercase().contains(&keyword) {
            continue;
        }

        let lo = i.saturating_sub(1);
        let hi = (i + 1).min(lines.len() - 1);
        processed[lo..=hi].fill(true);

        let mut context = vec![clean.to_string()];
        if let Some(next) = lines.get(i + 1).copied().map(strip_timestamp)
            && !next.is_empty()
        {
            context.push(next.to_string());
        }

        snippets.push(SearchSnippet {
            lines: context,
            match_index: 0,
            original_index: i,
            matched_text: clean.to_string(),
        });
    }

    trace!("[Snippet] 关键词 '{}' 命中 {} 处", keyword, snippets.len());
    if snippets.is_empty() {
        None
    } else {
        Some(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fandash_core::SnippetOptionsBuilder;

    const LYRICS: &str = "[ti:测试]\n\
        [00:01.00]Hello Star\n\
        [00:02.00]second line\n\
        [00:03.00]third line\n\
        [00:04.00]fourth line\n\
        [00:05.00]star again\n\
        [00:06.00]closing";

    fn opts(max_snippets: usize) -> SnippetOptions {
        SnippetOptionsBuilder::default()
            .max_snippets(max_snippets)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults_to_two_snippets() {
        let options = SnippetOptionsBuilder::default().build().unwrap();
        assert_eq!(options, SnippetOptions::default());
        assert_eq!(options.max_snippets, 2);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(extract_snippets(LYRICS, "moon", &opts(2)), None);
        assert_eq!(extract_snippets("", "star", &opts(2)), None);
    }

    #[test]
    fn test_two_non_adjacent_matches() {
        let snippets = extract_snippets(LYRICS, "STAR", &opts(2)).unwrap();
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].lines, ["Hello Star", "second line"]);
        assert_eq!(snippets[0].original_index, 1);
        assert_eq!(snippets[0].match_index, 0);
        assert_eq!(snippets[0].matched_text, "Hello Star");
        assert_eq!(snippets[1].lines, ["star again", "closing"]);
        assert_eq!(snippets[1].original_index, 5);
    }

    #[test]
    fn test_max_snippets_limit() {
        let snippets = extract_snippets(LYRICS, "line", &opts(1)).unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].original_index, 2);
    }

    #[test]
    fn test_adjacent_matches_are_suppressed() {
        // 第 2、3、4 行都含 "line"：2 命中后 3 被标记，4 不相邻于 2，单独成片段
        let snippets = extract_snippets(LYRICS, "line", &opts(5)).unwrap();
        let indices: Vec<usize> = snippets.iter().map(|s| s.original_index).collect();
        assert_eq!(indices, [2, 4]);
    }

    #[test]
    fn test_last_line_has_no_successor() {
        let snippets = extract_snippets(LYRICS, "closing", &opts(2)).unwrap();
        assert_eq!(snippets[0].lines, ["closing"]);
    }

    #[test]
    fn test_metadata_lines_are_searched_raw() {
        // 元数据行没有时间戳可去，按原样参与匹配
        let snippets = extract_snippets(LYRICS, "ti:", &opts(2)).unwrap();
        assert_eq!(snippets[0].matched_text, "[ti:测试]");
    }

    #[test]
    fn test_strip_timestamp_variants() {
        assert_eq!(strip_timestamp("[1:02]a"), "a");
        assert_eq!(strip_timestamp("[01:02.345] b "), "b");
        assert_eq!(strip_timestamp("[001:02]c"), "[001:02]c");
        assert_eq!(strip_timestamp("  plain  "), "plain");
    }

    #[test]
    fn test_keyword_whitespace_is_significant() {
        assert_eq!(
            extract_snippets("[00:01.00]lovely day", "love ", &opts(2)),
            None
        );
        let snippets = extract_snippets("[00:01.00]love me tender", "LOVE ", &opts(2)).unwrap();
        assert_eq!(snippets[0].matched_text, "love me tender");
    }

    #[test]
    fn test_blank_keyword() {
        assert_eq!(extract_snippets(LYRICS, "  ", &opts(2)), None);
    }
}
