use fandash_core::HighlightSegment;
use regex::RegexBuilder;
use tracing::warn;

/// 按关键词把文本切成高亮段和普通段，匹配不区分大小写。
///
/// 关键词按字面量匹配，其中的正则元字符会被转义。不会产生空段；
/// 关键词为空时整段文本作为一个普通段返回。
#[must_use]
pub fn highlight_segments(text: &str, keyword: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if keyword.trim().is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    else {
        warn!("[Highlight] 编译关键词 '{}' 的正则表达式失败", keyword);
        return vec![HighlightSegment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in pattern.find_iter(text) {
        if m.start() > cursor {
            segments.push(HighlightSegment::plain(&text[cursor..m.start()]));
        }
        segments.push(HighlightSegment::matched(m.as_str()));
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(HighlightSegment::plain(&text[cursor..]));
    }
    segments
}
