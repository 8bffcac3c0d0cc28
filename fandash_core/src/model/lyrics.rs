//! LRC 歌词文档与搜索结果类型。

use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// 常见的 LRC ID 标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum LrcTag {
    #[strum(serialize = "ti")]
    Title,
    #[strum(serialize = "ar")]
    Artist,
    #[strum(serialize = "al")]
    Album,
    #[strum(serialize = "by")]
    By,
    #[strum(serialize = "offset")]
    Offset,
}

/// 一行歌词。
///
/// 没有时间戳的行（`time` 为 `None`）总是排在所有带时间戳的行之后。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct LyricLine {
    /// 以秒为单位的开始时间
    #[builder(default)]
    pub time: Option<f64>,
    /// `mm:ss` 形式的展示用时间
    #[builder(default)]
    pub time_text: Option<String>,
    pub text: String,
}

impl LyricLine {
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        self.time.is_some()
    }
}

/// 解析后的 LRC 文档。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricDocument {
    pub metadata: HashMap<String, String>,
    pub lines: Vec<LyricLine>,
}

impl LyricDocument {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.lines.is_empty()
    }

    /// 按标签读取元数据，键名大小写敏感，与文件中写法一致。
    #[must_use]
    pub fn metadata_value(&self, tag: LrcTag) -> Option<&str> {
        self.metadata.get(tag.as_ref()).map(String::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metadata_value(LrcTag::Title)
    }

    #[must_use]
    pub fn artist(&self) -> Option<&str> {
        self.metadata_value(LrcTag::Artist)
    }

    #[must_use]
    pub fn album(&self) -> Option<&str> {
        self.metadata_value(LrcTag::Album)
    }

    /// 找到播放到 `seconds` 时应当显示的行：时间不晚于 `seconds` 的最后一行。
    #[must_use]
    pub fn line_at(&self, seconds: f64) -> Option<&LyricLine> {
        // 带时间戳的行已经按时间升序排在最前面
        let timed = self.lines.partition_point(LyricLine::is_timed);
        let idx = self.lines[..timed].partition_point(|line| line.time.is_some_and(|t| t <= seconds));
        idx.checked_sub(1).map(|i| &self.lines[i])
    }
}

/// 搜索命中的一段歌词上下文。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    /// 命中行，以及紧随其后的一行（如果有）
    pub lines: Vec<String>,
    /// 命中行在 `lines` 中的下标
    pub match_index: usize,
    /// 命中行在原始非空行序列中的下标
    pub original_index: usize,
    pub matched_text: String,
}

/// 高亮切分后的一段文本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSegment {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    #[must_use]
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}

/// 歌单中的一首歌。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEntry {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    /// 原始 LRC 文本
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// 歌单搜索时命中的字段，按优先级排列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongMatchField {
    Title,
    Artist,
    Lyrics,
}

/// 歌单搜索的一条结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSearchHit {
    /// 歌曲在歌单中的下标
    pub index: usize,
    pub matched_field: SongMatchField,
    /// 只有歌词命中时才有片段
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snippets: Vec<SearchSnippet>,
}
