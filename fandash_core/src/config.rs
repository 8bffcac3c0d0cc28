use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{ScColors, ScTier};

/// 非 `[` 开头的纯文本行如何处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LrcParseMode {
    /// 直接丢弃
    #[default]
    Strict,
    /// 作为无时间戳的歌词行保留，排在最后
    TolerateUntimed,
}

/// LRC 解析选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LrcParsingOptions {
    pub mode: LrcParseMode,
}

/// 歌词片段提取选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetOptions {
    /// 最多返回多少个片段。
    pub max_snippets: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self { max_snippets: 2 }
    }
}

/// SC 三个档位的配色表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScTierPalette {
    pub low: ScColors,
    pub medium: ScColors,
    pub high: ScColors,
}

impl ScTierPalette {
    #[must_use]
    pub const fn colors(&self, tier: ScTier) -> &ScColors {
        match tier {
            ScTier::Low => &self.low,
            ScTier::Medium => &self.medium,
            ScTier::High => &self.high,
        }
    }
}

/// 仪表盘工具层的全部配置，由调用方加载后显式传入。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// 为 `None` 时使用内置配色
    pub sc_palette: Option<ScTierPalette>,
    pub snippet: SnippetOptions,
    pub lrc: LrcParsingOptions,
}
