//! 醒目留言（SC）分级相关类型。

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// SC 的三个档位。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScTier {
    /// 金额 < 50
    Low,
    /// 50 <= 金额 < 100
    Medium,
    /// 金额 >= 100
    High,
}

impl ScTier {
    /// 中档下界（含）。
    pub const MEDIUM_FLOOR: u64 = 50;
    /// 高档下界（含）。
    pub const HIGH_FLOOR: u64 = 100;

    /// 按金额分档，边界固定为 50 和 100。
    #[must_use]
    pub const fn from_amount(amount: u64) -> Self {
        if amount >= Self::HIGH_FLOOR {
            Self::High
        } else if amount >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// 一个档位的展示配色。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScColors {
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
}

/// 分级结果：档位加上对应的配色。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScTierStyle {
    pub tier: ScTier,
    #[serde(flatten)]
    pub colors: ScColors,
}

/// 上游给出的原始 SC 值，可能是 `"50SC"` 这样的文本，也可能是数字。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScValue {
    Number(serde_json::Number),
    Text(String),
}

impl ScValue {
    /// 提取第一段连续的 ASCII 数字。
    #[must_use]
    pub fn first_digit_run(&self) -> Option<String> {
        let text = self.to_string();
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let run: String = text[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Some(run)
    }
}

impl fmt::Display for ScValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ScValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ScValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for ScValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}
