//! SC 分级器。

use std::sync::OnceLock;

use fandash_core::{ScTier, ScTierPalette, ScTierStyle, ScValue};
use tracing::trace;

/// 内置配色，来自 `assets/default_sc_palette.toml`。
pub fn default_palette() -> &'static ScTierPalette {
    static PALETTE: OnceLock<ScTierPalette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let palette_str = include_str!("../assets/default_sc_palette.toml");
        toml::from_str(palette_str).expect("Failed to parse default_sc_palette.toml")
    })
}

/// 从原始值中提取 SC 金额。没有数字时返回 `None`。
///
/// 超出 `u64` 的数字按最大值处理。
#[must_use]
pub fn extract_sc_amount(raw: &ScValue) -> Option<u64> {
    let digits = raw.first_digit_run()?;
    // 数字串只含 ASCII 数字，解析失败只可能是溢出
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// 使用内置配色对 SC 值分级。
#[must_use]
pub fn classify_sc(raw: Option<&ScValue>) -> Option<ScTierStyle> {
    classify_sc_with(raw, default_palette())
}

/// 使用指定配色对 SC 值分级。空值或不含数字的值返回 `None`。
#[must_use]
pub fn classify_sc_with(raw: Option<&ScValue>, palette: &ScTierPalette) -> Option<ScTierStyle> {
    let Some(amount) = raw.and_then(extract_sc_amount) else {
        trace!("[ScTier] 无法从 {:?} 中提取金额", raw);
        return None;
    };
    let tier = ScTier::from_amount(amount);
    Some(ScTierStyle {
        tier,
        colors: palette.colors(tier).clone(),
    })
}
