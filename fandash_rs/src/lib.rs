//! # fandash_rs
//!
//! 粉丝站仪表盘的纯数据工具层。所有函数都只处理调用方已经拿到的数据，
//! 不做网络请求、不持有全局状态。

pub mod config;
pub mod lyrics;
pub mod payload;
pub mod sc_tier;
pub mod search;
pub mod stats;

pub use fandash_core::*;

pub use lyrics::{LrcLineKind, classify_lrc_line, parse_lrc, parse_lrc_with};
pub use payload::{decode_fan_series, decode_guard_history, decode_song_library};
pub use sc_tier::{classify_sc, default_palette};
pub use search::{extract_snippets, highlight_segments, search_songs};
pub use stats::{compute_fan_changes, compute_guard_changes};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
