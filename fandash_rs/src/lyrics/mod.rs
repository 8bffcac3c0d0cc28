//! 歌词解析。

mod lrc_parser;

pub use lrc_parser::{LrcLineKind, classify_lrc_line, parse_lrc, parse_lrc_with};
