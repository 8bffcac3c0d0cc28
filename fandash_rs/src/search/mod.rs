//! 歌词与歌单搜索。

mod highlight;
mod library;
mod snippet;

pub use highlight::highlight_segments;
pub use library::search_songs;
pub use snippet::{extract_snippets, strip_timestamp};
