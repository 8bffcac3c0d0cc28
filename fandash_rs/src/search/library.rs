use fandash_core::{SnippetOptions, SongEntry, SongMatchField, SongSearchHit};
use tracing::debug;

use super::extract_snippets;

/// 在歌单中搜索关键词。
///
/// 依次匹配歌名、歌手、歌词（均不区分大小写），取第一个命中的字段。
/// 只有歌词命中时结果才带片段。结果保持歌单顺序，关键词为空时没有结果。
#[must_use]
pub fn search_songs(
    songs: &[SongEntry],
    keyword: &str,
    options: &SnippetOptions,
) -> Vec<SongSearchHit> {
    if keyword.trim().is_empty() {
        return Vec::new();
    }
    let needle = keyword.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let hits: Vec<SongSearchHit> = songs
        .iter()
        .enumerate()
        .filter_map(|(index, song)| {
            if contains(&song.title) {
                return Some(SongSearchHit {
                    index,
                    matched_field: SongMatchField::Title,
                    snippets: Vec::new(),
                });
            }
            if song.artist.as_deref().is_some_and(contains) {
                return Some(SongSearchHit {
                    index,
                    matched_field: SongMatchField::Artist,
                    snippets: Vec::new(),
                });
            }
            let snippets = extract_snippets(song.lyrics.as_deref()?, &needle, options)?;
            Some(SongSearchHit {
                index,
                matched_field: SongMatchField::Lyrics,
                snippets,
            })
        })
        .collect();

    debug!(
        "[SongSearch] 在 {} 首歌中搜索 '{}'，命中 {} 首",
        songs.len(),
        needle,
        hits.len()
    );
    hits
}
