//! 把上游接口返回的 JSON 解码成带类型的数据。
//!
//! 上游有时直接给数组，有时给一个带 `code` 的错误对象；这里只判断一次形状，
//! 之后的统计函数只和 [`GuardHistory`] 打交道。

use fandash_core::{DashError, FanSnapshot, GuardHistory, GuardSnapshot, Result, SongEntry};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum GuardPayload {
    /// 直接返回的快照数组
    Series(Vec<GuardSnapshot>),
    /// `{ "code": 0, "data": [...] }` 形式的包装
    Wrapped { code: i64, data: Vec<GuardSnapshot> },
    /// 只有错误码的对象
    Error { code: i64 },
}

/// 解码舰长历史。
///
/// `code` 非 0 的对象（无论是否带 `data`）都视为数据不可用。
pub fn decode_guard_history(json: &str) -> Result<GuardHistory> {
    let payload: GuardPayload =
        serde_json::from_str(json).map_err(|e| DashError::json_parse(e, "舰长历史"))?;
    let history = match payload {
        GuardPayload::Series(snapshots) | GuardPayload::Wrapped { code: 0, data: snapshots } => {
            GuardHistory::Available(snapshots)
        }
        GuardPayload::Wrapped { code, .. } | GuardPayload::Error { code } => {
            debug!("[Payload] 舰长历史返回错误码 {code}");
            GuardHistory::Unavailable { code }
        }
    };
    Ok(history)
}

/// 解码按天的粉丝数数组，日期格式为 `YYYY-MM-DD`。
pub fn decode_fan_series(json: &str) -> Result<Vec<FanSnapshot>> {
    serde_json::from_str(json).map_err(|e| DashError::json_parse(e, "粉丝数序列"))
}

/// 解码歌单。
pub fn decode_song_library(json: &str) -> Result<Vec<SongEntry>> {
    serde_json::from_str(json).map_err(|e| DashError::json_parse(e, "歌单"))
}
