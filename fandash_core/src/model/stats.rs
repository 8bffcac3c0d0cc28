//! 舰长数与粉丝数的时间序列类型。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 一天的毫秒数。
pub const DAY_MS: i64 = 86_400_000;

/// 某一时刻的舰长数快照。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardSnapshot {
    /// 毫秒级 Unix 时间戳
    pub time: i64,
    /// 当时的舰长总数
    pub guard_num: u64,
}

impl GuardSnapshot {
    #[must_use]
    pub const fn new(time: i64, guard_num: u64) -> Self {
        Self { time, guard_num }
    }
}

/// 上游返回的舰长历史。
///
/// 上游要么给出按时间升序排列的快照数组，要么给出一个带错误码的对象，
/// 后者表示"数据暂不可用"。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardHistory {
    /// 正常的快照序列
    Available(Vec<GuardSnapshot>),
    /// 上游明确表示数据不可用
    Unavailable {
        /// 上游给出的错误码
        code: i64,
    },
}

impl Default for GuardHistory {
    fn default() -> Self {
        Self::Available(Vec::new())
    }
}

impl From<Vec<GuardSnapshot>> for GuardHistory {
    fn from(snapshots: Vec<GuardSnapshot>) -> Self {
        Self::Available(snapshots)
    }
}

/// 舰长数变化统计。
///
/// 某个区间没有足够历史时对应字段为 `None`，和"没有变化"（`Some(0)`）区分开。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardChanges {
    pub current_total: u64,
    #[serde(rename = "change1Day")]
    pub change_1_day: Option<i64>,
    #[serde(rename = "change7Day")]
    pub change_7_day: Option<i64>,
    #[serde(rename = "change30Day")]
    pub change_30_day: Option<i64>,
    /// 全部快照的舰长数均值，四舍五入
    pub career_average: u64,
}

impl GuardChanges {
    /// "无数据"结果：所有字段都是 0 而不是 `None`。
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            current_total: 0,
            change_1_day: Some(0),
            change_7_day: Some(0),
            change_30_day: Some(0),
            career_average: 0,
        }
    }
}

/// 某一天的粉丝数记录。
///
/// 上游记录里的其它字段原样保存在 `extra` 中，输出时再写回去。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanSnapshot {
    pub date: NaiveDate,
    pub fans: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FanSnapshot {
    #[must_use]
    pub fn new(date: NaiveDate, fans: u64) -> Self {
        Self {
            date,
            fans,
            extra: serde_json::Map::new(),
        }
    }
}

/// 附带 1/7/30 天粉丝变化量的记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanChangeRecord {
    #[serde(flatten)]
    pub snapshot: FanSnapshot,
    #[serde(rename = "fanChange1")]
    pub fan_change_1: Option<i64>,
    #[serde(rename = "fanChange7")]
    pub fan_change_7: Option<i64>,
    #[serde(rename = "fanChange30")]
    pub fan_change_30: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_changes_serializes_camel_case() {
        let changes = GuardChanges {
            current_total: 12,
            change_1_day: None,
            change_7_day: Some(4),
            change_30_day: Some(7),
            career_average: 8,
        };
        let json = serde_json::to_value(changes).unwrap();
        assert_eq!(json["currentTotal"], 12);
        assert!(json["change1Day"].is_null());
        assert_eq!(json["change7Day"], 4);
        assert_eq!(json["careerAverage"], 8);
    }

    #[test]
    fn test_fan_record_keeps_extra_fields() {
        let raw = r#"{"date":"2024-03-01","fans":100,"archiveView":42}"#;
        let snapshot: FanSnapshot = serde_json::from_str(raw).unwrap();
        let record = FanChangeRecord {
            snapshot,
            fan_change_1: Some(3),
            fan_change_7: None,
            fan_change_30: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["archiveView"], 42);
        assert_eq!(json["fanChange1"], 3);
        assert!(json["fanChange7"].is_null());
    }
}
