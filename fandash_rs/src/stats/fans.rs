use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use fandash_core::{FanChangeRecord, FanSnapshot};

/// 输出记录自带的变化量字段，上游同名字段会被替换
const CHANGE_KEYS: [&str; 3] = ["fanChange1", "fanChange7", "fanChange30"];

/// 为每条粉丝记录计算 1/7/30 天前的变化量。
///
/// 只查找恰好 N 个自然日之前的那一天，缺失即为 `None`，不向前回退。
/// 输出顺序与输入一致。
#[must_use]
pub fn compute_fan_changes(series: &[FanSnapshot]) -> Vec<FanChangeRecord> {
    // 日期重复时后出现的记录覆盖前面的
    let fans_by_date: HashMap<NaiveDate, u64> =
        series.iter().map(|record| (record.date, record.fans)).collect();

    let change_since = |record: &FanSnapshot, days: u64| -> Option<i64> {
        let prior_date = record.date.checked_sub_days(Days::new(days))?;
        let prior_fans = fans_by_date.get(&prior_date)?;
        Some(record.fans as i64 - *prior_fans as i64)
    };

    series
        .iter()
        .map(|record| {
            let mut snapshot = record.clone();
            for key in CHANGE_KEYS {
                snapshot.extra.remove(key);
            }
            FanChangeRecord {
                fan_change_1: change_since(record, 1),
                fan_change_7: change_since(record, 7),
                fan_change_30: change_since(record, 30),
                snapshot,
            }
        })
        .collect()
}
