use fandash_core::{DAY_MS, GuardChanges, GuardHistory, GuardSnapshot};
use tracing::debug;

/// 计算变化量的三个区间（天）。
pub const GUARD_HORIZON_DAYS: [i64; 3] = [1, 7, 30];

/// 从新到旧查找第一个时间不晚于 `target_time` 的快照。
///
/// 不取"最近的"，只向过去方向找；找不到说明历史不够长。
#[must_use]
pub fn find_backward_nearest(
    snapshots: &[GuardSnapshot],
    target_time: i64,
) -> Option<&GuardSnapshot> {
    snapshots.iter().rev().find(|s| s.time <= target_time)
}

/// 根据舰长历史计算当前总数、1/7/30 天变化和历史均值。
///
/// 上游不可用或序列为空时返回全 0 的结果。
#[must_use]
pub fn compute_guard_changes(history: &GuardHistory) -> GuardChanges {
    let snapshots = match history {
        GuardHistory::Available(snapshots) => snapshots.as_slice(),
        GuardHistory::Unavailable { code } => {
            debug!("[GuardStats] 上游舰长数据不可用 (code={code})，返回空统计");
            return GuardChanges::zeroed();
        }
    };
    let Some(latest) = snapshots.last() else {
        return GuardChanges::zeroed();
    };

    let current_total = latest.guard_num;
    let [change_1_day, change_7_day, change_30_day] = GUARD_HORIZON_DAYS.map(|days| {
        let target_time = latest.time - days * DAY_MS;
        find_backward_nearest(snapshots, target_time)
            .map(|past| current_total as i64 - past.guard_num as i64)
    });

    GuardChanges {
        current_total,
        change_1_day,
        change_7_day,
        change_30_day,
        career_average: rounded_mean(snapshots),
    }
}

/// 舰长数的算术平均，.5 向上取整。
fn rounded_mean(snapshots: &[GuardSnapshot]) -> u64 {
    let sum: u128 = snapshots.iter().map(|s| u128::from(s.guard_num)).sum();
    let count = snapshots.len() as u128;
    // 整数运算下的 round-half-up：floor((2*sum + count) / (2*count))
    ((2 * sum + count) / (2 * count)) as u64
}
