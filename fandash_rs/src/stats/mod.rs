//! 舰长与粉丝数的变化统计。

mod fans;
mod guard;

pub use fans::compute_fan_changes;
pub use guard::{GUARD_HORIZON_DAYS, compute_guard_changes, find_backward_nearest};
