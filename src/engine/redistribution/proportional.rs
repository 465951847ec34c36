// ==========================================
// 按比例分配
// ==========================================
// 每个事件保留 1 分钟下限,按"可伸缩时长"占比分摊差值；
// 全部处于下限时退化为均分
// ==========================================

use super::distribute_by_weights;
use crate::domain::phase::{total_minutes, Phase, MIN_PHASE_MINUTES};
use tracing::debug;

pub fn redistribute_proportional(phases: &[Phase], target_total: i32) -> Vec<Phase> {
    let diff = target_total.saturating_sub(total_minutes(phases));
    let flexible: Vec<i32> = phases
        .iter()
        .map(|p| (p.duration - MIN_PHASE_MINUTES).max(0))
        .collect();
    let flexible_sum: i32 = flexible.iter().sum();

    let weights: Vec<f64> = if flexible_sum > 0 {
        flexible
            .iter()
            .map(|f| *f as f64 / flexible_sum as f64)
            .collect()
    } else {
        vec![1.0 / phases.len() as f64; phases.len()]
    };

    debug!(
        time_difference = diff,
        flexible_sum = flexible_sum,
        uniform = flexible_sum == 0,
        "按比例分配"
    );

    distribute_by_weights(phases, diff, &weights)
}
