// ==========================================
// 教案时间编排引擎 - 时长再分配引擎
// ==========================================
// 职责: 将目标总时长与当前总时长的差值分摊到九个事件
// 输入: 当前事件 + 目标总时长 + 上下文（课程侧重、用户修改事件）
// 输出: 新的事件集合（序号/顺序不变,仅时长变化）
// ==========================================
// 红线: 纯函数,不修改输入
// 红线: 每次调整都强制 1 分钟下限
// 注: 四舍五入后不做归一化,残差由微调器处理
// ==========================================

mod adjacent;
mod pedagogical;
mod proportional;

#[cfg(test)]
mod tests;

pub use adjacent::{adjacent_candidates, redistribute_adjacent};
pub use pedagogical::redistribute_pedagogical;
pub use proportional::redistribute_proportional;

use crate::config::FlexibilityTable;
use crate::domain::phase::{Phase, MIN_PHASE_MINUTES};
use crate::domain::types::LessonFocus;
use crate::engine::strategy::RedistributionStrategy;
use std::collections::BTreeSet;

// ==========================================
// RedistributionContext - 再分配上下文
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedistributionContext {
    pub lesson_focus: LessonFocus,
    pub modified_indices: BTreeSet<u8>,
}

/// 按策略分派到对应的再分配函数
pub fn redistribute(
    strategy: RedistributionStrategy,
    phases: &[Phase],
    target_total: i32,
    context: &RedistributionContext,
    flexibility: &FlexibilityTable,
) -> Vec<Phase> {
    match strategy {
        RedistributionStrategy::None => phases.to_vec(),
        RedistributionStrategy::Adjacent => {
            redistribute_adjacent(phases, target_total, &context.modified_indices)
        }
        RedistributionStrategy::Pedagogical => {
            redistribute_pedagogical(phases, target_total, context.lesson_focus, flexibility)
        }
        RedistributionStrategy::Proportional => redistribute_proportional(phases, target_total),
    }
}

/// 分钟取整（四舍五入,0.5 远离零）
pub(crate) fn round_minutes(value: f64) -> i32 {
    value.round() as i32
}

/// 施加调整量并强制下限
pub(crate) fn apply_delta(phase: &Phase, delta: i32) -> Phase {
    phase.with_duration(phase.duration.saturating_add(delta).max(MIN_PHASE_MINUTES))
}

/// 按权重分摊差值: adj_i = round(diff * w_i)
pub(crate) fn distribute_by_weights(phases: &[Phase], diff: i32, weights: &[f64]) -> Vec<Phase> {
    phases
        .iter()
        .zip(weights)
        .map(|(phase, w)| apply_delta(phase, round_minutes(diff as f64 * w)))
        .collect()
}
