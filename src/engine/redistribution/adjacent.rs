// ==========================================
// 就近调整
// ==========================================
// 用户修改了个别事件后,由其相邻事件吸收差值,修改过的事件本身不动
// 方向: 相邻事件与 diff 同向变化（课程需要更多时间时相邻事件增加）
// 无候选事件时退化为按比例分配（使用真实目标总时长）
// ==========================================

use super::{apply_delta, redistribute_proportional, round_minutes};
use crate::domain::phase::{total_minutes, Phase, PHASE_COUNT};
use std::collections::BTreeSet;
use tracing::debug;

/// 相邻候选事件: 每个修改事件的前后邻居（限定在 1..=9）,排除修改事件本身
pub fn adjacent_candidates(modified: &BTreeSet<u8>) -> BTreeSet<u8> {
    let last = PHASE_COUNT as u8;
    modified
        .iter()
        .flat_map(|&index| [index.checked_sub(1), index.checked_add(1)])
        .flatten()
        .filter(|n| (1..=last).contains(n))
        .filter(|n| !modified.contains(n))
        .collect()
}

pub fn redistribute_adjacent(
    phases: &[Phase],
    target_total: i32,
    modified: &BTreeSet<u8>,
) -> Vec<Phase> {
    let candidates = adjacent_candidates(modified);
    if candidates.is_empty() {
        debug!(modified = ?modified, "无相邻候选事件,退化为按比例分配");
        return redistribute_proportional(phases, target_total);
    }

    let diff = target_total.saturating_sub(total_minutes(phases));
    let per_candidate = round_minutes(diff as f64 / candidates.len() as f64);

    debug!(
        time_difference = diff,
        candidates = ?candidates,
        per_candidate = per_candidate,
        "就近调整"
    );

    phases
        .iter()
        .map(|phase| {
            if candidates.contains(&phase.index) {
                apply_delta(phase, per_candidate)
            } else {
                phase.clone()
            }
        })
        .collect()
}
