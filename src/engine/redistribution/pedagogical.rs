// ==========================================
// 教学优先级分配
// ==========================================
// 按课程侧重选取弹性权重行,弹性越大的事件承担越多的调整
// ==========================================

use super::distribute_by_weights;
use crate::config::FlexibilityTable;
use crate::domain::phase::{total_minutes, Phase};
use crate::domain::types::LessonFocus;
use tracing::debug;

pub fn redistribute_pedagogical(
    phases: &[Phase],
    target_total: i32,
    focus: LessonFocus,
    flexibility: &FlexibilityTable,
) -> Vec<Phase> {
    let diff = target_total.saturating_sub(total_minutes(phases));
    let raw: Vec<f64> = phases
        .iter()
        .map(|p| flexibility.weight(focus, p.index).unwrap_or(0.0))
        .collect();
    let sum: f64 = raw.iter().sum();

    // 权重表已在加载时校验,此处仅防御全零行
    let weights: Vec<f64> = if sum > 0.0 {
        raw.iter().map(|w| w / sum).collect()
    } else {
        vec![1.0 / phases.len() as f64; phases.len()]
    };

    debug!(
        time_difference = diff,
        lesson_focus = %focus,
        "教学优先级分配"
    );

    distribute_by_weights(phases, diff, &weights)
}
