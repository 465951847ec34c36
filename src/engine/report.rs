// ==========================================
// 教案时间编排引擎 - 调整报告
// ==========================================
// 职责: 对比原始与再分配后的事件,生成调整列表、说明与摘要
// 输出: RedistributionResult（交由调用方合并进教案草稿并展示）
// ==========================================

use crate::domain::phase::{total_minutes, Phase};
use crate::engine::strategy::StrategyTag;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// 视为"完全平衡"的残差上限（分钟）
pub const PERFECT_BALANCE_TOLERANCE: i32 = 1;

// ==========================================
// PhaseAdjustment - 单事件调整记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAdjustment {
    pub index: u8,
    pub name: String,
    pub original_duration: i32,
    pub new_duration: i32,

    /// new_duration - original_duration
    pub delta: i32,

    /// 该事件是否为用户修改过的事件
    pub was_user_modified: bool,
}

// ==========================================
// RedistributionResult - 再分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionResult {
    /// 新的九个事件（顺序与序号不变）
    pub phases: Vec<Phase>,

    /// 策略标识,如 "pedagogical" / "adjacent+micro"
    pub strategy: StrategyTag,

    /// 仅包含时长发生变化的事件,按序号升序
    pub adjustments: Vec<PhaseAdjustment>,

    pub rationale: String,
    pub summary: String,

    /// 再分配前: target - current（有符号）
    pub time_difference_before: i32,

    /// 再分配后: |final_total - target|
    pub final_difference_after: i32,
}

impl RedistributionResult {
    pub fn final_total(&self) -> i32 {
        total_minutes(&self.phases)
    }

    pub fn is_perfectly_balanced(&self) -> bool {
        self.final_difference_after <= PERFECT_BALANCE_TOLERANCE
    }
}

// ==========================================
// AdjustmentReporter - 调整报告生成器
// ==========================================
pub struct AdjustmentReporter;

impl AdjustmentReporter {
    pub fn new() -> Self {
        Self
    }

    /// 对比原始与结果,生成调整列表
    pub fn diff(
        &self,
        original: &[Phase],
        result: &[Phase],
        modified_indices: &BTreeSet<u8>,
    ) -> Vec<PhaseAdjustment> {
        let before: HashMap<u8, i32> = original.iter().map(|p| (p.index, p.duration)).collect();

        let mut adjustments: Vec<PhaseAdjustment> = result
            .iter()
            .filter_map(|phase| {
                let original_duration = *before.get(&phase.index)?;
                if original_duration == phase.duration {
                    return None;
                }
                Some(PhaseAdjustment {
                    index: phase.index,
                    name: phase.name(),
                    original_duration,
                    new_duration: phase.duration,
                    delta: phase.duration - original_duration,
                    was_user_modified: modified_indices.contains(&phase.index),
                })
            })
            .collect();
        adjustments.sort_by_key(|a| a.index);
        adjustments
    }

    /// 生成完整报告
    ///
    /// # 参数
    /// - `original`: 再分配前的事件
    /// - `result`: 再分配（及微调）后的事件
    /// - `target_total`: 目标总时长
    /// - `strategy`: 策略标识
    /// - `rationale`: 策略选择说明
    /// - `modified_indices`: 用户修改过的事件
    pub fn build(
        &self,
        original: &[Phase],
        result: Vec<Phase>,
        target_total: i32,
        strategy: StrategyTag,
        rationale: String,
        modified_indices: &BTreeSet<u8>,
    ) -> RedistributionResult {
        let time_difference_before = target_total.saturating_sub(total_minutes(original));
        let final_total = total_minutes(&result);
        let final_difference_after = final_total.saturating_sub(target_total).saturating_abs();
        let adjustments = self.diff(original, &result, modified_indices);

        let summary = render_summary(
            strategy,
            adjustments.len(),
            final_total,
            target_total,
            final_difference_after,
        );

        RedistributionResult {
            phases: result,
            strategy,
            adjustments,
            rationale,
            summary,
            time_difference_before,
            final_difference_after,
        }
    }
}

impl Default for AdjustmentReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_summary(
    strategy: StrategyTag,
    adjusted: usize,
    final_total: i32,
    target_total: i32,
    final_difference: i32,
) -> String {
    let head = format!(
        "Strategy '{}' adjusted {} phase(s).",
        strategy, adjusted
    );
    if final_difference <= PERFECT_BALANCE_TOLERANCE {
        format!(
            "{} Perfect balance achieved: {} of {} minutes.",
            head, final_total, target_total
        )
    } else {
        format!(
            "{} Residual gap of {} minute(s) remains: {} of {} minutes.",
            head, final_difference, final_total, target_total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::strategy::RedistributionStrategy;

    fn phases(durations: [i32; 9]) -> Vec<Phase> {
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| Phase::new((i + 1) as u8, *d))
            .collect()
    }

    #[test]
    fn test_diff_lists_only_changed_phases() {
        let original = phases([5; 9]);
        let result = phases([5, 5, 7, 5, 3, 5, 5, 5, 5]);
        let modified: BTreeSet<u8> = [5].into_iter().collect();

        let adjustments = AdjustmentReporter::new().diff(&original, &result, &modified);
        assert_eq!(adjustments.len(), 2);

        assert_eq!(adjustments[0].index, 3);
        assert_eq!(adjustments[0].name, "Stimulate Recall");
        assert_eq!(adjustments[0].delta, 2);
        assert!(!adjustments[0].was_user_modified);

        assert_eq!(adjustments[1].index, 5);
        assert_eq!(adjustments[1].delta, -2);
        assert!(adjustments[1].was_user_modified);
    }

    #[test]
    fn test_summary_reports_perfect_balance() {
        let original = phases([5; 9]);
        let result = phases([6, 5, 5, 5, 5, 5, 5, 5, 5]);
        let report = AdjustmentReporter::new().build(
            &original,
            result,
            46,
            StrategyTag::new(RedistributionStrategy::Proportional),
            String::new(),
            &BTreeSet::new(),
        );
        assert_eq!(report.time_difference_before, 1);
        assert_eq!(report.final_difference_after, 0);
        assert!(report.is_perfectly_balanced());
        assert!(report.summary.contains("Perfect balance"));
        assert!(report.summary.contains("'proportional'"));
    }

    #[test]
    fn test_summary_reports_residual_gap() {
        let original = phases([1; 9]);
        let report = AdjustmentReporter::new().build(
            &original,
            original.clone(),
            5,
            StrategyTag::new(RedistributionStrategy::Pedagogical).with_micro(),
            String::new(),
            &BTreeSet::new(),
        );
        assert_eq!(report.time_difference_before, -4);
        assert_eq!(report.final_difference_after, 4);
        assert!(report.adjustments.is_empty());
        assert!(report.summary.contains("Residual gap of 4"));
        assert!(report.summary.contains("pedagogical+micro"));
    }
}
