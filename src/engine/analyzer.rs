// ==========================================
// 教案时间编排引擎 - 时长分析器
// ==========================================
// 职责: 计算当前总时长与目标的差值、判定量级、
//       识别用户修改过的事件、判定课程侧重
// 输入: 当前事件 + 课程上下文 + 可选快照
// 输出: DurationAnalysis
// ==========================================

use crate::config::GapThresholds;
use crate::domain::lesson::{LessonContext, MAX_LESSON_MINUTES};
use crate::domain::phase::{total_minutes, Phase, MIN_PHASE_MINUTES, PHASE_COUNT};
use crate::domain::types::{GapMagnitude, LessonFocus};
use crate::engine::error::{BalanceError, BalanceResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

// ==========================================
// DurationAnalysis - 分析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationAnalysis {
    pub current_total: i32,
    pub target_total: i32,

    /// target_total - current_total
    pub time_difference: i32,

    pub magnitude: GapMagnitude,

    /// false 表示差值在容忍范围内,整个流程短路
    pub needs_redistribution: bool,

    /// 相对快照发生变化的事件序号
    pub modified_indices: BTreeSet<u8>,

    pub lesson_focus: LessonFocus,
}

impl DurationAnalysis {
    pub fn abs_difference(&self) -> i32 {
        self.time_difference.abs()
    }
}

// ==========================================
// DurationAnalyzer - 时长分析器
// ==========================================
// 无状态,阈值通过参数传入
pub struct DurationAnalyzer;

impl DurationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 校验事件结构
    ///
    /// # 验证规则
    /// 1. 恰好 9 个事件
    /// 2. 序号按顺序为 1..=9
    /// 3. 每个事件时长在 1..=480 之内
    pub fn validate_phases(&self, phases: &[Phase]) -> BalanceResult<()> {
        if phases.len() != PHASE_COUNT {
            return Err(BalanceError::Structure {
                message: format!("需要 {} 个事件,实际 {} 个", PHASE_COUNT, phases.len()),
            });
        }

        for (pos, phase) in phases.iter().enumerate() {
            let expected = (pos + 1) as u8;
            if phase.index != expected {
                return Err(BalanceError::Structure {
                    message: format!("第 {} 个事件序号应为 {},实际为 {}", pos + 1, expected, phase.index),
                });
            }
            if !(MIN_PHASE_MINUTES..=MAX_LESSON_MINUTES).contains(&phase.duration) {
                return Err(BalanceError::Range {
                    index: phase.index,
                    duration: phase.duration,
                    min: MIN_PHASE_MINUTES,
                    max: MAX_LESSON_MINUTES,
                });
            }
        }

        Ok(())
    }

    /// 分析时长差距
    ///
    /// # 参数
    /// - `phases`: 当前事件
    /// - `context`: 课程上下文（目标总时长、认知层级）
    /// - `snapshot`: 用户开始编辑前的事件快照（可选）
    /// - `thresholds`: 时间差阈值
    pub fn analyze(
        &self,
        phases: &[Phase],
        context: &LessonContext,
        snapshot: Option<&[Phase]>,
        thresholds: &GapThresholds,
    ) -> DurationAnalysis {
        let current_total = total_minutes(phases);
        let target_total = context.target_total_minutes;
        let time_difference = target_total.saturating_sub(current_total);

        let modified_indices = detect_modified(phases, snapshot);
        let magnitude = classify_magnitude(time_difference, thresholds);
        let lesson_focus = context.lesson_focus();
        let needs_redistribution = time_difference.abs() > thresholds.noop_tolerance;

        debug!(
            current_total = current_total,
            target_total = target_total,
            time_difference = time_difference,
            magnitude = %magnitude,
            modified_count = modified_indices.len(),
            lesson_focus = %lesson_focus,
            "时长分析完成"
        );

        DurationAnalysis {
            current_total,
            target_total,
            time_difference,
            magnitude,
            needs_redistribution,
            modified_indices,
            lesson_focus,
        }
    }
}

impl Default for DurationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// 按 |diff| 判定量级: minor <= minor_max, large > large_above, 其余 moderate
pub fn classify_magnitude(time_difference: i32, thresholds: &GapThresholds) -> GapMagnitude {
    let abs = time_difference.abs();
    if abs <= thresholds.minor_max {
        GapMagnitude::Minor
    } else if abs > thresholds.large_above {
        GapMagnitude::Large
    } else {
        GapMagnitude::Moderate
    }
}

/// 识别用户修改过的事件（按序号比较；快照中缺失的序号视为未修改）
pub fn detect_modified(phases: &[Phase], snapshot: Option<&[Phase]>) -> BTreeSet<u8> {
    let Some(snapshot) = snapshot else {
        return BTreeSet::new();
    };

    let before: HashMap<u8, i32> = snapshot.iter().map(|p| (p.index, p.duration)).collect();

    phases
        .iter()
        .filter(|p| matches!(before.get(&p.index), Some(d) if *d != p.duration))
        .map(|p| p.index)
        .collect()
}
