// ==========================================
// 教案时间编排引擎 - API 数据传输对象
// ==========================================

use crate::domain::phase::Phase;
use crate::domain::types::{BloomLevel, GradeLevel, LessonFocus};
use crate::engine::PhaseAllocation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 再平衡请求（保存编辑 / 目标总时长变化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRequest {
    pub phases: Vec<Phase>,

    /// 用户开始编辑前的快照
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Vec<Phase>>,

    pub target_total_minutes: i32,

    #[serde(default)]
    pub selected_cognitive_levels: BTreeSet<BloomLevel>,
}

/// 课程总时长变更请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationChangeRequest {
    pub current_duration: i32,
    pub new_duration: i32,

    #[serde(alias = "gagne_events")]
    pub phases: Vec<Phase>,

    #[serde(default)]
    pub selected_cognitive_levels: BTreeSet<BloomLevel>,
}

/// 初始时间分配请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    pub total_minutes: i32,

    #[serde(default)]
    pub selected_cognitive_levels: BTreeSet<BloomLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
}

/// 初始时间分配响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResponse {
    pub total_minutes: i32,

    /// 实际分配总和（总时长过短时因下限可能超出）
    pub allocated_minutes: i32,

    pub lesson_focus: LessonFocus,
    pub allocations: Vec<PhaseAllocation>,
    pub phases: Vec<Phase>,
}
