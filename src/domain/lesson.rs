// ==========================================
// 教案时间编排引擎 - 课程上下文
// ==========================================
// 职责: 承载目标总时长与认知层级选择
// 说明: 取值范围 (5..=480 分钟) 由上游表单/API 层校验
// ==========================================

use crate::domain::types::{BloomLevel, GradeLevel, LessonFocus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 目标总时长下限（分钟）
pub const MIN_LESSON_MINUTES: i32 = 5;

/// 目标总时长上限（分钟）
pub const MAX_LESSON_MINUTES: i32 = 480;

// ==========================================
// LessonContext - 课程上下文
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContext {
    /// 目标总时长（分钟）
    pub target_total_minutes: i32,

    /// 所选认知层级
    #[serde(default)]
    pub selected_cognitive_levels: BTreeSet<BloomLevel>,

    /// 年级（仅初始分配使用）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<GradeLevel>,
}

impl LessonContext {
    pub fn new(target_total_minutes: i32) -> Self {
        Self {
            target_total_minutes,
            selected_cognitive_levels: BTreeSet::new(),
            grade_level: None,
        }
    }

    pub fn with_levels<I>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = BloomLevel>,
    {
        self.selected_cognitive_levels = levels.into_iter().collect();
        self
    }

    pub fn with_grade(mut self, grade: GradeLevel) -> Self {
        self.grade_level = Some(grade);
        self
    }

    /// 课程侧重
    pub fn lesson_focus(&self) -> LessonFocus {
        LessonFocus::from_levels(&self.selected_cognitive_levels)
    }
}
