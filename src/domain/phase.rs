// ==========================================
// 教案时间编排引擎 - 教学事件实体
// ==========================================
// 依据: 加涅九段教学事件 (Gagné's Nine Events of Instruction)
// 红线: 每节课固定 9 个事件,顺序即身份,不可重排
// 红线: 任一事件时长 >= 1 分钟
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件数量（固定）
pub const PHASE_COUNT: usize = 9;

/// 单事件最小时长（分钟）
pub const MIN_PHASE_MINUTES: i32 = 1;

// ==========================================
// PhaseRole - 九段事件的标准教学角色
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseRole {
    GainAttention,
    InformObjectives,
    StimulateRecall,
    PresentContent,
    ProvideGuidance,
    ElicitPerformance,
    ProvideFeedback,
    AssessPerformance,
    EnhanceRetention,
}

impl PhaseRole {
    /// 按固定顺序列出全部角色
    pub const ALL: [PhaseRole; PHASE_COUNT] = [
        PhaseRole::GainAttention,
        PhaseRole::InformObjectives,
        PhaseRole::StimulateRecall,
        PhaseRole::PresentContent,
        PhaseRole::ProvideGuidance,
        PhaseRole::ElicitPerformance,
        PhaseRole::ProvideFeedback,
        PhaseRole::AssessPerformance,
        PhaseRole::EnhanceRetention,
    ];

    /// 由事件序号 (1..=9) 获取角色
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1..=9 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// 事件序号 (1..=9)
    pub fn index(&self) -> u8 {
        match self {
            PhaseRole::GainAttention => 1,
            PhaseRole::InformObjectives => 2,
            PhaseRole::StimulateRecall => 3,
            PhaseRole::PresentContent => 4,
            PhaseRole::ProvideGuidance => 5,
            PhaseRole::ElicitPerformance => 6,
            PhaseRole::ProvideFeedback => 7,
            PhaseRole::AssessPerformance => 8,
            PhaseRole::EnhanceRetention => 9,
        }
    }

    /// 展示名称
    pub fn name(&self) -> &'static str {
        match self {
            PhaseRole::GainAttention => "Gain Attention",
            PhaseRole::InformObjectives => "Inform Objectives",
            PhaseRole::StimulateRecall => "Stimulate Recall",
            PhaseRole::PresentContent => "Present Content",
            PhaseRole::ProvideGuidance => "Provide Guidance",
            PhaseRole::ElicitPerformance => "Elicit Performance",
            PhaseRole::ProvideFeedback => "Provide Feedback",
            PhaseRole::AssessPerformance => "Assess Performance",
            PhaseRole::EnhanceRetention => "Enhance Retention",
        }
    }
}

impl fmt::Display for PhaseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// Phase - 教学事件
// ==========================================
// 活动/材料/评估策略由生成服务填充,本引擎只读写 duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// 事件序号 (1..=9)
    #[serde(alias = "event_number")]
    pub index: u8,

    /// 时长（分钟）
    #[serde(alias = "duration_minutes")]
    pub duration: i32,

    /// 事件描述
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 教学活动
    #[serde(default)]
    pub activities: Vec<String>,

    /// 所需材料
    #[serde(default)]
    pub materials_needed: Vec<String>,

    /// 评估策略
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_strategy: Option<String>,
}

impl Phase {
    /// 创建空白事件（仅序号与时长）
    pub fn new(index: u8, duration: i32) -> Self {
        Self {
            index,
            duration,
            description: None,
            activities: Vec::new(),
            materials_needed: Vec::new(),
            assessment_strategy: None,
        }
    }

    /// 由初始分配结果创建事件骨架,供生成服务填充内容
    pub fn skeleton(role: PhaseRole, minutes: i32) -> Self {
        Self::new(role.index(), minutes.max(MIN_PHASE_MINUTES))
    }

    pub fn role(&self) -> Option<PhaseRole> {
        PhaseRole::from_index(self.index)
    }

    /// 展示名称（序号非法时返回占位名称）
    pub fn name(&self) -> String {
        match self.role() {
            Some(role) => role.name().to_string(),
            None => format!("Event {}", self.index),
        }
    }

    /// 返回修改时长后的新事件,其余字段原样保留
    pub fn with_duration(&self, duration: i32) -> Self {
        Self {
            duration,
            ..self.clone()
        }
    }
}

/// 事件总时长（饱和求和）
pub fn total_minutes(phases: &[Phase]) -> i32 {
    phases
        .iter()
        .fold(0i32, |acc, p| acc.saturating_add(p.duration))
}
