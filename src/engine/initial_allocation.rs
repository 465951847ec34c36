// ==========================================
// 教案时间编排引擎 - 初始时间分配引擎
// ==========================================
// 职责: 生成内容前,按教学规律给九个事件分配初始时长
// 输入: 总时长 + 认知层级 + 年级
// 输出: 每个事件的分钟数（事件 1~8 四舍五入,事件 9 取余量）
// ==========================================
// 步骤:
// 1) 由认知层级计算实践占比 focus_ratio（无选择时为 0.5）
// 2) 在理论/实践基准分布之间线性插值
// 3) 乘以年级脚手架系数
// 4) 归一化并换算为分钟,每个事件至少 1 分钟
// ==========================================

use crate::config::AllocationProfile;
use crate::domain::phase::{Phase, PhaseRole, MIN_PHASE_MINUTES, PHASE_COUNT};
use crate::domain::types::{BloomLevel, GradeLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

// ==========================================
// PhaseAllocation - 单事件分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseAllocation {
    pub index: u8,
    pub role: PhaseRole,
    pub minutes: i32,

    /// 归一化后的权重
    pub share: f64,
}

/// 实践占比: practical / (practical + theoretical),无选择时为 0.5
pub fn focus_ratio(levels: &BTreeSet<BloomLevel>) -> f64 {
    let practical = levels.iter().filter(|l| l.is_practical()).count();
    let theoretical = levels.iter().filter(|l| l.is_theoretical()).count();
    if practical + theoretical == 0 {
        0.5
    } else {
        practical as f64 / (practical + theoretical) as f64
    }
}

/// 银行家舍入（0.5 取偶）,与内容生成服务的分配结果保持一致
fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}

// ==========================================
// InitialAllocator - 初始时间分配引擎
// ==========================================
pub struct InitialAllocator;

impl InitialAllocator {
    pub fn new() -> Self {
        Self
    }

    /// 计算归一化权重（按事件顺序）
    pub fn weights(
        &self,
        levels: &BTreeSet<BloomLevel>,
        grade: Option<GradeLevel>,
        profile: &AllocationProfile,
    ) -> [f64; PHASE_COUNT] {
        let ratio = focus_ratio(levels);

        let mut weights = [0.0; PHASE_COUNT];
        for (pos, weight) in weights.iter_mut().enumerate() {
            let theory = profile.theoretical[pos];
            let base = match profile.practical[pos] {
                Some(practice) => theory * (1.0 - ratio) + practice * ratio,
                None => theory,
            };
            *weight = base * profile.multiplier(grade, (pos + 1) as u8);
        }

        let sum: f64 = weights.iter().sum();
        if sum > 0.0 {
            for w in weights.iter_mut() {
                *w /= sum;
            }
        }
        weights
    }

    /// 分配初始时长
    ///
    /// 下限不起作用时,分配总和等于 total_minutes；
    /// 总时长过短时每个事件仍保留 1 分钟,总和可能超出
    pub fn allocate(
        &self,
        total_minutes: i32,
        levels: &BTreeSet<BloomLevel>,
        grade: Option<GradeLevel>,
        profile: &AllocationProfile,
    ) -> Vec<PhaseAllocation> {
        let weights = self.weights(levels, grade, profile);

        let mut allocations = Vec::with_capacity(PHASE_COUNT);
        let mut allocated = 0;
        for (pos, role) in PhaseRole::ALL.iter().enumerate() {
            let minutes = if pos + 1 < PHASE_COUNT {
                let m = round_half_even(weights[pos] * total_minutes as f64).max(MIN_PHASE_MINUTES);
                allocated += m;
                m
            } else {
                // 最后一个事件取余量
                (total_minutes - allocated).max(MIN_PHASE_MINUTES)
            };

            allocations.push(PhaseAllocation {
                index: role.index(),
                role: *role,
                minutes,
                share: weights[pos],
            });
        }

        debug!(
            total_minutes = total_minutes,
            focus_ratio = focus_ratio(levels),
            grade = ?grade,
            "初始时间分配完成"
        );

        allocations
    }

    /// 分配初始时长并生成事件骨架
    pub fn skeleton_phases(
        &self,
        total_minutes: i32,
        levels: &BTreeSet<BloomLevel>,
        grade: Option<GradeLevel>,
        profile: &AllocationProfile,
    ) -> Vec<Phase> {
        self.allocate(total_minutes, levels, grade, profile)
            .into_iter()
            .map(|a| Phase::skeleton(a.role, a.minutes))
            .collect()
    }
}

impl Default for InitialAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(items: &[BloomLevel]) -> BTreeSet<BloomLevel> {
        items.iter().copied().collect()
    }

    fn minutes(allocations: &[PhaseAllocation]) -> Vec<i32> {
        allocations.iter().map(|a| a.minutes).collect()
    }

    #[test]
    fn test_focus_ratio() {
        assert_eq!(focus_ratio(&BTreeSet::new()), 0.5);
        assert_eq!(focus_ratio(&levels(&[BloomLevel::Remember])), 0.0);
        assert_eq!(
            focus_ratio(&levels(&[BloomLevel::Apply, BloomLevel::Create, BloomLevel::Understand])),
            2.0 / 3.0
        );
    }

    #[test]
    fn test_weights_are_normalized() {
        let allocator = InitialAllocator::new();
        let weights = allocator.weights(
            &levels(&[BloomLevel::Analyze]),
            Some(GradeLevel::Masters),
            &AllocationProfile::default(),
        );
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_sixty_minute_lesson() {
        let allocator = InitialAllocator::new();
        let result = allocator.allocate(60, &BTreeSet::new(), None, &AllocationProfile::default());
        assert_eq!(minutes(&result), vec![3, 2, 6, 17, 10, 11, 5, 3, 3]);
        assert_eq!(minutes(&result).iter().sum::<i32>(), 60);
    }

    #[test]
    fn test_practical_focus_shifts_time_to_practice() {
        let allocator = InitialAllocator::new();
        let profile = AllocationProfile::default();
        let theory = allocator.allocate(90, &levels(&[BloomLevel::Remember]), None, &profile);
        let practice = allocator.allocate(90, &levels(&[BloomLevel::Create]), None, &profile);

        assert!(practice[5].minutes > theory[5].minutes);
        assert!(practice[3].minutes < theory[3].minutes);
    }

    #[test]
    fn test_exact_half_rounds_to_even() {
        // 53 分钟纯理论课: 事件 1、2、8 恰为 2.5 分钟 → 取偶为 2
        let allocator = InitialAllocator::new();
        let result = allocator.allocate(
            53,
            &levels(&[BloomLevel::Remember]),
            None,
            &AllocationProfile::default(),
        );
        assert_eq!(minutes(&result), vec![2, 2, 6, 18, 8, 8, 4, 2, 3]);
    }

    #[test]
    fn test_short_lesson_keeps_floor() {
        let allocator = InitialAllocator::new();
        let result = allocator.allocate(5, &BTreeSet::new(), None, &AllocationProfile::default());
        assert!(result.iter().all(|a| a.minutes >= 1));
        assert_eq!(minutes(&result).iter().sum::<i32>(), 9);
    }

    #[test]
    fn test_skeleton_phases_are_ordered() {
        let allocator = InitialAllocator::new();
        let phases = allocator.skeleton_phases(
            45,
            &BTreeSet::new(),
            Some(GradeLevel::Freshman),
            &AllocationProfile::default(),
        );
        let indices: Vec<u8> = phases.iter().map(|p| p.index).collect();
        assert_eq!(indices, (1..=9).collect::<Vec<u8>>());
    }
}
