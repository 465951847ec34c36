// ==========================================
// 教案时间编排引擎 - 初始时间分配配置
// ==========================================
// 职责: 理论/实践两套基准分布 + 年级脚手架系数
// 说明: 实践分布不含事件 9（巩固迁移）,该事件沿用理论权重
// ==========================================

use crate::domain::phase::PHASE_COUNT;
use crate::domain::types::GradeLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 初始分配配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// 理论型基准分布（按事件顺序）
    pub theoretical: [f64; PHASE_COUNT],

    /// 实践型基准分布（None 表示不参与插值）
    pub practical: [Option<f64>; PHASE_COUNT],

    /// 年级系数: grade -> (事件序号 -> 乘数)
    #[serde(default)]
    pub grade_multipliers: BTreeMap<GradeLevel, BTreeMap<u8, f64>>,
}

impl Default for AllocationProfile {
    fn default() -> Self {
        let mut grade_multipliers = BTreeMap::new();
        grade_multipliers.insert(
            GradeLevel::Freshman,
            BTreeMap::from([(2, 1.2), (3, 1.3), (5, 1.2)]),
        );
        grade_multipliers.insert(
            GradeLevel::Sophomore,
            BTreeMap::from([(2, 1.1), (3, 1.1), (5, 1.1)]),
        );
        grade_multipliers.insert(GradeLevel::Junior, BTreeMap::new());
        grade_multipliers.insert(GradeLevel::Senior, BTreeMap::from([(6, 1.1), (8, 1.1)]));
        grade_multipliers.insert(
            GradeLevel::Masters,
            BTreeMap::from([(6, 1.2), (7, 1.1), (8, 1.2)]),
        );
        grade_multipliers.insert(
            GradeLevel::Postgrad,
            BTreeMap::from([(4, 0.9), (6, 1.3), (8, 1.3)]),
        );

        Self {
            theoretical: [0.05, 0.05, 0.12, 0.35, 0.15, 0.15, 0.08, 0.05, 0.06],
            practical: [
                Some(0.05),
                Some(0.03),
                Some(0.08),
                Some(0.25),
                Some(0.20),
                Some(0.25),
                Some(0.10),
                Some(0.04),
                None,
            ],
            grade_multipliers,
        }
    }
}

impl AllocationProfile {
    /// 某年级对某事件的乘数（未配置时为 1.0）
    pub fn multiplier(&self, grade: Option<GradeLevel>, phase_index: u8) -> f64 {
        grade
            .and_then(|g| self.grade_multipliers.get(&g))
            .and_then(|m| m.get(&phase_index))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        let practical = self.practical.iter().flatten();
        for w in self.theoretical.iter().chain(practical) {
            if !w.is_finite() || *w < 0.0 {
                return Err(format!("初始分配基准权重非法: {}", w));
            }
        }
        if self.theoretical.iter().sum::<f64>() <= 0.0 {
            return Err("理论型基准分布之和必须大于 0".to_string());
        }

        for (grade, table) in &self.grade_multipliers {
            for (index, m) in table {
                if !(1..=PHASE_COUNT as u8).contains(index) {
                    return Err(format!("年级系数事件序号越界: grade={}, event={}", grade, index));
                }
                if !m.is_finite() || *m <= 0.0 {
                    return Err(format!("年级系数非法: grade={}, event={}, value={}", grade, index, m));
                }
            }
        }
        Ok(())
    }
}
