// ==========================================
// 教案时间编排引擎 - 教学弹性权重表
// ==========================================
// 职责: 按 (课程侧重, 事件序号) 给出时长弹性权重
// 说明: 权重越大,表示该事件时长越可调整而不损害学习效果
// ==========================================

use crate::domain::phase::PHASE_COUNT;
use crate::domain::types::LessonFocus;
use serde::{Deserialize, Serialize};

/// 弹性权重表（三种侧重 × 九个事件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexibilityTable {
    pub theoretical: [f64; PHASE_COUNT],
    pub practical: [f64; PHASE_COUNT],
    pub balanced: [f64; PHASE_COUNT],
}

impl Default for FlexibilityTable {
    fn default() -> Self {
        Self {
            // 理论课: 呈现内容 (4) 最不宜压缩
            theoretical: [0.8, 1.0, 0.6, 0.2, 0.5, 0.5, 0.7, 0.4, 0.9],
            // 实践课: 指导 (5)、练习 (6) 最不宜压缩,呈现内容弹性增大
            practical: [0.8, 1.0, 0.7, 0.6, 0.3, 0.2, 0.5, 0.4, 0.9],
            balanced: [0.8, 1.0, 0.6, 0.4, 0.4, 0.4, 0.6, 0.4, 0.9],
        }
    }
}

impl FlexibilityTable {
    /// 某侧重下的整行权重（按事件顺序）
    pub fn row(&self, focus: LessonFocus) -> &[f64; PHASE_COUNT] {
        match focus {
            LessonFocus::Theoretical => &self.theoretical,
            LessonFocus::Practical => &self.practical,
            LessonFocus::Balanced => &self.balanced,
        }
    }

    /// 查询单元格
    ///
    /// # 返回
    /// - Some(weight): 事件序号在 1..=9 内
    /// - None: 事件序号非法
    pub fn weight(&self, focus: LessonFocus, phase_index: u8) -> Option<f64> {
        if !(1..=PHASE_COUNT as u8).contains(&phase_index) {
            return None;
        }
        Some(self.row(focus)[(phase_index - 1) as usize])
    }

    /// 校验权重表
    ///
    /// # 验证规则
    /// 1. 所有权重必须为有限非负数
    /// 2. 每行权重之和必须大于 0
    pub fn validate(&self) -> Result<(), String> {
        for focus in [
            LessonFocus::Theoretical,
            LessonFocus::Practical,
            LessonFocus::Balanced,
        ] {
            let row = self.row(focus);
            for (pos, w) in row.iter().enumerate() {
                if !w.is_finite() || *w < 0.0 {
                    return Err(format!(
                        "弹性权重非法: focus={}, event={}, weight={}",
                        focus,
                        pos + 1,
                        w
                    ));
                }
            }
            let sum: f64 = row.iter().sum();
            if sum <= 0.0 {
                return Err(format!("弹性权重之和必须大于 0: focus={}", focus));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inform_objectives_is_highly_flexible_in_every_focus() {
        let table = FlexibilityTable::default();
        for focus in [
            LessonFocus::Theoretical,
            LessonFocus::Practical,
            LessonFocus::Balanced,
        ] {
            let inform = table.weight(focus, 2).unwrap();
            let max = table.row(focus).iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(inform, max, "focus={}", focus);
        }
    }

    #[test]
    fn test_present_content_least_flexible_under_theory() {
        let table = FlexibilityTable::default();
        let present = table.weight(LessonFocus::Theoretical, 4).unwrap();
        let min = table
            .row(LessonFocus::Theoretical)
            .iter()
            .cloned()
            .fold(f64::MAX, f64::min);
        assert_eq!(present, min);
        assert!(table.weight(LessonFocus::Practical, 4).unwrap() > present);
    }

    #[test]
    fn test_cell_lookup() {
        let table = FlexibilityTable::default();
        assert_eq!(table.weight(LessonFocus::Practical, 6), Some(0.2));
        assert_eq!(table.weight(LessonFocus::Balanced, 9), Some(0.9));
        assert_eq!(table.weight(LessonFocus::Balanced, 0), None);
        assert_eq!(table.weight(LessonFocus::Balanced, 10), None);
    }

    #[test]
    fn test_validate_rejects_negative_and_zero_rows() {
        let mut table = FlexibilityTable::default();
        assert!(table.validate().is_ok());

        table.practical[3] = -0.1;
        assert!(table.validate().is_err());

        let mut table = FlexibilityTable::default();
        table.balanced = [0.0; PHASE_COUNT];
        assert!(table.validate().is_err());
    }
}
