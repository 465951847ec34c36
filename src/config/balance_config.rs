// ==========================================
// 教案时间编排引擎 - 平衡参数配置
// ==========================================
// 职责: 时间差阈值、微调策略、弹性权重表、初始分配配置
// 说明: 所有字段带默认值,配置文件可只覆写部分字段
// ==========================================

use crate::config::allocation_profile::AllocationProfile;
use crate::config::error::ConfigError;
use crate::config::flexibility::FlexibilityTable;
use crate::domain::phase::PhaseRole;
use serde::{Deserialize, Serialize};

// ==========================================
// GapThresholds - 时间差阈值
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapThresholds {
    /// |diff| <= noop_tolerance 时不做再分配
    pub noop_tolerance: i32,

    /// |diff| <= minor_max 视为小幅变化
    pub minor_max: i32,

    /// |diff| > large_above 视为大幅变化
    pub large_above: i32,

    /// 就近调整最多允许的用户修改事件数
    pub adjacent_max_modified: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            noop_tolerance: 1,
            minor_max: 5,
            large_above: 10,
            adjacent_max_modified: 2,
        }
    }
}

// ==========================================
// MicroAdjustPolicy - 微调策略
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroAdjustPolicy {
    /// 残差 > threshold_minutes 时触发微调
    pub threshold_minutes: i32,

    /// 优先微调的事件（按顺序）
    pub priority_roles: Vec<PhaseRole>,

    /// 优先事件用尽后,是否继续按时长降序微调其余事件
    pub fallback_to_largest: bool,
}

impl Default for MicroAdjustPolicy {
    fn default() -> Self {
        Self {
            threshold_minutes: 1,
            priority_roles: vec![
                PhaseRole::InformObjectives,
                PhaseRole::ProvideFeedback,
                PhaseRole::EnhanceRetention,
            ],
            fallback_to_largest: true,
        }
    }
}

// ==========================================
// BalanceConfig - 完整配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub gap: GapThresholds,
    pub micro_adjust: MicroAdjustPolicy,
    pub flexibility: FlexibilityTable,
    pub allocation: AllocationProfile,
}

impl BalanceConfig {
    /// 校验配置
    ///
    /// # 验证规则
    /// 1. 阈值非负,且 minor_max <= large_above
    /// 2. adjacent_max_modified >= 1
    /// 3. 微调优先事件不重复
    /// 4. 弹性权重表、初始分配配置各自有效
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gap = &self.gap;
        if gap.noop_tolerance < 0 || gap.minor_max < 0 || gap.large_above < 0 {
            return Err(ConfigError::Invalid("时间差阈值不能为负数".to_string()));
        }
        if gap.minor_max > gap.large_above {
            return Err(ConfigError::Invalid(format!(
                "minor_max ({}) 不能大于 large_above ({})",
                gap.minor_max, gap.large_above
            )));
        }
        if gap.adjacent_max_modified == 0 {
            return Err(ConfigError::Invalid(
                "adjacent_max_modified 至少为 1".to_string(),
            ));
        }

        if self.micro_adjust.threshold_minutes < 0 {
            return Err(ConfigError::Invalid("微调阈值不能为负数".to_string()));
        }
        let roles = &self.micro_adjust.priority_roles;
        for (i, role) in roles.iter().enumerate() {
            if roles[..i].contains(role) {
                return Err(ConfigError::Invalid(format!("微调优先事件重复: {}", role)));
            }
        }

        self.flexibility.validate().map_err(ConfigError::Invalid)?;
        self.allocation.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BalanceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "gap": { "large_above": 15 } }"#;
        let config: BalanceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.gap.large_above, 15);
        assert_eq!(config.gap.minor_max, 5);
        assert_eq!(config.micro_adjust, MicroAdjustPolicy::default());
    }

    #[test]
    fn test_duplicate_priority_role_rejected() {
        let mut config = BalanceConfig::default();
        config.micro_adjust.priority_roles =
            vec![PhaseRole::ProvideFeedback, PhaseRole::ProvideFeedback];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = BalanceConfig::default();
        config.gap.minor_max = 12;
        assert!(config.validate().is_err());
    }
}
