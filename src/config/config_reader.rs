// ==========================================
// 教案时间编排引擎 - 配置读取 Trait
// ==========================================
// 职责: 定义引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::allocation_profile::AllocationProfile;
use crate::config::balance_config::{BalanceConfig, GapThresholds, MicroAdjustPolicy};
use crate::config::flexibility::FlexibilityTable;

// ==========================================
// BalanceConfigReader Trait
// ==========================================
// 实现者: BalanceConfig（内存配置）、ConfigManager（文件配置）
pub trait BalanceConfigReader: Send + Sync {
    /// 时间差阈值
    fn gap_thresholds(&self) -> &GapThresholds;

    /// 微调策略
    fn micro_adjust_policy(&self) -> &MicroAdjustPolicy;

    /// 教学弹性权重表
    fn flexibility_table(&self) -> &FlexibilityTable;

    /// 初始分配配置
    fn allocation_profile(&self) -> &AllocationProfile;
}

impl BalanceConfigReader for BalanceConfig {
    fn gap_thresholds(&self) -> &GapThresholds {
        &self.gap
    }

    fn micro_adjust_policy(&self) -> &MicroAdjustPolicy {
        &self.micro_adjust
    }

    fn flexibility_table(&self) -> &FlexibilityTable {
        &self.flexibility
    }

    fn allocation_profile(&self) -> &AllocationProfile {
        &self.allocation
    }
}
