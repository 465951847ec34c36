// ==========================================
// 教案时间编排引擎 - 配置层
// ==========================================
// 职责: 平衡阈值、弹性权重表、初始分配配置的加载与读取
// 存储: JSON 文件,缺省时使用内置默认值
// ==========================================

pub mod allocation_profile;
pub mod balance_config;
pub mod config_manager;
pub mod config_reader;
pub mod error;
pub mod flexibility;

// 重导出核心配置类型
pub use allocation_profile::AllocationProfile;
pub use balance_config::{BalanceConfig, GapThresholds, MicroAdjustPolicy};
pub use config_manager::{default_config_path, ConfigManager};
pub use config_reader::BalanceConfigReader;
pub use error::ConfigError;
pub use flexibility::FlexibilityTable;
