// ==========================================
// 教案时间编排引擎 - 核心库
// ==========================================
// 系统定位: 教案生成系统中的时长分配与自动平衡子系统
// 边界: 表单/向导、文件上传、内容生成服务、课件导出均为外部协作方,
//       仅读写本库定义的事件/课程上下文数据模型
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 事件与课程上下文
pub mod domain;

// 引擎层 - 分配与再平衡规则
pub mod engine;

// 配置层 - 阈值与权重表
pub mod config;

// 日志系统
pub mod logging;

// API 层 - JSON 接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    BloomLevel, GapMagnitude, GradeLevel, LessonContext, LessonFocus, Phase, PhaseRole,
    MIN_PHASE_MINUTES, PHASE_COUNT,
};

pub use engine::{
    AdjustmentReporter, BalanceError, BalanceOrchestrator, DurationAnalyzer, InitialAllocator,
    MicroAdjuster, PhaseAdjustment, RedistributionResult, RedistributionStrategy,
    StrategySelector, StrategyTag,
};

pub use config::{BalanceConfig, BalanceConfigReader, ConfigManager, FlexibilityTable};

pub use api::{ApiError, BalanceApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "教案时间编排引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
