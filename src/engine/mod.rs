// ==========================================
// 教案时间编排引擎 - 引擎层
// ==========================================
// 职责: 实现时间分配与再平衡规则,不做持久化
// 红线: 引擎无状态,所有调整都必须输出原因（rationale/summary）
// ==========================================

pub mod analyzer;
pub mod error;
pub mod initial_allocation;
pub mod micro_adjust;
pub mod orchestrator;
pub mod redistribution;
pub mod report;
pub mod strategy;

// 重导出核心引擎
pub use analyzer::{DurationAnalysis, DurationAnalyzer};
pub use error::{BalanceError, BalanceResult};
pub use initial_allocation::{InitialAllocator, PhaseAllocation};
pub use micro_adjust::{MicroAdjustOutcome, MicroAdjuster};
pub use orchestrator::BalanceOrchestrator;
pub use redistribution::RedistributionContext;
pub use report::{AdjustmentReporter, PhaseAdjustment, RedistributionResult};
pub use strategy::{RedistributionStrategy, StrategyDecision, StrategySelector, StrategyTag};
