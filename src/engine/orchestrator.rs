// ==========================================
// 教案时间编排引擎 - 引擎编排器
// ==========================================
// 流程: 分析 → 选择策略 → 再分配 → [微调] → 报告
// 红线: 无状态,每次调用完全由输入决定,不持有也不修改调用方数据
// ==========================================

use crate::config::{BalanceConfig, BalanceConfigReader};
use crate::domain::lesson::LessonContext;
use crate::domain::phase::Phase;
use crate::engine::analyzer::DurationAnalyzer;
use crate::engine::error::{BalanceError, BalanceResult};
use crate::engine::micro_adjust::MicroAdjuster;
use crate::engine::redistribution::{redistribute, RedistributionContext};
use crate::engine::report::{AdjustmentReporter, RedistributionResult};
use crate::engine::strategy::{RedistributionStrategy, StrategySelector, StrategyTag};
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// BalanceOrchestrator - 时间平衡编排器
// ==========================================
pub struct BalanceOrchestrator<C>
where
    C: BalanceConfigReader,
{
    config: Arc<C>,
    analyzer: DurationAnalyzer,
    selector: StrategySelector,
    micro: MicroAdjuster,
    reporter: AdjustmentReporter,
}

impl<C> BalanceOrchestrator<C>
where
    C: BalanceConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 配置读取器
    pub fn new(config: Arc<C>) -> Self {
        Self {
            config,
            analyzer: DurationAnalyzer::new(),
            selector: StrategySelector::new(),
            micro: MicroAdjuster::new(),
            reporter: AdjustmentReporter::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 重新平衡事件时长
    ///
    /// # 参数
    /// - phases: 当前九个事件
    /// - context: 课程上下文（目标总时长、认知层级）
    /// - snapshot: 用户开始编辑前的快照（可选）
    ///
    /// # 返回
    /// - Ok(RedistributionResult): 新的事件集合与调整报告
    /// - Err(BalanceError): 输入结构非法（事件数量/顺序/时长下限）
    #[instrument(skip_all, fields(target_total = context.target_total_minutes))]
    pub fn rebalance(
        &self,
        phases: &[Phase],
        context: &LessonContext,
        snapshot: Option<&[Phase]>,
    ) -> BalanceResult<RedistributionResult> {
        self.analyzer.validate_phases(phases)?;

        // ==========================================
        // 步骤1: 时长分析
        // ==========================================
        let thresholds = self.config.gap_thresholds();
        let analysis = self.analyzer.analyze(phases, context, snapshot, thresholds);

        // ==========================================
        // 步骤2: 策略选择
        // ==========================================
        let decision = self.selector.select(&analysis, thresholds);
        debug!(strategy = %decision.strategy, "策略选择完成");

        if decision.strategy == RedistributionStrategy::None {
            info!(time_difference = analysis.time_difference, "无需再分配");
            return Ok(self.reporter.build(
                phases,
                phases.to_vec(),
                analysis.target_total,
                StrategyTag::new(RedistributionStrategy::None),
                decision.rationale,
                &analysis.modified_indices,
            ));
        }

        // ==========================================
        // 步骤3: 再分配
        // ==========================================
        let redistribution_context = RedistributionContext {
            lesson_focus: analysis.lesson_focus,
            modified_indices: analysis.modified_indices.clone(),
        };
        let redistributed = redistribute(
            decision.strategy,
            phases,
            analysis.target_total,
            &redistribution_context,
            self.config.flexibility_table(),
        );

        // ==========================================
        // 步骤4: 微调（残差超阈值时）
        // ==========================================
        let outcome = self.micro.apply(
            &redistributed,
            analysis.target_total,
            self.config.micro_adjust_policy(),
        );
        let mut tag = StrategyTag::new(decision.strategy);
        if outcome.applied {
            tag = tag.with_micro();
        }

        // ==========================================
        // 步骤5: 报告
        // ==========================================
        let result = self.reporter.build(
            phases,
            outcome.phases,
            analysis.target_total,
            tag,
            decision.rationale,
            &analysis.modified_indices,
        );

        info!(
            strategy = %result.strategy,
            time_difference_before = result.time_difference_before,
            final_difference_after = result.final_difference_after,
            adjusted = result.adjustments.len(),
            "时间再分配完成"
        );

        Ok(result)
    }
}

impl BalanceOrchestrator<BalanceConfig> {
    /// 使用内置默认配置创建编排器
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(BalanceConfig::default()))
    }

    /// 校验配置后创建编排器
    pub fn with_config(config: BalanceConfig) -> BalanceResult<Self> {
        config
            .validate()
            .map_err(|e| BalanceError::Config(e.to_string()))?;
        Ok(Self::new(Arc::new(config)))
    }
}
