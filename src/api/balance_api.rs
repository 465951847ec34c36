// ==========================================
// 教案时间编排引擎 - 时间平衡 API
// ==========================================
// 职责: 请求校验 → 调用引擎 → 返回结果
// 说明: 不做持久化,调用方负责把结果合并进教案草稿
// ==========================================

use crate::api::dto::{AllocationRequest, AllocationResponse, BalanceRequest, DurationChangeRequest};
use crate::api::error::ApiResult;
use crate::api::validator::{validate_current_minutes, validate_lesson_minutes};
use crate::config::{BalanceConfigReader, ConfigManager};
use crate::domain::lesson::LessonContext;
use crate::domain::phase::{total_minutes, Phase};
use crate::domain::types::LessonFocus;
use crate::engine::{BalanceOrchestrator, InitialAllocator, RedistributionResult};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// BalanceApi - 时间平衡 API
// ==========================================
pub struct BalanceApi<C>
where
    C: BalanceConfigReader,
{
    config: Arc<C>,
    orchestrator: BalanceOrchestrator<C>,
    allocator: InitialAllocator,
}

impl<C> BalanceApi<C>
where
    C: BalanceConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self {
            orchestrator: BalanceOrchestrator::new(config.clone()),
            allocator: InitialAllocator::new(),
            config,
        }
    }

    /// 重新平衡（保存编辑或目标总时长变化时调用）
    pub fn rebalance(&self, request: &BalanceRequest) -> ApiResult<RedistributionResult> {
        validate_lesson_minutes("target_total_minutes", request.target_total_minutes)?;

        let context = LessonContext::new(request.target_total_minutes)
            .with_levels(request.selected_cognitive_levels.iter().copied());

        let result = self.orchestrator.rebalance(
            &request.phases,
            &context,
            request.snapshot.as_deref(),
        )?;
        Ok(result)
    }

    /// 课程总时长变更
    ///
    /// current_duration 与事件实际总和不一致时以实际总和为准,仅记录告警
    pub fn change_duration(&self, request: &DurationChangeRequest) -> ApiResult<RedistributionResult> {
        validate_current_minutes(request.current_duration)?;
        validate_lesson_minutes("new_duration", request.new_duration)?;

        let actual = total_minutes(&request.phases);
        if actual != request.current_duration {
            warn!(
                current_duration = request.current_duration,
                actual_total = actual,
                "current_duration 与事件总时长不一致,以事件总时长为准"
            );
        }

        info!(
            from = request.current_duration,
            to = request.new_duration,
            "课程总时长变更"
        );

        let context = LessonContext::new(request.new_duration)
            .with_levels(request.selected_cognitive_levels.iter().copied());
        let result = self.orchestrator.rebalance(&request.phases, &context, None)?;
        Ok(result)
    }

    /// 初始时间分配
    pub fn allocate(&self, request: &AllocationRequest) -> ApiResult<AllocationResponse> {
        validate_lesson_minutes("total_minutes", request.total_minutes)?;

        let profile = self.config.allocation_profile();
        let allocations = self.allocator.allocate(
            request.total_minutes,
            &request.selected_cognitive_levels,
            request.grade_level,
            profile,
        );
        let phases: Vec<Phase> = allocations
            .iter()
            .map(|a| Phase::skeleton(a.role, a.minutes))
            .collect();

        Ok(AllocationResponse {
            total_minutes: request.total_minutes,
            allocated_minutes: total_minutes(&phases),
            lesson_focus: LessonFocus::from_levels(&request.selected_cognitive_levels),
            allocations,
            phases,
        })
    }

    // ==========================================
    // JSON 入口
    // ==========================================

    pub fn rebalance_json(&self, raw: &str) -> ApiResult<String> {
        let request: BalanceRequest = serde_json::from_str(raw)?;
        Ok(serde_json::to_string(&self.rebalance(&request)?)?)
    }

    pub fn change_duration_json(&self, raw: &str) -> ApiResult<String> {
        let request: DurationChangeRequest = serde_json::from_str(raw)?;
        Ok(serde_json::to_string(&self.change_duration(&request)?)?)
    }

    pub fn allocate_json(&self, raw: &str) -> ApiResult<String> {
        let request: AllocationRequest = serde_json::from_str(raw)?;
        Ok(serde_json::to_string(&self.allocate(&request)?)?)
    }
}

impl BalanceApi<ConfigManager> {
    /// 从配置文件创建（未指定路径时使用默认位置或内置默认值）
    pub fn from_config_file(path: Option<&Path>) -> ApiResult<Self> {
        let manager = ConfigManager::load_or_default(path)?;
        Ok(Self::new(Arc::new(manager)))
    }
}
