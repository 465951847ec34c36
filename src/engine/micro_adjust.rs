// ==========================================
// 教案时间编排引擎 - 微调器
// ==========================================
// 职责: 主策略执行后残差仍超阈值时,做一次有界的单轮修正
// 规则:
// 1) 按优先事件顺序（告知目标、提供反馈、巩固迁移）逐个 ±1 分钟
// 2) 缩减时跳过已处于下限的事件
// 3) 缺口闭合即停止；每个事件本轮最多调整一次
// 4) 优先事件用尽仍有缺口时,可按时长降序继续调整其余事件
// ==========================================

use crate::config::MicroAdjustPolicy;
use crate::domain::phase::{total_minutes, Phase, MIN_PHASE_MINUTES};
use tracing::{debug, info};

// ==========================================
// MicroAdjustOutcome - 微调结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicroAdjustOutcome {
    pub phases: Vec<Phase>,

    /// 本轮微调是否执行（残差超过阈值即执行,与是否实际改动无关）
    pub applied: bool,

    /// 被调整过的事件序号（按调整顺序）
    pub touched: Vec<u8>,
}

pub struct MicroAdjuster;

impl MicroAdjuster {
    pub fn new() -> Self {
        Self
    }

    /// 执行微调
    ///
    /// # 参数
    /// - `phases`: 主策略输出
    /// - `target_total`: 目标总时长
    /// - `policy`: 微调策略
    pub fn apply(
        &self,
        phases: &[Phase],
        target_total: i32,
        policy: &MicroAdjustPolicy,
    ) -> MicroAdjustOutcome {
        let gap = target_total.saturating_sub(total_minutes(phases));
        if gap.abs() <= policy.threshold_minutes {
            return MicroAdjustOutcome {
                phases: phases.to_vec(),
                applied: false,
                touched: Vec::new(),
            };
        }

        let mut result = phases.to_vec();
        let mut remaining = gap;
        let mut touched = Vec::new();

        for index in nudge_order(phases, policy) {
            if remaining == 0 {
                break;
            }
            let Some(phase) = result.iter_mut().find(|p| p.index == index) else {
                continue;
            };

            if remaining > 0 {
                phase.duration += 1;
                remaining -= 1;
                touched.push(index);
            } else if phase.duration > MIN_PHASE_MINUTES {
                phase.duration -= 1;
                remaining += 1;
                touched.push(index);
            }
        }

        if remaining != 0 {
            debug!(gap = gap, remaining = remaining, "微调后仍有残差");
        }
        info!(gap = gap, touched = ?touched, "微调完成");

        MicroAdjustOutcome {
            phases: result,
            applied: true,
            touched,
        }
    }
}

impl Default for MicroAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

/// 微调顺序: 优先事件在前；启用回退时其余事件按时长降序（同时长按序号）
fn nudge_order(phases: &[Phase], policy: &MicroAdjustPolicy) -> Vec<u8> {
    let mut order: Vec<u8> = policy.priority_roles.iter().map(|r| r.index()).collect();

    if policy.fallback_to_largest {
        let mut rest: Vec<&Phase> = phases
            .iter()
            .filter(|p| !order.contains(&p.index))
            .collect();
        rest.sort_by(|a, b| b.duration.cmp(&a.duration).then(a.index.cmp(&b.index)));
        order.extend(rest.into_iter().map(|p| p.index));
    }

    order
}
