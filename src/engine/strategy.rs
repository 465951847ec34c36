// ==========================================
// 教案时间编排引擎 - 再分配策略定义与选择
// ==========================================
// 用途:
// - 根据时长分析结果确定性地选择再分配策略；
// - 策略标识用于报告展示与结果复现（含 +micro 微调后缀）。
// 规则（按顺序,首个命中生效）:
// 1) |diff| <= 5 且用户修改 1~2 个事件 → 就近调整
// 2) |diff| > 10 → 教学优先级分配
// 3) 其余 → 按比例分配
// ==========================================

use crate::config::GapThresholds;
use crate::engine::analyzer::DurationAnalysis;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 再分配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedistributionStrategy {
    None,
    Adjacent,
    Pedagogical,
    Proportional,
}

impl RedistributionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedistributionStrategy::None => "none",
            RedistributionStrategy::Adjacent => "adjacent",
            RedistributionStrategy::Pedagogical => "pedagogical",
            RedistributionStrategy::Proportional => "proportional",
        }
    }
}

impl fmt::Display for RedistributionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RedistributionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(RedistributionStrategy::None),
            "adjacent" => Ok(RedistributionStrategy::Adjacent),
            "pedagogical" => Ok(RedistributionStrategy::Pedagogical),
            "proportional" => Ok(RedistributionStrategy::Proportional),
            other => Err(format!("未知再分配策略: {}", other)),
        }
    }
}

// ==========================================
// StrategyTag - 策略标识（策略 + 是否微调）
// ==========================================
// 序列化形如 "adjacent" / "proportional+micro"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrategyTag {
    pub strategy: RedistributionStrategy,
    pub micro_adjusted: bool,
}

const MICRO_SUFFIX: &str = "+micro";

impl StrategyTag {
    pub fn new(strategy: RedistributionStrategy) -> Self {
        Self {
            strategy,
            micro_adjusted: false,
        }
    }

    pub fn with_micro(self) -> Self {
        Self {
            micro_adjusted: true,
            ..self
        }
    }
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.micro_adjusted {
            write!(f, "{}{}", self.strategy.as_str(), MICRO_SUFFIX)
        } else {
            write!(f, "{}", self.strategy.as_str())
        }
    }
}

impl std::str::FromStr for StrategyTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_suffix(MICRO_SUFFIX) {
            Some(base) => Ok(StrategyTag::new(base.parse()?).with_micro()),
            None => Ok(StrategyTag::new(s.parse()?)),
        }
    }
}

impl Serialize for StrategyTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StrategyTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// StrategySelector - 策略选择器
// ==========================================

/// 策略选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyDecision {
    pub strategy: RedistributionStrategy,
    pub rationale: String,
}

pub struct StrategySelector;

impl StrategySelector {
    pub fn new() -> Self {
        Self
    }

    /// 选择再分配策略
    pub fn select(&self, analysis: &DurationAnalysis, thresholds: &GapThresholds) -> StrategyDecision {
        let diff = analysis.time_difference;
        let abs = analysis.abs_difference();
        let modified = analysis.modified_indices.len();

        if !analysis.needs_redistribution {
            return StrategyDecision {
                strategy: RedistributionStrategy::None,
                rationale: format!(
                    "Total is within {} minute of the target ({:+} min); no redistribution needed.",
                    thresholds.noop_tolerance, diff
                ),
            };
        }

        if abs <= thresholds.minor_max && (1..=thresholds.adjacent_max_modified).contains(&modified) {
            return StrategyDecision {
                strategy: RedistributionStrategy::Adjacent,
                rationale: format!(
                    "{} change ({:+} min) after editing {} phase(s): adjusting neighbouring phases to keep the edit local.",
                    capitalize(analysis.magnitude.as_str()),
                    diff,
                    modified
                ),
            };
        }

        if abs > thresholds.large_above {
            return StrategyDecision {
                strategy: RedistributionStrategy::Pedagogical,
                rationale: format!(
                    "Large change ({:+} min): distributing by pedagogical flexibility for a {} lesson.",
                    diff, analysis.lesson_focus
                ),
            };
        }

        StrategyDecision {
            strategy: RedistributionStrategy::Proportional,
            rationale: format!(
                "{} change ({:+} min): distributing in proportion to each phase's flexible time.",
                capitalize(analysis.magnitude.as_str()),
                diff
            ),
        }
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
