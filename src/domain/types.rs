// ==========================================
// 教案时间编排引擎 - 领域类型定义
// ==========================================
// 依据: 布鲁姆认知层级 (六级分类)
// 依据: 课程年级与差异化教学需求
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ==========================================
// 认知层级 (Bloom Level)
// ==========================================
// 固定六级分类,上游已完成取值校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomLevel {
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloomLevel::Remember => "remember",
            BloomLevel::Understand => "understand",
            BloomLevel::Apply => "apply",
            BloomLevel::Analyze => "analyze",
            BloomLevel::Evaluate => "evaluate",
            BloomLevel::Create => "create",
        }
    }

    /// 是否属于实践类层级 (apply/analyze/evaluate/create)
    pub fn is_practical(&self) -> bool {
        matches!(
            self,
            BloomLevel::Apply | BloomLevel::Analyze | BloomLevel::Evaluate | BloomLevel::Create
        )
    }

    /// 是否属于理论类层级 (remember/understand)
    pub fn is_theoretical(&self) -> bool {
        matches!(self, BloomLevel::Remember | BloomLevel::Understand)
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BloomLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remember" => Ok(BloomLevel::Remember),
            "understand" => Ok(BloomLevel::Understand),
            "apply" => Ok(BloomLevel::Apply),
            "analyze" | "analyse" => Ok(BloomLevel::Analyze),
            "evaluate" => Ok(BloomLevel::Evaluate),
            "create" => Ok(BloomLevel::Create),
            other => Err(format!("未知认知层级: {}", other)),
        }
    }
}

// ==========================================
// 课程侧重 (Lesson Focus)
// ==========================================
// 由所选认知层级派生,用于选择教学弹性权重表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonFocus {
    Theoretical,
    Practical,
    Balanced,
}

impl LessonFocus {
    /// 根据所选认知层级判定课程侧重
    ///
    /// 实践类多于理论类 → Practical；理论类多于实践类 → Theoretical；
    /// 相等或未选择 → Balanced
    pub fn from_levels(levels: &BTreeSet<BloomLevel>) -> Self {
        let practical = levels.iter().filter(|l| l.is_practical()).count();
        let theoretical = levels.iter().filter(|l| l.is_theoretical()).count();

        if practical > theoretical {
            LessonFocus::Practical
        } else if theoretical > practical {
            LessonFocus::Theoretical
        } else {
            LessonFocus::Balanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonFocus::Theoretical => "theoretical",
            LessonFocus::Practical => "practical",
            LessonFocus::Balanced => "balanced",
        }
    }
}

impl fmt::Display for LessonFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 年级 (Grade Level)
// ==========================================
// 仅用于初始时间分配的脚手架系数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLevel {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Masters,
    Postgrad,
}

impl GradeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Freshman => "freshman",
            GradeLevel::Sophomore => "sophomore",
            GradeLevel::Junior => "junior",
            GradeLevel::Senior => "senior",
            GradeLevel::Masters => "masters",
            GradeLevel::Postgrad => "postgrad",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "freshman" => Ok(GradeLevel::Freshman),
            "sophomore" => Ok(GradeLevel::Sophomore),
            "junior" => Ok(GradeLevel::Junior),
            "senior" => Ok(GradeLevel::Senior),
            "masters" => Ok(GradeLevel::Masters),
            "postgrad" => Ok(GradeLevel::Postgrad),
            other => Err(format!("未知年级: {}", other)),
        }
    }
}

// ==========================================
// 时间差量级 (Gap Magnitude)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapMagnitude {
    Minor,    // |diff| <= 5
    Moderate, // 5 < |diff| <= 10
    Large,    // |diff| > 10
}

impl GapMagnitude {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapMagnitude::Minor => "minor",
            GapMagnitude::Moderate => "moderate",
            GapMagnitude::Large => "large",
        }
    }
}

impl fmt::Display for GapMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
