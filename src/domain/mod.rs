// ==========================================
// 教案时间编排引擎 - 领域模型层
// ==========================================
// 职责: 定义教学事件、课程上下文与分类类型
// 红线: 不含引擎逻辑,不含持久化逻辑
// ==========================================

pub mod lesson;
pub mod phase;
pub mod types;

// 重导出核心类型
pub use lesson::{LessonContext, MAX_LESSON_MINUTES, MIN_LESSON_MINUTES};
pub use phase::{total_minutes, Phase, PhaseRole, MIN_PHASE_MINUTES, PHASE_COUNT};
pub use types::{BloomLevel, GapMagnitude, GradeLevel, LessonFocus};
