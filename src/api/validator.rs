// ==========================================
// 教案时间编排引擎 - 请求校验器
// ==========================================
// 职责: 引擎之外的上游校验（课程总时长范围等）
// 说明: 引擎本身只校验事件结构,不校验目标总时长范围
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::lesson::{MAX_LESSON_MINUTES, MIN_LESSON_MINUTES};

/// 校验课程总时长（5..=480 分钟）
pub fn validate_lesson_minutes(field: &str, minutes: i32) -> ApiResult<()> {
    if !(MIN_LESSON_MINUTES..=MAX_LESSON_MINUTES).contains(&minutes) {
        return Err(ApiError::InvalidInput(format!(
            "{} 必须在 {}..={} 分钟之间,实际为 {}",
            field, MIN_LESSON_MINUTES, MAX_LESSON_MINUTES, minutes
        )));
    }
    Ok(())
}

/// 校验时长变更请求中的原总时长（1..=480 分钟）
pub fn validate_current_minutes(minutes: i32) -> ApiResult<()> {
    if !(1..=MAX_LESSON_MINUTES).contains(&minutes) {
        return Err(ApiError::InvalidInput(format!(
            "current_duration 必须在 1..={} 分钟之间,实际为 {}",
            MAX_LESSON_MINUTES, minutes
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_minutes_bounds() {
        assert!(validate_lesson_minutes("target", 5).is_ok());
        assert!(validate_lesson_minutes("target", 480).is_ok());
        assert!(matches!(
            validate_lesson_minutes("target", 4),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(validate_lesson_minutes("target", 481).is_err());
    }

    #[test]
    fn test_current_minutes_bounds() {
        assert!(validate_current_minutes(1).is_ok());
        assert!(validate_current_minutes(0).is_err());
    }
}
