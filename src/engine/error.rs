// ==========================================
// 教案时间编排引擎 - 引擎层错误类型
// ==========================================
// 说明: 引擎本身倾向于平滑降级（缺少快照、无法达到目标均不报错）
//       仅对输入结构问题快速失败
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// 结构错误: 事件数量不为 9,或序号不是按顺序的 1..=9
    #[error("事件结构错误: {message}")]
    Structure { message: String },

    /// 取值错误: 输入时长超出 [min, max] 分钟
    #[error("事件时长越界: event={index}, duration={duration} (允许 {min}..={max} 分钟)")]
    Range {
        index: u8,
        duration: i32,
        min: i32,
        max: i32,
    },

    /// 配置错误
    #[error("平衡配置无效: {0}")]
    Config(String),
}

/// Result 类型别名
pub type BalanceResult<T> = Result<T, BalanceError>;
