// ==========================================
// 教案时间编排引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,汇总引擎/配置/序列化错误
// ==========================================

use crate::config::ConfigError;
use crate::engine::BalanceError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON 序列化/反序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
