// ==========================================
// 教案时间编排引擎 - API层
// ==========================================
// 职责: 面向调用方（表单/向导、生成服务、导出流程）的 JSON 接口
// ==========================================

pub mod balance_api;
pub mod dto;
pub mod error;
pub mod validator;

pub use balance_api::BalanceApi;
pub use dto::{AllocationRequest, AllocationResponse, BalanceRequest, DurationChangeRequest};
pub use error::{ApiError, ApiResult};
