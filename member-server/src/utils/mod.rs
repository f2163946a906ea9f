//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型 (from shared::error)
//! - [`extract`] - 请求提取器 (JSON body + validation, path id)
//! - [`logger`] - 日志初始化

pub mod extract;
pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCode};
