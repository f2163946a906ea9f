//! Panic 兜底
//!
//! handler 中的 panic 由 `CatchPanicLayer` 捕获，作为 [`AppError::internal`]
//! 记录日志后返回通用 500。

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::utils::AppError;

/// 把 panic 转换为 `500 {"error": "An unexpected error occurred."}`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    AppError::internal(format!("Handler panicked: {detail}")).into_response()
}
