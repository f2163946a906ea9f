use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动/运行错误 (请求级错误见 [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("初始化失败: {0}")]
    Init(#[from] AppError),

    #[error("网络错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
