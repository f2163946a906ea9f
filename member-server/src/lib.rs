//! Member Server - 会员管理 REST 服务
//!
//! # 架构概述
//!
//! 三层结构, 每层只依赖下一层:
//!
//! - **仓储** (`db::repository`): SQLite 存取, 不含业务规则
//! - **服务** (`services`): 写操作前的存在性检查
//! - **HTTP API** (`api`): 路由、请求校验和状态码映射
//!
//! # 模块结构
//!
//! ```text
//! member-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 连接池、迁移、仓储
//! ├── services/      # 会员服务
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装 + 中间件栈
//! ├── middleware/    # 请求日志、panic 兜底
//! └── utils/         # 提取器、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use routes::build_app;
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置服务器运行环境: 读取 `.env` 并初始化日志
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}
