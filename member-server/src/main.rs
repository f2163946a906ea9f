use member_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    tracing::info!(
        "Member server starting (env: {}, db: {})",
        config.environment,
        config.database_url
    );

    // 2. 初始化服务器状态 (连接池 + 迁移)
    let state = ServerState::initialize(&config).await.inspect_err(|e| {
        tracing::error!("Initialization failed: {}", e);
    })?;

    // 3. 启动 HTTP 服务器, Ctrl-C / SIGTERM 时优雅退出
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
