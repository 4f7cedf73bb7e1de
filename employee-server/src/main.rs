use employee_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (不存在时忽略)
    let _ = dotenv::dotenv();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    setup_environment(&config);

    tracing::info!(
        environment = %config.environment,
        storage = ?config.storage,
        "Employee server starting..."
    );

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
