use staff_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Staff server starting...");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    server.run().await
}
