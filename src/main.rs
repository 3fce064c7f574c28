use std::io::Error;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_service::{build_app, config::Config};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::try_parse().map_err(Error::other)?;
    let address = format!("{}:{}", config.host, config.port);

    info!(url = %config.server_url(), "starting todo service");

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            build_app(config),
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await?;

    info!("todo service stopped");
    Ok(())
}
