mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use config::ServerConfig;
use log::info;
use tokio::net::TcpListener;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the logger so RUST_LOG can live there too
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(database::create_connection());

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Running CoWork Manager API on http://{}", listener.local_addr()?);
    info!("API docs at http://{}/docs", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
