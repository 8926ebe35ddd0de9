mod config;
mod logging;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = config::Config::from_env()?;
    logging::init(&config.log_filter)?;

    let session = wiring::start_session(config.seed);
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "serving trading simulator");

    axum::serve(listener, wiring::build_app(session)).await?;
    Ok(())
}
