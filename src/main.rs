use std::time::Duration;

use log::info;

use recipe_extractor::config::ServerConfig;
use recipe_extractor::fetcher::RecipeFetcher;
use recipe_extractor::server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ServerConfig::load()?;
    let fetcher = RecipeFetcher::new(
        Some(Duration::from_secs(config.fetch_timeout)),
        config.user_agent.as_deref(),
    );

    let app = create_router(AppState { fetcher });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
