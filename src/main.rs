// main.rs only boots logging, config, the shared client and the server

use std::sync::Arc;

use scrapmeup::config::Config;
use scrapmeup::logging;
use scrapmeup::spotify::SpotifyClient;
use scrapmeup::web::router::app_router;
use scrapmeup::web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env()?;

    // One catalog client for the whole process; handlers share it via state.
    let catalog = Arc::new(SpotifyClient::new(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
    ));
    let state = AppState {
        catalog,
        production: config.production,
    };

    let app = app_router(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!(
        "Web server listening on {} (visit http://127.0.0.1:{})",
        bind_addr, config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}
