mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;

    let upstream = match &config.upstream_url {
        Some(url) => {
            tracing::info!(upstream = %url, "proxying chat and billing calls");
            Some(proxy::Upstream::new(url.clone(), config.timeouts)?)
        }
        None => {
            tracing::warn!("FLORA_UPSTREAM_URL not set; chat and billing calls will answer 503");
            None
        }
    };

    let state = state::AppState::new(upstream);
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "flora-gpt listening");
    axum::serve(listener, app).await?;
    Ok(())
}
