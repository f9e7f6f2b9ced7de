mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "gamechat host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "gamechat listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
