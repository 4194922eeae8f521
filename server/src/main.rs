mod routes;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("{0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let leptos_options = routes::leptos_options().map_err(ServerError::Config)?;
    let addr = leptos_options.site_addr;
    let app = routes::app(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "register app listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
