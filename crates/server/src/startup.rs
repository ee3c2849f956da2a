use std::io::Write;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;

/// Any origin, any method, any header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `.env`, then file config with `PORT`/`HOST` overrides.
pub fn load_config() -> Result<AppConfig, StartupError> {
    dotenvy::dotenv().ok();
    Ok(AppConfig::load_and_validate()?)
}

pub fn app() -> Router {
    routes::build_router(build_cors())
}

/// Bind the listening socket for `server`.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener, StartupError> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|source| StartupError::Bind {
            addr: format!("{}:{}", server.host, server.port),
            source,
        })
}

/// Write the one-line startup notice for a bound listener.
pub fn announce<W: Write>(listener: &TcpListener, out: &mut W) -> Result<u16, StartupError> {
    let port = listener.local_addr().map_err(StartupError::Serve)?.port();
    writeln!(out, "Server listening on port {port}").map_err(StartupError::Serve)?;
    Ok(port)
}

/// Serve `app` on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

/// Bind, announce the port on stdout, and serve the health API.
pub async fn run(server: ServerConfig) -> Result<(), StartupError> {
    let listener = bind(&server).await?;
    let port = announce(&listener, &mut std::io::stdout().lock())?;
    info!(host = %server.host, port, "server bound");
    serve(listener, app()).await
}
