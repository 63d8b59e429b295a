//! HTTP server startup logic.

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind a non-blocking listener on `addr`.
pub(crate) fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr).map_err(ServerError::Bind)?;
    listener.set_nonblocking(true).map_err(ServerError::Bind)?;
    Ok(listener)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config.http.addr()?;
    let drain = Duration::from_secs(config.http.shutdown_timeout_seconds);

    let listener = bind_listener(addr)?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), drain);

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!("Server shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_port_is_a_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind_listener(addr).unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
        assert!(err.to_string().starts_with("Failed to bind server"));
    }

    #[test]
    fn free_port_binds() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn bad_host_is_an_address_error() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address(_)));
    }

    #[test]
    fn serve_failures_are_not_reported_as_bind() {
        let err = ServerError::Server("connection reset".to_string());
        assert_eq!(err.to_string(), "Server error: connection reset");
    }
}
