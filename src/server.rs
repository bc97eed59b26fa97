use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{ConfigError, ServerConfig};
use crate::database::ActivityStore;
use crate::web;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

// Binds the configured address, retrying once on the next port.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr()?;
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .map_err(|source| ServerError::Bind {
                    addr: fallback,
                    source,
                })
        }
    }
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store = ActivityStore::seeded();
    let activity_count = store.read(|table| table.len()).await;

    let app = web::app(store, &config.static_dir);
    let listener = bind_listener(&config).await?;
    let bound_addr = listener.local_addr()?;

    info!(
        addr = %bound_addr,
        activities = activity_count,
        static_dir = %config.static_dir.display(),
        "server listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_next_port_when_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        if port == u16::MAX {
            return;
        }

        let config = ServerConfig {
            port,
            ..ServerConfig::default()
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port + 1);
    }

    #[tokio::test]
    async fn bad_host_is_a_config_error() {
        let config = ServerConfig {
            host: "nope nope".to_string(),
            ..ServerConfig::default()
        };
        let err = bind_listener(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
