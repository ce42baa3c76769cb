use anyhow::Result;
use postforge_types::{ConfigError, ServerConfig};
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `level` is an `EnvFilter` directive.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

pub fn socket_addr(config: &ServerConfig) -> Result<SocketAddr, ConfigError> {
    let ip: IpAddr = config
        .host
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddress { address: config.host.clone() })?;
    Ok(SocketAddr::new(ip, config.port))
}

pub async fn create_listener(config: &ServerConfig) -> Result<tokio::net::TcpListener> {
    let addr = socket_addr(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🔌 Bound to {}", addr);
    Ok(listener)
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("🛑 Received SIGTERM, initiating graceful shutdown..."),
    }

    info!("⏳ Draining in-flight requests...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_from_config() {
        let config = ServerConfig { port: 8081, ..Default::default() };
        assert_eq!(socket_addr(&config).unwrap().to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn test_hostname_is_rejected() {
        let config = ServerConfig { host: "localhost".to_string(), ..Default::default() };
        assert_eq!(
            socket_addr(&config),
            Err(ConfigError::InvalidBindAddress { address: "localhost".to_string() })
        );
    }
}
