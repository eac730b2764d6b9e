use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use timetable_server::cache::{CacheConfig, CachedTimetable};
use timetable_server::planner::PlannerConfig;
use timetable_server::store::InMemoryNetwork;
use timetable_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the network fixture, or start empty
    let network = match std::env::var("TIMETABLE_DATA") {
        Ok(path) => match InMemoryNetwork::from_json_file(&path) {
            Ok(network) => {
                tracing::info!(%path, trips = network.trip_count(), "loaded network");
                network
            }
            Err(e) => {
                tracing::error!(%path, error = %e, "failed to load network");
                std::process::exit(1);
            }
        },
        Err(_) => {
            tracing::warn!("TIMETABLE_DATA not set; serving an empty network");
            InMemoryNetwork::new()
        }
    };

    let network = Arc::new(network);
    let timetable = CachedTimetable::new(network.clone(), &CacheConfig::default());
    let state = AppState::new(network, timetable, PlannerConfig::default());

    let app = create_router(state);

    let addr = match bind_addr(std::env::var("TIMETABLE_ADDR").ok().as_deref()) {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "invalid TIMETABLE_ADDR");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "timetable server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}

/// Bind address from `TIMETABLE_ADDR`, defaulting to localhost:3000.
fn bind_addr(raw: Option<&str>) -> Result<SocketAddr, std::net::AddrParseError> {
    match raw {
        Some(s) => s.parse(),
        None => Ok(SocketAddr::from(([127, 0, 0, 1], 3000))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_defaults_to_localhost() {
        assert_eq!(
            bind_addr(None).unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );
    }

    #[test]
    fn bind_addr_honours_explicit_address() {
        assert_eq!(
            bind_addr(Some("0.0.0.0:8080")).unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[test]
    fn bind_addr_rejects_garbage() {
        assert!(bind_addr(Some("not an address")).is_err());
    }
}
