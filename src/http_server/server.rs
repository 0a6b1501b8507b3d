//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! This is the entry point for the PingCRM API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpServerConfig;
use crate::store::StoreClient;

use super::companies_routes::companies_routes;
use super::contacts_routes::contacts_routes;
use super::health_routes::health_routes;
use super::state::ApiState;

/// HTTP server for the PingCRM API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from configuration and a store client
    pub fn new(config: HttpServerConfig, store: StoreClient) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, store: StoreClient) -> Router {
        let state = Arc::new(ApiState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            // Credentialed CORS forbids wildcards; mirror the request instead
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        };

        // Combine all routes
        Router::new()
            // Welcome and health check at root level
            .merge(health_routes())
            // Company routes under /api
            .nest("/api", companies_routes(state.clone()))
            // Contact routes under /api
            .nest("/api", contacts_routes(state))
            // Apply CORS, then request tracing outermost
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        tracing::info!(%addr, "starting PingCRM HTTP server");
        tracing::info!("API endpoints:");
        tracing::info!("  - /api/companies/* - Company CRUD");
        tracing::info!("  - /api/contacts/* - Contact CRUD");
        tracing::info!("  - /health - Health check");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SupabaseConfig;

    fn test_store() -> StoreClient {
        let config =
            SupabaseConfig::new("http://localhost:54321", "test-key", None).unwrap();
        StoreClient::new(&config).unwrap()
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::new(config, test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(HttpServerConfig::default(), test_store());
        let _router = server.router();
        // If we get here, router construction succeeded
    }

    #[test]
    fn test_router_builds_without_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: Vec::new(),
            ..Default::default()
        };
        let server = HttpServer::new(config, test_store());
        let _router = server.router();
    }
}
