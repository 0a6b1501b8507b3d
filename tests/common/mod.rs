//! Shared helpers for the API integration tests
//!
//! Each test boots the real router on an ephemeral port, pointed at an
//! httpmock server standing in for the hosted store.

use serde_json::{json, Value};

use pingcrm::config::{HttpServerConfig, SupabaseConfig};
use pingcrm::http_server::HttpServer;
use pingcrm::store::StoreClient;

/// Serve the full app against the given store URL; returns the base URL.
pub async fn spawn_app(store_url: &str) -> String {
    let config = SupabaseConfig::new(store_url, "test-key", None).unwrap();
    let store = StoreClient::new(&config).unwrap();
    let router = HttpServer::build_router(&HttpServerConfig::default(), store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A company row as the store would return it
pub fn company_row(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "phone": null,
        "address": null,
        "city": null,
        "state": null,
        "country": null,
        "postal_code": null,
        "created_at": "2024-04-09T15:00:00+00:00",
        "updated_at": "2024-04-09T15:00:00+00:00"
    })
}

/// A contact row as the store would return it
pub fn contact_row(id: i64, name: &str, company_id: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "phone": "555-0100",
        "city": "Oslo",
        "company_id": company_id,
        "created_at": "2024-04-09T15:00:00+00:00",
        "updated_at": "2024-04-09T15:00:00+00:00"
    })
}
