//! Shared helpers for store integration tests.

use axum::Router;
use serde_json::Value;

/// Serve the given router on `127.0.0.1:0` and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server error");
    });

    format!("http://{addr}")
}

/// Wrap a payload in the server's `{ "code": 200, "data": ... }` envelope.
pub fn enveloped(data: Value) -> Value {
    serde_json::json!({"code": 200, "data": data, "timestamp": "2024-05-01T10:00:05Z"})
}
