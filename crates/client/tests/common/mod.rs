//! Shared helpers for adapter integration tests.
//!
//! Binds a stub Autodocs server on an ephemeral local port and returns
//! the base URL to point the client at. Handlers are defined per test
//! file; this module only owns the serving plumbing and a few canned
//! payloads.

use axum::Router;

/// Serve the given router on `127.0.0.1:0` and return its base URL.
///
/// The server task runs until the test process exits; tests never need a
/// clean shutdown.
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

/// A canned enveloped document list, using the server's `"pdf"` wire name
/// for the payload field.
pub fn documents_payload() -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "data": [{
            "id": "4f7f3c2e",
            "documentName": "invoice-march",
            "description": "March invoice run",
            "templateId": "tpl-9",
            "pdf": "JVBERi0=",
            "refNumber": "D250831-0042",
            "created_at": "2024-05-01T10:00:00Z",
        }],
        "timestamp": "2024-05-01T10:00:05Z",
    })
}
