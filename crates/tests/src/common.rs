use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use app::client::SubmitClient;
use app::config::ContactConfig;

/// Bodies accepted by a receiver, in arrival order.
pub type ReceivedBodies = Arc<Mutex<Vec<Value>>>;

/// Spawn a local receiver standing in for the remote contact endpoint.
///
/// Answers every POST with `status` and records the JSON bodies it was
/// given. Returns the URL to point a client at, plus the record.
pub async fn spawn_receiver(status: StatusCode) -> (String, ReceivedBodies) {
    let received: ReceivedBodies = Arc::new(Mutex::new(Vec::new()));
    let record = received.clone();

    let router = Router::new().route(
        "/contact",
        post(move |Json(body): Json<Value>| {
            let record = record.clone();
            async move {
                record.lock().unwrap().push(body);
                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind receiver");
    let addr = listener.local_addr().expect("receiver address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve receiver");
    });

    (format!("http://{addr}/contact"), received)
}

/// Client pointed at `endpoint`, with a short timeout so failures surface
/// quickly in tests.
pub fn client_for(endpoint: &str) -> SubmitClient {
    SubmitClient::new(&ContactConfig {
        endpoint: endpoint.to_string(),
        timeout: Duration::from_secs(5),
    })
}
