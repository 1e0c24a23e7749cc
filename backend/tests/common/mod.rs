#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;

use huddle_backend::{api, store::FileStore, AppState};

/// Spin up a real Axum server on a random port. Each test gets its own
/// data file under the OS temp dir, so tests are hermetic and exercise
/// the same flat-file store the binary runs with.
pub async fn setup_test_app() -> SocketAddr {
    let data_path = std::env::temp_dir().join(format!("huddle-test-{}.json", uuid::Uuid::new_v4()));

    let state = AppState {
        store: Arc::new(FileStore::new(data_path)),
        slot_interval_minutes: 30,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Create an event with one 09:00 AM - 11:00 AM block on 2025-01-10.
/// Returns the event JSON.
pub async fn create_test_event(addr: SocketAddr) -> serde_json::Value {
    create_event_with_blocks(
        addr,
        serde_json::json!([
            { "date": "2025-01-10", "start_time": "09:00 AM", "end_time": "11:00 AM" }
        ]),
    )
    .await
}

pub async fn create_event_with_blocks(
    addr: SocketAddr,
    time_blocks: serde_json::Value,
) -> serde_json::Value {
    let resp = http_client()
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "title": "Team Sync",
            "organizer": "Dana",
            "time_blocks": time_blocks,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "event creation should succeed");
    resp.json().await.unwrap()
}

/// Create an invite for the given event. Returns the invite JSON.
pub async fn create_test_invite(addr: SocketAddr, event_id: &str, name: &str) -> serde_json::Value {
    let resp = http_client()
        .post(format!("http://{}/api/invites", addr))
        .json(&serde_json::json!({ "event_id": event_id, "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "invite creation should succeed");
    resp.json().await.unwrap()
}

/// Submit availability for an invite.
pub async fn submit_response(
    addr: SocketAddr,
    event_id: &str,
    invite_id: &str,
    availability: &[&str],
) -> reqwest::Response {
    http_client()
        .post(format!("http://{}/api/respond", addr))
        .json(&serde_json::json!({
            "event_id": event_id,
            "invite_id": invite_id,
            "availability": availability,
        }))
        .send()
        .await
        .unwrap()
}

/// Fetch the aggregated availability view for an event.
pub async fn fetch_availability(addr: SocketAddr, event_id: &str) -> serde_json::Value {
    let resp = http_client()
        .get(format!("http://{}/api/events/{}/availability", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "availability fetch should succeed");
    resp.json().await.unwrap()
}
