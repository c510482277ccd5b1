#![allow(dead_code)]

use promptcal::components::{CalendarClient, ExtractionClient};
use promptcal::config::Config;
use promptcal::web::{self, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use wiremock::MockServer;

/// Test server handle: base URL plus the token file backing it
pub struct TestApp {
    pub address: String,
    pub token_path: std::path::PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.token_path);
    }
}

/// Write a token file and spawn the app on an ephemeral port, pointed at the
/// two mock upstreams
pub async fn spawn_app(google: &MockServer, openai: &MockServer) -> TestApp {
    spawn_app_with_token(google, openai, chrono::Utc::now().timestamp() + 3600).await
}

pub async fn spawn_app_with_token(
    google: &MockServer,
    openai: &MockServer,
    token_expires_at: i64,
) -> TestApp {
    let token_path =
        std::env::temp_dir().join(format!("promptcal-test-{}.json", uuid::Uuid::new_v4()));
    let token = json!({
        "access_token": "test-access-token",
        "refresh_token": "test-refresh-token",
        "expires_at": token_expires_at,
    });
    std::fs::write(&token_path, token.to_string()).expect("Failed to write test token file");

    let config = Config {
        google_client_id: "test-client-id".to_string(),
        google_client_secret: "test-client-secret".to_string(),
        google_calendar_id: "primary".to_string(),
        openai_api_key: "test-openai-key".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        token_path: token_path.to_string_lossy().to_string(),
        assets_dir: "assets".to_string(),
        port: 0,
        calendar_api_base: google.uri(),
        token_url: format!("{}/token", google.uri()),
        openai_api_base: openai.uri(),
    };
    let config = Arc::new(RwLock::new(config));

    let state = AppState {
        calendar: CalendarClient::new(Arc::clone(&config)),
        extractor: ExtractionClient::new(Arc::clone(&config)),
    };
    let app = web::router(state, "assets");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        token_path,
    }
}

/// OpenAI chat-completions body carrying a forced function call
pub fn function_call_response(name: &str, arguments: Value) -> Value {
    json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "function_call": {
                    "name": name,
                    "arguments": arguments.to_string(),
                }
            }
        }]
    })
}

/// A stored event in Google Calendar wire format
pub fn calendar_event(id: &str, summary: &str, time_zone: &str, attendees: &[&str]) -> Value {
    json!({
        "id": id,
        "summary": summary,
        "start": {
            "dateTime": "2025-06-01T10:00:00-08:00",
            "timeZone": time_zone,
        },
        "end": {
            "dateTime": "2025-06-01T11:00:00-08:00",
            "timeZone": time_zone,
        },
        "attendees": attendees.iter().map(|email| json!({ "email": email })).collect::<Vec<_>>(),
    })
}
