//! Common test utilities and fixtures.
//!
//! This module provides a router-level test harness with a temporary
//! durable slot, plus helpers for driving the action dispatch endpoint.

#![cfg(feature = "server")]

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use archive_store::server::{router, AppState, Config, StorageConfig};

/// Test application wrapper that manages a temporary store.
pub struct TestApp {
    pub server: TestServer,
    temp_dir: TempDir, // Keep alive for test duration
}

impl TestApp {
    /// Create a new test application with a fresh temporary store.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_dir(TempDir::new()?)
    }

    /// Create a test application whose store lives under the given
    /// directory, so a later instance can reopen the same state.
    pub fn with_dir(temp_dir: TempDir) -> anyhow::Result<Self> {
        let store_path = temp_dir.path().join("store");
        let config = Config {
            storage: StorageConfig {
                path: store_path.to_string_lossy().into(),
                ephemeral: false,
            },
            ..Config::default()
        };
        let state = AppState::from_config(&config)?;
        let server = TestServer::new(router(state))?;
        Ok(Self { server, temp_dir })
    }

    /// Shut the app down and hand back its directory for a restart.
    pub fn into_dir(self) -> TempDir {
        let Self { server, temp_dir } = self;
        drop(server);
        temp_dir
    }

    /// POST an action to /api/data and return the parsed response body.
    pub async fn dispatch(&self, action: &str, payload: Value) -> Value {
        let response = self
            .server
            .post("/api/data")
            .json(&json!({ "action": action, "payload": payload }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// GET /api/data and return the parsed snapshot.
    pub async fn snapshot(&self) -> Value {
        let response = self.server.get("/api/data").await;
        response.assert_status_ok();
        response.json()
    }

    pub async fn record_visit(&self, ip: &str, path: &str, user_agent: &str) -> Value {
        self.dispatch(
            "recordVisit",
            json!({ "ip": ip, "path": path, "userAgent": user_agent }),
        )
        .await
    }

    pub async fn freeze(&self, ip: &str) -> Value {
        self.dispatch("freeze", json!({ "ip": ip })).await
    }

    pub async fn unfreeze(&self, ip: &str) -> Value {
        self.dispatch("unfreeze", json!({ "ip": ip })).await
    }
}

/// Statuses of all visits in a snapshot, newest first.
pub fn visit_statuses(snapshot: &Value) -> Vec<String> {
    snapshot["visits"]
        .as_array()
        .map(|visits| {
            visits
                .iter()
                .filter_map(|v| v["status"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
