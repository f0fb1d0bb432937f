//! Integration tests for the superadmin dashboard.
//!
//! Each test spawns the admin router and a stub of the external backend on
//! ephemeral ports, then drives the admin over HTTP with a cookie-keeping
//! `reqwest` client, the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p superadmin-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use reqwest::Client;
use serde_json::Value;
use superadmin_admin::config::AdminConfig;
use superadmin_admin::state::AppState;
use superadmin_core::{Customer, Shop};

/// How the stub backend behaves.
#[derive(Debug, Clone)]
pub struct StubConfig {
    /// Status answered to `POST /customer`.
    pub create_status: StatusCode,
    /// Delay before answering `POST /customer`.
    pub create_delay: Duration,
    /// Body of `GET /getAllCustomers`.
    pub customers: Vec<Customer>,
    /// Body of `GET /getAllShops`.
    pub shops: Vec<Shop>,
    /// Status answered to the list endpoints.
    pub list_status: StatusCode,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            create_status: StatusCode::CREATED,
            create_delay: Duration::ZERO,
            customers: superadmin_admin::sources::fixture_customers(),
            shops: superadmin_admin::sources::fixture_shops(),
            list_status: StatusCode::OK,
        }
    }
}

#[derive(Clone)]
struct StubState {
    config: Arc<StubConfig>,
    created: Arc<Mutex<Vec<Value>>>,
    list_calls: Arc<Mutex<usize>>,
}

/// Running stub of the external backend.
pub struct StubBackend {
    pub addr: SocketAddr,
    state: StubState,
}

impl StubBackend {
    /// Serve `config` on an ephemeral port.
    pub async fn spawn(config: StubConfig) -> Self {
        let state = StubState {
            config: Arc::new(config),
            created: Arc::default(),
            list_calls: Arc::default(),
        };

        let app = Router::new()
            .route("/customer", post(stub_create))
            .route("/getAllCustomers", get(stub_customers))
            .route("/getAllShops", get(stub_shops))
            .with_state(state.clone());

        let addr = serve(app).await;
        Self { addr, state }
    }

    /// Base URL of the stub.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON bodies received by `POST /customer`, in arrival order.
    #[must_use]
    pub fn created(&self) -> Vec<Value> {
        self.state
            .created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of list requests served.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        *self
            .state
            .list_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn stub_create(State(state): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    state
        .created
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(body);
    tokio::time::sleep(state.config.create_delay).await;
    state.config.create_status
}

async fn stub_customers(State(state): State<StubState>) -> (StatusCode, Json<Vec<Customer>>) {
    *state
        .list_calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += 1;
    (state.config.list_status, Json(state.config.customers.clone()))
}

async fn stub_shops(State(state): State<StubState>) -> (StatusCode, Json<Vec<Shop>>) {
    *state
        .list_calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += 1;
    (state.config.list_status, Json(state.config.shops.clone()))
}

/// A running admin dashboard plus its stub backend.
pub struct TestContext {
    /// Browser-like client: keeps cookies, follows redirects.
    pub client: Client,
    pub admin_url: String,
    pub backend: StubBackend,
}

impl TestContext {
    /// Admin on fixture data, backend stub with default behavior.
    pub async fn new() -> Self {
        Self::with(StubConfig::default(), &[]).await
    }

    /// Admin configured by `env` (on top of a `BACKEND_URL` pointing at the
    /// stub) talking to a stub configured by `stub`.
    pub async fn with(stub: StubConfig, env: &[(&str, &str)]) -> Self {
        let backend = StubBackend::spawn(stub).await;
        let admin_url = spawn_admin(&backend.url(), env).await;

        Self {
            client: browser(),
            admin_url,
            backend,
        }
    }

    /// Absolute admin URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.admin_url)
    }

    /// GET `path` and return status and body.
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET");
        let status = StatusCode::from_u16(resp.status().as_u16()).expect("valid status");
        (status, resp.text().await.expect("Failed to read response"))
    }

    /// POST a form to `path` and return status and body.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to send POST");
        let status = StatusCode::from_u16(resp.status().as_u16()).expect("valid status");
        (status, resp.text().await.expect("Failed to read response"))
    }
}

/// Spawn the admin router configured by `env` and return its base URL.
pub async fn spawn_admin(backend_url: &str, env: &[(&str, &str)]) -> String {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("BACKEND_URL".to_string(), backend_url.to_string());
    for (key, value) in env {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    let config = AdminConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid config");
    let state = AppState::new(config).expect("Failed to create application state");
    let addr = serve(superadmin_admin::app(state)).await;
    format!("http://{addr}")
}

/// A fresh client with its own cookie jar.
#[must_use]
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    listener.local_addr().expect("local addr")
}

/// Value of the hidden `form_id` input in a rendered add-customer form.
#[must_use]
pub fn form_id(body: &str) -> String {
    let marker = r#"name="form_id" value=""#;
    let start = body.find(marker).expect("form_id input present") + marker.len();
    body.get(start..)
        .and_then(|rest| rest.split('"').next())
        .expect("form_id value")
        .to_string()
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });
    addr
}
