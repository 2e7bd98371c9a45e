//! Test helpers for live integration tests
//!
//! Spawns a real server against PostgreSQL and wraps a `reqwest` client
//! around it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use snippets_api::{create_app, create_app_state};
use snippets_common::{AppConfig, BootstrapStaffConfig, PaginationConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::app::test_app_config;
use crate::fixtures::unique_username;

/// Password of the staff account every live server bootstraps
pub const STAFF_PASSWORD: &str = "staff-password-123";

/// How a request authenticates
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Bearer(&'a str),
    Token(&'a str),
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Staff account created at startup
    pub staff_username: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let staff_username = config
            .bootstrap
            .as_ref()
            .map(|b| b.username.clone())
            .unwrap_or_default();

        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            staff_username,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(&self, request: RequestBuilder, auth: Auth<'_>) -> Result<Response> {
        let request = match auth {
            Auth::None => request,
            Auth::Bearer(token) => request.bearer_auth(token),
            Auth::Token(key) => request.header("Authorization", format!("Token {key}")),
        };
        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str, auth: Auth<'_>) -> Result<Response> {
        self.send(self.client.get(self.url(path)), auth).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, auth: Auth<'_>, body: &T) -> Result<Response> {
        self.send(self.client.post(self.url(path)).json(body), auth).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, auth: Auth<'_>, body: &T) -> Result<Response> {
        self.send(self.client.put(self.url(path)).json(body), auth).await
    }

    pub async fn patch<T: Serialize>(&self, path: &str, auth: Auth<'_>, body: &T) -> Result<Response> {
        self.send(self.client.patch(self.url(path)).json(body), auth).await
    }

    pub async fn delete(&self, path: &str, auth: Auth<'_>) -> Result<Response> {
        self.send(self.client.delete(self.url(path)), auth).await
    }

    /// Obtain an access token for the bootstrapped staff account
    pub async fn staff_token(&self) -> Result<String> {
        self.access_token(&self.staff_username, STAFF_PASSWORD).await
    }

    /// Exchange credentials for an access token
    pub async fn access_token(&self, username: &str, password: &str) -> Result<String> {
        let body = crate::fixtures::Credentials::new(username, password);
        let response = self.post("/api/token/", Auth::None, &body).await?;
        let pair: crate::fixtures::TokenPairBody = assert_json(response, StatusCode::OK).await?;
        Ok(pair.access_token)
    }
}

/// Create a test configuration
///
/// Database URL and JWT secret come from the environment; a fresh staff
/// account is bootstrapped for every server.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = test_app_config(PaginationConfig::default());
    config.database.url = std::env::var("DATABASE_URL")?;
    config.database.max_connections = 5;
    config.database.run_migrations = true;
    config.database.migrations_dir =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../crates/snippets-db/migrations").to_string();
    config.jwt.secret = std::env::var("JWT_SECRET")?;
    config.bootstrap = Some(BootstrapStaffConfig {
        username: unique_username("staff"),
        password: STAFF_PASSWORD.to_string(),
        email: None,
    });

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
