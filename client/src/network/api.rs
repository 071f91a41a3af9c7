//! Admin API Client
//!
//! Wraps `reqwest` with the base URL, JSON content type and bearer token every
//! admin call needs, and turns non-success responses into [`ApiError`]s that
//! carry the server's message.

use dash_common::{ErrorBody, Validate};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::ApiError;
use crate::session::Session;

/// Whether a request carries the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Bearer,
    Anonymous,
}

/// HTTP client for the admin API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    session: Session,
    verification_update_path: Option<String>,
}

impl ApiClient {
    /// Build a client for the configured backend, authenticating with `session`.
    pub fn new(config: &Config, session: Session) -> Result<Self, ApiError> {
        let http = HttpClient::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            verification_update_path: config.verification_update_path.clone(),
        })
    }

    /// The session this client authenticates with.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn verification_update_path(&self) -> Option<&str> {
        self.verification_update_path.as_deref()
    }

    /// Headers for an authenticated request. The token is read from the
    /// session now, not cached.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        self.headers_for(Auth::Bearer)
    }

    fn headers_for(&self, auth: Auth) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if auth == Auth::Bearer {
            if let Some(token) = self.session.token() {
                match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => error!("Stored token is not a valid header value; sending without it"),
                }
            }
        }

        headers
    }

    pub(crate) async fn get<T>(&self, path: &str, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        self.execute::<T, ()>(Method::GET, path, None, fallback, Auth::Bearer)
            .await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, path, Some(body), fallback, Auth::Bearer)
            .await
    }

    /// POST without the bearer token (login).
    pub(crate) async fn post_anonymous<T, B>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body), fallback, Auth::Anonymous)
            .await
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
        auth: Auth,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "Sending admin API request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers_for(auth));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(%method, path, "Admin API request failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!(%method, path, "Failed to read response body: {}", e);
            ApiError::Transport(e)
        })?;

        if !status.is_success() {
            let message = server_message(&bytes).unwrap_or_else(|| fallback.to_string());
            error!(
                %method,
                path,
                status = status.as_u16(),
                "Admin API returned an error: {}",
                message
            );

            if status == StatusCode::UNAUTHORIZED && auth == Auth::Bearer {
                self.session.expire(&message);
            }

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = dash_common::parse(path, &bytes).map_err(|e| {
            error!(%method, path, "Response did not match schema: {}", e);
            e
        })?;
        debug!(%method, path, status = status.as_u16(), "Admin API request succeeded");
        Ok(parsed)
    }
}

/// The `message` field of an error body, when there is a non-empty one.
fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
