//! Low-level HTTP client — `StorefrontHttp`.
//!
//! Sends [`Endpoint`]s and returns raw wire types (conversion to domain types
//! happens in the sub-clients). Owns the authenticated vs. public distinction:
//! authenticated endpoints get a bearer header, or fail before anything is sent
//! when no token is set.

use crate::error::{extract_message, HttpError};
use crate::http::endpoint::{Access, Endpoint, RequestDescriptor};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the storefront REST API.
pub struct StorefrontHttp {
    base_url: String,
    client: Client,
    /// Bearer token supplied by the app's auth layer. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl StorefrontHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            auth_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Seed the bearer token at construction time.
    pub(crate) fn with_auth_token(self, token: Option<String>) -> Self {
        Self {
            auth_token: Arc::new(RwLock::new(token)),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    /// Build the fully-qualified request for an endpoint without sending it.
    pub fn describe(
        &self,
        endpoint: &Endpoint,
        body: Option<serde_json::Value>,
    ) -> RequestDescriptor {
        RequestDescriptor {
            method: endpoint.method(),
            url: format!("{}/{}", self.base_url, endpoint.path()),
            access: endpoint.access(),
            body,
        }
    }

    // ── Typed request helpers ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, HttpError> {
        self.request(endpoint, None::<&()>).await
    }

    /// Send and decode a JSON response body.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let (status, text) = self.send(endpoint, body).await?;
        serde_json::from_str(&text).map_err(|e| HttpError::UnexpectedBody {
            status,
            message: e.to_string(),
        })
    }

    /// Like [`request`](Self::request), but an empty body decodes to
    /// `T::default()`.
    pub(crate) async fn request_or_default<T: DeserializeOwned + Default, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let (status, text) = self.send(endpoint, body).await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| HttpError::UnexpectedBody {
            status,
            message: e.to_string(),
        })
    }

    /// Send and ignore the response body (action endpoints answer with an
    /// empty body, a bare status number, or 204).
    pub(crate) async fn request_unit<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<(), HttpError> {
        self.send(endpoint, body).await.map(|_| ())
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn send<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<(u16, String), HttpError> {
        let descriptor = self.describe(endpoint, None);
        let mut req = self
            .client
            .request(descriptor.method.clone(), &descriptor.url);

        if descriptor.access == Access::Authenticated {
            let token = self.auth_token.read().await.clone();
            match token {
                Some(token) => req = req.bearer_auth(token),
                None => {
                    tracing::debug!(url = %descriptor.url, "No credential, request not sent");
                    return Err(HttpError::MissingCredential(endpoint.path()));
                }
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %descriptor.method, url = %descriptor.url, "Sending request");

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status().as_u16();
        let body_text = resp.text().await?;

        if (200..300).contains(&status) {
            return Ok((status, body_text));
        }

        tracing::debug!(status, url = %descriptor.url, "Request failed");

        match status {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(extract_message(&body_text))),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(extract_message(&body_text))),
            _ => Err(HttpError::ServerError {
                status,
                body: extract_message(&body_text),
            }),
        }
    }
}

impl Clone for StorefrontHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
