//! Auth sub-client — token handoff, logout, current user id.

use crate::auth::UserResponse;
use crate::client::StorefrontClient;
use crate::error::SdkError;
use crate::http::Endpoint;
use crate::shared::UserId;

/// Sub-client for the session credential.
pub struct Auth<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Auth<'a> {
    /// Use `token` for every authenticated request from now on.
    ///
    /// Drops the cached user id, since the new token may belong to someone else.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.client.http.set_auth_token(Some(token.into())).await;
        *self.client.user_id.write().await = None;
    }

    /// Forget the token and user-scoped caches.
    ///
    /// The cart store keeps its last snapshot; refetching it after logout
    /// fails with `Unauthenticated`.
    pub async fn clear(&self) {
        self.client.http.clear_auth_token().await;
        *self.client.user_id.write().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_auth_token().await
    }

    /// The current user's id. Fetched once per token.
    pub async fn user_id(&self) -> Result<UserId, SdkError> {
        if let Some(id) = self.client.user_id.read().await.as_ref() {
            return Ok(id.clone());
        }

        let resp: UserResponse = self.client.http.get(&Endpoint::User).await?;
        tracing::debug!(user = %resp.user_id, "Resolved current user");
        *self.client.user_id.write().await = Some(resp.user_id.clone());
        Ok(resp.user_id)
    }
}
