//! Session credential.
//!
//! The app's login flow obtains a bearer token and hands it to the client,
//! either at build time or through `client.auth().set_token()`. The token is
//! held privately by the HTTP layer and never exposed again. Authenticated
//! endpoints fail before sending when no token is set.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::UserId;
use serde::Deserialize;

/// `GET user/`: the id of the user the token belongs to.
#[derive(Deserialize, Debug, Clone)]
pub struct UserResponse {
    #[serde(rename = "userID")]
    pub user_id: UserId,
}
