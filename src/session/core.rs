use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::claims::decode_user_id;
use crate::client::core::BlogHttpClient;
use crate::errors::Result;
use crate::store::core::InteractionStore;
use crate::types::User;
use crate::util::IntoApiResult;

/// Path of the credential sign-in endpoint.
pub(crate) const SIGN_IN_PATH: &str = "/auth/login";
/// Path of the registration endpoint. Registration doubles as sign-in: the
/// response carries the same `{access_token}` shape.
pub(crate) const SIGN_UP_PATH: &str = "/users";

/// Shape of a successful authentication response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// An authenticated identity: the bearer token plus the fetched user profile.
///
/// A `Session` only exists after a successful [`Session::sign_in`],
/// [`Session::sign_up`], or [`Session::restore`] — authenticated operations
/// are methods on this type, so calling them without a live session is a
/// compile error rather than a runtime one. Signing out consumes the session.
///
/// The bearer token is the source of truth: the user id is decoded from it,
/// and the [`User`] is fetched from that id. The token is persisted in the
/// [`InteractionStore`] so the session survives restarts via
/// [`Session::restore`].
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) client: BlogHttpClient,
    pub(crate) store: InteractionStore,
    pub(crate) token: String,
    pub(crate) user: User,
}

impl Session {
    /// Sign in with credentials.
    ///
    /// POSTs to the sign-in endpoint; on success persists the returned
    /// bearer token, decodes it for the user id, fetches the [`User`], and
    /// returns the authenticated session. On a non-2xx response the error is
    /// returned and nothing is persisted.
    pub async fn sign_in(
        client: &BlogHttpClient,
        store: &InteractionStore,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        let response = client
            .request(Method::POST, SIGN_IN_PATH)?
            .json(&SignInRequest { email, password })
            .send()
            .await?
            .api_result()
            .await?;
        let TokenResponse { access_token } = response.json().await?;

        store.set_token(&access_token)?;
        Self::from_token(client.clone(), store.clone(), access_token).await
    }

    /// Register a new account and sign in with it.
    ///
    /// The registration endpoint returns the same `{access_token}` shape as
    /// sign-in, so a successful registration is an implicit sign-in. On
    /// failure nothing is persisted.
    pub async fn sign_up(
        client: &BlogHttpClient,
        store: &InteractionStore,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Session> {
        let response = client
            .request(Method::POST, SIGN_UP_PATH)?
            .json(&SignUpRequest {
                username,
                email,
                password,
            })
            .send()
            .await?
            .api_result()
            .await?;
        let TokenResponse { access_token } = response.json().await?;

        store.set_token(&access_token)?;
        Self::from_token(client.clone(), store.clone(), access_token).await
    }

    /// Rehydrate a session from the token persisted in `store`, if any.
    ///
    /// Returns `Ok(None)` when no token is persisted, or when the token
    /// cannot be decoded or the user cannot be fetched — a stale token never
    /// blocks startup. The failure is logged and the token left in place.
    pub async fn restore(
        client: &BlogHttpClient,
        store: &InteractionStore,
    ) -> Result<Option<Session>> {
        let Some(token) = store.token() else {
            return Ok(None);
        };
        match Self::from_token(client.clone(), store.clone(), token).await {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(%err, "failed to restore persisted session, staying anonymous");
                Ok(None)
            }
        }
    }

    /// Decode the token, fetch the user it identifies, and assemble the session.
    async fn from_token(
        client: BlogHttpClient,
        store: InteractionStore,
        token: String,
    ) -> Result<Session> {
        let user_id = decode_user_id(&token)?;

        let response = client
            .request(Method::GET, &format!("/users/{user_id}"))?
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .api_result()
            .await?;
        let mut user: User = response.json().await?;
        // Some deployments omit `username` on the user record; fall back to
        // the display name so callers always have a handle to show.
        if user.username.is_empty() {
            user.username = user.name.clone();
        }

        Ok(Session {
            client,
            store,
            token,
            user,
        })
    }

    /// The authenticated user's profile.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The bearer token backing this session.
    ///
    /// Treat it as a secret; it is persisted on disk with owner-only
    /// permissions and should not be logged.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Sign out: clear the persisted token and drop the session.
    ///
    /// Consumes `self`; there is no failure mode. Clearing the token file is
    /// best-effort and logged if it goes wrong.
    pub fn sign_out(self) {
        self.store.clear_token();
    }
}
