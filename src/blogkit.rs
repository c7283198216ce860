//! High-level façade for the `blogkit` crate.
//!
//! ## Mental model
//! - `Blogkit` - your entrypoint/handle to the SDK. Owns a [`BlogHttpClient`]
//!   and an [`InteractionStore`].
//! - `Feed` - unauthenticated content reads with client-side enrichment.
//! - `Session` - authenticated, “as me” API; comment and post creation.
//! - `InteractionStore` - device-local likes, favorites, and the token.
//!
//! There is no ambient session: identity is a value you hold and pass. The
//! façade is created once at application start and handed to whatever needs
//! it.
//!
//! ## Quick starts
//! ### 1) Browse the feed (no identity)
//! ```no_run
//! use blogkit::Blogkit;
//!
//! # async fn run() -> blogkit::Result<()> {
//! let blogkit = Blogkit::new()?;
//! let posts = blogkit.feed().posts(Some("rust")).await?;
//! # Ok(()) }
//! ```
//!
//! ### 2) Sign in and comment
//! ```no_run
//! use blogkit::{Blogkit, NewComment};
//!
//! # async fn run() -> blogkit::Result<()> {
//! let blogkit = Blogkit::new()?;
//! let session = blogkit.sign_in("me@example.com", "hunter2").await?;
//! session.create_comment(1, &NewComment {
//!     name: "Me".into(),
//!     email: "me@example.com".into(),
//!     body: "Great post!".into(),
//! }).await?;
//! # Ok(()) }
//! ```
//!
//! ### 3) Pick up a previous session on startup
//! ```no_run
//! use blogkit::Blogkit;
//!
//! # async fn run() -> blogkit::Result<()> {
//! let blogkit = Blogkit::new()?;
//! match blogkit.restore_session().await? {
//!     Some(session) => println!("welcome back, {}", session.user().username),
//!     None => println!("signed out"),
//! }
//! # Ok(()) }
//! ```

use crate::client::core::BlogHttpClient;
use crate::errors::Result;
use crate::feed::core::Feed;
use crate::session::core::Session;
use crate::store::core::InteractionStore;

/// High-level façade. Owns the transport and the local store, and constructs
/// the main actors.
#[derive(Clone, Debug)]
pub struct Blogkit {
    client: BlogHttpClient,
    store: InteractionStore,
}

impl Blogkit {
    /// Construct with defaults: the public API endpoint and the platform
    /// data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: BlogHttpClient::new()?,
            store: InteractionStore::new()?,
        })
    }

    /// Construct from already-configured parts.
    pub fn with_parts(client: BlogHttpClient, store: InteractionStore) -> Self {
        Self { client, store }
    }

    /// Unauthenticated content reads using this façade's transport and store.
    pub fn feed(&self) -> Feed {
        Feed::new(self.client.clone(), self.store.clone())
    }

    /// The device-local interaction store (likes, favorites, token).
    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    /// Sign in with credentials. See [`Session::sign_in`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        Session::sign_in(&self.client, &self.store, email, password).await
    }

    /// Register a new account and sign in with it. See [`Session::sign_up`].
    pub async fn sign_up(&self, email: &str, password: &str, username: &str) -> Result<Session> {
        Session::sign_up(&self.client, &self.store, email, password, username).await
    }

    /// Rehydrate the session persisted on this device, if any.
    /// See [`Session::restore`].
    pub async fn restore_session(&self) -> Result<Option<Session>> {
        Session::restore(&self.client, &self.store).await
    }

    /// Access the underlying transport (advanced use).
    #[inline]
    pub fn client(&self) -> &BlogHttpClient {
        &self.client
    }
}
