//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Transport
pub use crate::{BlogHttpClient, BlogHttpClientBuilder};

// High level actors
// Entrypoint façade owning transport and store.
pub use crate::Blogkit;
// Unauthenticated content reads.
pub use crate::Feed;
// Authenticated identity; comment and post creation.
pub use crate::Session;
// Device-local likes, favorites, and token persistence.
pub use crate::InteractionStore;

// Data types
pub use crate::{Comment, LikeState, NewComment, Post, PostWithCounts, User};
