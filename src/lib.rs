#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod blogkit;
mod client;
pub mod errors;
mod feed;
mod session;
mod store;
mod types;
mod util;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{BlogHttpClient, BlogHttpClientBuilder, DEFAULT_BASE_URL};
// High level actors
pub use blogkit::Blogkit;
pub use feed::core::Feed;
pub use session::core::Session;
pub use store::core::InteractionStore;

// Errors
pub use errors::{AuthError, BuildError, Error, RequestError, Result, StoreError};

// Data types
pub use types::{Comment, LikeState, NewComment, Post, PostWithCounts, User};

// Re-exports
pub use reqwest::{Method, StatusCode};
