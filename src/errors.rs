//! Unified error types for the `blogkit` crate.
//!
//! This module centralizes all failures that can occur while using the SDK
//! and provides a single top-level [`Error`] enum plus the convenient
//! [`Result`] alias. Errors from lower layers (`reqwest`, `jsonwebtoken`,
//! URL parsing, file I/O) are mapped into structured variants so callers can
//! handle them precisely.

use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::BlogHttpClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL was not a valid absolute URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Request`] — HTTP transport/server issues
/// - [`Error::Authentication`] — sign-in/sign-up/token issues
/// - [`Error::Store`] — local interaction store I/O issues
/// - [`Error::Parse`] — URL parsing failures
/// - [`Error::Build`] — construction of the client failed
///
/// Most lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request/response failed (transport or server).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// Authentication flow failed (credentials, token decoding, validation).
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// Writing to the local interaction store failed.
    #[error("Local store error: {0}")]
    Store(#[from] StoreError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed (reqwest or base-URL configuration).
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

// --- Consolidated Authentication Error ---

/// Errors originating from the session lifecycle (credentials, tokens).
#[derive(Debug, Error)]
pub enum AuthError {
    /// The persisted or returned bearer token could not be decoded.
    #[error("Failed to decode bearer token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// The decoded token carried no usable subject claim.
    #[error("Bearer token has no usable subject claim")]
    MissingSubject,
}

// --- Consolidated Request Error ---

/// Transport and server-side HTTP errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-success status. Includes status and body message.
    #[error("Server responded with an error: {status} - {message}")]
    Server {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// Short description or the server response body captured for context.
        message: String,
    },
}

// --- Local Store Error ---

/// Failures while persisting local interaction state.
///
/// Reads never produce this: absent or malformed files read back as empty
/// state. Only writes surface their I/O errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem write or directory creation failed.
    #[error("I/O failure in the interaction store: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing state for persistence failed.
    #[error("Failed to serialize interaction state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized `Result` type for `blogkit` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

// Auth Errors
impl_from_for_error!(jsonwebtoken::errors::Error, Error::Authentication);

// Request Errors
impl_from_for_error!(reqwest::Error, Error::Request);

// Store Errors
impl_from_for_error!(std::io::Error, Error::Store);
