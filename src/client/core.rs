use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::errors::BuildError;

const DEFAULT_USER_AGENT: &str = concat!("blogkit", "@", env!("CARGO_PKG_VERSION"),);

/// Default remote endpoint when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configures a [`BlogHttpClient`] before construction.
///
/// Customize the base URL, request timeout, and user-agent. Most code obtains
/// this via [`BlogHttpClient::builder()`], which simply returns
/// `BlogHttpClientBuilder::default()`.
///
/// # Defaults
/// - Base URL: [`DEFAULT_BASE_URL`]
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `blogkit@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use blogkit::BlogHttpClient;
/// let client = BlogHttpClient::builder()
///     .base_url("https://api.example.com")
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, blogkit::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BlogHttpClientBuilder {
    base_url: Option<String>,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl BlogHttpClientBuilder {
    /// Point the client at a different API root.
    ///
    /// Accepts any absolute URL; a trailing slash is not required.
    pub fn base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default `blogkit@<version>`.
    /// Enables app-level telemetry.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build a [`BlogHttpClient`].
    pub fn build(&self) -> Result<BlogHttpClient, BuildError> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                &format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT,
        };

        let mut http_builder = reqwest::ClientBuilder::new().user_agent(user_agent);

        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(BlogHttpClient {
            http: http_builder.build()?,
            base_url,
        })
    }
}

/// Transport client for the blog REST API.
///
/// `BlogHttpClient` is the low-level, stateless engine the higher-level
/// actors ([`crate::Feed`], [`crate::Session`]) are built on. It owns one
/// reqwest HTTP client plus the parsed API base URL, and knows how to turn a
/// relative API path into a request builder.
///
/// ### What it *doesn’t* do
/// - It is **not** session/identity aware. No bearer headers, no per-user
///   scoping. For authenticated flows use [`crate::Session`].
///
/// ### When to use
/// - You want direct control over the transport (power users, tests).
///
/// For most apps, prefer the [`crate::Blogkit`] façade and the actors it
/// constructs.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BlogHttpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
}

impl BlogHttpClient {
    /// Creates a client pointed at the default public API.
    pub fn new() -> Result<BlogHttpClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating a [`BlogHttpClient`].
    pub fn builder() -> BlogHttpClientBuilder {
        BlogHttpClientBuilder::default()
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request for an API path relative to the base URL.
    ///
    /// The path may start with `/`; it is joined onto the base URL's origin.
    pub(crate) fn request(&self, method: Method, path: &str) -> crate::Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        Ok(self.http.request(method, url))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_base_url_parses() {
        let client = BlogHttpClient::new().unwrap();
        assert_eq!(client.base_url().host_str(), Some("jsonplaceholder.typicode.com"));
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = BlogHttpClient::builder().base_url("not-a-url").build();
        assert!(matches!(result, Err(BuildError::BaseUrl(_))));
    }

    #[test]
    fn joins_paths_onto_base() {
        let client = BlogHttpClient::builder()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();
        let url = client.base_url().join("/posts/1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/posts/1");
    }
}
