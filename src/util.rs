//! Response handling shared by the feed and session actors.

use reqwest::Response;

use crate::errors::{Error, RequestError, Result};

/// Turns HTTP error statuses into structured errors.
///
/// The API signals failure through status codes with a plain-text or JSON
/// body explaining what went wrong; this captures that body so callers see
/// it in the error message.
pub(crate) trait IntoApiResult: Sized {
    /// Pass a 2xx response through unchanged; consume anything else into
    /// [`RequestError::Server`] carrying the status and the response body.
    async fn api_result(self) -> Result<Response>;
}

impl IntoApiResult for Response {
    async fn api_result(self) -> Result<Response> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        // Reading the body consumes the response; an unreadable or empty
        // body degrades to the status line itself.
        let message = match self.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status.to_string(),
        };

        Err(Error::from(RequestError::Server { status, message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    async fn fetch(server: &MockServer, path: &str) -> Response {
        reqwest::get(server.url(path)).await.unwrap()
    }

    #[tokio::test]
    async fn success_passes_the_response_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("fine");
        });

        let response = fetch(&server, "/ok").await.api_result().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "fine");
    }

    #[tokio::test]
    async fn error_status_captures_the_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(503).body("overloaded, come back later");
        });

        let err = fetch(&server, "/boom").await.api_result().await.unwrap_err();
        match err {
            Error::Request(RequestError::Server { status, message }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(message, "overloaded, come back later");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_degrades_to_the_status_line() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });

        let err = fetch(&server, "/gone").await.api_result().await.unwrap_err();
        match err {
            Error::Request(RequestError::Server { status, message }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(message, "404 Not Found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
