//! Authenticated writes: comment creation and post creation.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Method;
use serde::Serialize;

use super::core::Session;
use crate::errors::{Error, RequestError, Result};
use crate::types::{Comment, NewComment, Post};
use crate::util::IntoApiResult;

/// Post creation goes through the catalog endpoint of the backing service.
pub(crate) const CREATE_POST_PATH: &str = "/products";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCommentPayload<'a> {
    post_id: u64,
    name: &'a str,
    email: &'a str,
    body: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewPostPayload<'a> {
    title: &'a str,
    description: &'a str,
    price: u32,
    category_id: u32,
    images: [String; 1],
}

impl Session {
    /// Post a comment on `post_id`.
    ///
    /// Sends `{postId, name, email, body}` with this session's bearer token
    /// and returns the created comment exactly as the server decoded it.
    /// Nothing is persisted locally.
    pub async fn create_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment> {
        let response = self
            .client
            .request(Method::POST, "/comments")?
            .bearer_auth(&self.token)
            .json(&NewCommentPayload {
                post_id,
                name: &comment.name,
                email: &comment.email,
                body: &comment.body,
            })
            .send()
            .await?
            .api_result()
            .await?;
        Ok(response.json().await?)
    }

    /// Create a new post with a title and description.
    ///
    /// The rest of the payload is fixed by the backing service's contract:
    /// `price: 0`, `categoryId: 1`, and a single generated placeholder image
    /// URL seeded with the current time.
    pub async fn create_post(&self, title: &str, description: &str) -> Result<Post> {
        let response = self
            .client
            .request(Method::POST, CREATE_POST_PATH)?
            .bearer_auth(&self.token)
            .json(&NewPostPayload {
                title,
                description,
                price: 0,
                category_id: 1,
                images: [placeholder_image_url(unix_millis())],
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from(RequestError::Server {
                status: response.status(),
                message: "failed to create post".into(),
            }));
        }
        Ok(response.json().await?)
    }
}

/// A deterministic placeholder image URL for a given seed.
fn placeholder_image_url(seed: u128) -> String {
    format!("https://picsum.photos/seed/{seed}/800/400")
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
