use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::core::BlogHttpClient;
use crate::errors::Result;
use crate::store::core::InteractionStore;
use crate::types::{Comment, LikeState, Post, PostWithCounts, User};
use crate::util::IntoApiResult;

/// Unauthenticated content reads: posts, comments, users.
///
/// A `Feed` shares the [`BlogHttpClient`] transport and reads the local
/// [`InteractionStore`] to enrich every post with this device's like state.
/// Nothing is cached: each call re-fetches and re-derives counts from
/// scratch, so staleness is bounded only by call frequency.
///
/// Failure policy: transport errors and non-2xx responses propagate to the
/// caller as-is; there is no retry and no partial result. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Feed {
    pub(crate) client: BlogHttpClient,
    pub(crate) store: InteractionStore,
}

impl Feed {
    /// Build a feed over an existing transport and store.
    pub fn new(client: BlogHttpClient, store: InteractionStore) -> Self {
        Self { client, store }
    }

    /// List all posts, each enriched with `commentsCount`, `likesCount`, and
    /// `isLiked`.
    ///
    /// When `query` is given and non-empty, the result is filtered to posts
    /// whose title contains it case-insensitively. Comment counts are derived
    /// by fetching all comments and counting matches per post; the like set
    /// is read once for the whole listing.
    pub async fn posts(&self, query: Option<&str>) -> Result<Vec<PostWithCounts>> {
        let posts: Vec<Post> = self.get_json("/posts").await?;
        let comments: Vec<Comment> = self.get_json("/comments").await?;
        let likes = self.store.like_state();

        let mut enriched: Vec<PostWithCounts> = posts
            .into_iter()
            .map(|post| {
                let comments_count =
                    comments.iter().filter(|c| c.post_id == post.id).count() as u64;
                with_counts(post, comments_count, &likes)
            })
            .collect();

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            enriched.retain(|p| p.post.title.to_lowercase().contains(&needle));
        }

        Ok(enriched)
    }

    /// Fetch one post by id, enriched the same way as [`Self::posts`].
    pub async fn post(&self, id: u64) -> Result<PostWithCounts> {
        let post: Post = self.get_json(&format!("/posts/{id}")).await?;
        let comments = self.comments(id).await?;
        let likes = self.store.like_state();
        Ok(with_counts(post, comments.len() as u64, &likes))
    }

    /// Fetch the comments of one post. Passthrough, no enrichment.
    pub async fn comments(&self, post_id: u64) -> Result<Vec<Comment>> {
        let response = self
            .client
            .request(Method::GET, "/comments")?
            .query(&[("postId", post_id)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .api_result()
            .await?;
        Ok(response.json().await?)
    }

    /// Fetch a user profile by id. Passthrough, no enrichment.
    pub async fn user(&self, id: u64) -> Result<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    /// GET a path and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .request(Method::GET, path)?
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .api_result()
            .await?;
        Ok(response.json().await?)
    }
}

/// Attach derived state to a raw post record.
///
/// The like count is derived from the device-local like set only, so it is
/// 1 when liked and 0 otherwise.
fn with_counts(post: Post, comments_count: u64, likes: &LikeState) -> PostWithCounts {
    let is_liked = likes.contains(post.id);
    PostWithCounts {
        post,
        comments_count,
        likes_count: u64::from(is_liked),
        is_liked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, RequestError};
    use httpmock::prelude::*;
    use serde_json::json;

    fn feed_against(server: &MockServer) -> (tempfile::TempDir, Feed) {
        let tmp = tempfile::tempdir().unwrap();
        let store = InteractionStore::open(tmp.path()).unwrap();
        let client = BlogHttpClient::builder()
            .base_url(server.base_url())
            .build()
            .unwrap();
        (tmp, Feed::new(client, store))
    }

    fn sample_posts() -> serde_json::Value {
        json!([
            { "id": 1, "title": "Post 1", "body": "Body 1", "userId": 1 },
            { "id": 2, "title": "Post 2", "body": "Body 2", "userId": 1 }
        ])
    }

    fn sample_comments() -> serde_json::Value {
        json!([
            { "id": 1, "postId": 1, "name": "Comment 1", "email": "a@b.com", "body": "Nice" },
            { "id": 2, "postId": 1, "name": "Comment 2", "email": "b@c.com", "body": "Cool" }
        ])
    }

    #[tokio::test]
    async fn posts_carry_comment_counts_and_like_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200).json_body(sample_posts());
        });
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).json_body(sample_comments());
        });

        let (_tmp, feed) = feed_against(&server);
        feed.store
            .set_like_state(&LikeState { likes: vec![1] })
            .unwrap();

        let posts = feed.posts(None).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].comments_count, 2);
        assert_eq!(posts[0].likes_count, 1);
        assert!(posts[0].is_liked);
        assert_eq!(posts[1].comments_count, 0);
        assert_eq!(posts[1].likes_count, 0);
        assert!(!posts[1].is_liked);
    }

    #[tokio::test]
    async fn posts_filter_by_query_case_insensitively() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200).json_body(sample_posts());
        });
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).json_body(json!([]));
        });

        let (_tmp, feed) = feed_against(&server);
        let posts = feed.posts(Some("post 1")).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post.title, "Post 1");
    }

    #[tokio::test]
    async fn empty_query_means_no_filtering() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200).json_body(sample_posts());
        });
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).json_body(json!([]));
        });

        let (_tmp, feed) = feed_against(&server);
        let posts = feed.posts(Some("")).await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn single_post_is_enriched() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200)
                .json_body(json!({ "id": 1, "title": "Post 1", "body": "Body 1", "userId": 1 }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/comments").query_param("postId", "1");
            then.status(200).json_body(sample_comments());
        });

        let (_tmp, feed) = feed_against(&server);
        feed.store.toggle_like(1).unwrap();

        let post = feed.post(1).await.unwrap();
        assert_eq!(post.comments_count, 2);
        assert_eq!(post.likes_count, 1);
        assert!(post.is_liked);
    }

    #[tokio::test]
    async fn comments_pass_through() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/comments").query_param("postId", "1");
            then.status(200).json_body(sample_comments());
        });

        let (_tmp, feed) = feed_against(&server);
        let comments = feed.comments(1).await.unwrap();
        mock.assert();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].name, "Comment 1");
        assert_eq!(comments[1].post_id, 1);
    }

    #[tokio::test]
    async fn user_passes_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/1");
            then.status(200).json_body(
                json!({ "id": 1, "name": "John", "username": "johnny", "email": "john@example.com" }),
            );
        });

        let (_tmp, feed) = feed_against(&server);
        let user = feed.user(1).await.unwrap();
        assert_eq!(user.username, "johnny");
    }

    #[tokio::test]
    async fn server_errors_surface_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(500).body("database on fire");
        });

        let (_tmp, feed) = feed_against(&server);
        let err = feed.posts(None).await.unwrap_err();
        match err {
            Error::Request(RequestError::Server { status, message }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "database on fire");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
