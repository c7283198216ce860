//! Wire and derived data types shared across the crate.
//!
//! Everything here (de)serializes with camelCase field names to match the
//! remote JSON API. Derived fields (`commentsCount`, `likesCount`, `isLiked`)
//! never come from the server; they are recomputed on every fetch and only
//! persisted as part of a favorite snapshot.

use serde::{Deserialize, Serialize};

/// A blog post as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned post id.
    pub id: u64,
    /// Id of the authoring user.
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// A [`Post`] enriched with client-side derived state.
///
/// `likes_count` is derived purely from this device's like set, so it is
/// always 0 or 1. There is no server-side aggregate behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCounts {
    /// The underlying post record.
    #[serde(flatten)]
    pub post: Post,
    /// Number of comments whose `postId` matches this post.
    pub comments_count: u64,
    /// 1 if this device has liked the post, 0 otherwise.
    pub likes_count: u64,
    /// Whether this device has liked the post.
    pub is_liked: bool,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server-assigned comment id.
    pub id: u64,
    /// Id of the post this comment belongs to.
    pub post_id: u64,
    /// Display name of the commenter.
    pub name: String,
    /// Email of the commenter.
    pub email: String,
    /// Comment text.
    pub body: String,
}

/// Client-supplied fields for a new comment.
///
/// The post id and the server-assigned comment id are not part of this type;
/// see [`crate::Session::create_comment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Display name of the commenter.
    pub name: String,
    /// Email of the commenter.
    pub email: String,
    /// Comment text.
    pub body: String,
}

/// A user profile as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user id.
    pub id: u64,
    /// Full display name.
    pub name: String,
    /// Login/handle name.
    #[serde(default)]
    pub username: String,
    /// Email address.
    pub email: String,
}

/// The set of post ids this device has liked, as persisted on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    /// Liked post ids. No duplicates.
    pub likes: Vec<u64>,
}

impl LikeState {
    /// Membership check.
    pub fn contains(&self, post_id: u64) -> bool {
        self.likes.contains(&post_id)
    }
}
