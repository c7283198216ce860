use std::collections::BTreeMap;

use super::core::{FAVORITES_FILE, InteractionStore};
use crate::Result;
use crate::types::PostWithCounts;

/// On-disk shape of the favorites file: post id -> full post snapshot.
/// JSON object keys are the stringified ids.
type FavoritesMap = BTreeMap<u64, PostWithCounts>;

impl InteractionStore {
    /// Save a full snapshot of `post` as a favorite. Overwrites any previous
    /// snapshot with the same id.
    pub fn add_favorite(&self, post: &PostWithCounts) -> Result<()> {
        let _guard = self.guard();
        let mut favorites: FavoritesMap = self.read_json(FAVORITES_FILE);
        favorites.insert(post.post.id, post.clone());
        self.write_json(FAVORITES_FILE, &favorites)
    }

    /// Remove the favorite with `post_id`. Removing an absent id is a no-op.
    pub fn remove_favorite(&self, post_id: u64) -> Result<()> {
        let _guard = self.guard();
        let mut favorites: FavoritesMap = self.read_json(FAVORITES_FILE);
        favorites.remove(&post_id);
        self.write_json(FAVORITES_FILE, &favorites)
    }

    /// All favorited posts, in ascending id order.
    pub fn favorites(&self) -> Vec<PostWithCounts> {
        let _guard = self.guard();
        let favorites: FavoritesMap = self.read_json(FAVORITES_FILE);
        favorites.into_values().collect()
    }

    /// Whether `post_id` is currently favorited.
    pub fn is_favorite(&self, post_id: u64) -> bool {
        let _guard = self.guard();
        let favorites: FavoritesMap = self.read_json(FAVORITES_FILE);
        favorites.contains_key(&post_id)
    }
}
