use super::core::{InteractionStore, LIKES_FILE};
use crate::Result;
use crate::types::LikeState;

impl InteractionStore {
    /// The current like set. Absent or malformed state reads as empty.
    pub fn like_state(&self) -> LikeState {
        let _guard = self.guard();
        self.read_json(LIKES_FILE)
    }

    /// Replace the persisted like set wholesale.
    pub fn set_like_state(&self, state: &LikeState) -> Result<()> {
        let _guard = self.guard();
        self.write_json(LIKES_FILE, state)
    }

    /// Flip the like membership of `post_id` and persist the result.
    ///
    /// Returns the new membership state: `true` means the post is now liked.
    /// An even number of toggles always restores the original state.
    pub fn toggle_like(&self, post_id: u64) -> Result<bool> {
        let _guard = self.guard();
        let mut state: LikeState = self.read_json(LIKES_FILE);
        let now_liked = if state.contains(post_id) {
            state.likes.retain(|id| *id != post_id);
            false
        } else {
            state.likes.push(post_id);
            true
        };
        self.write_json(LIKES_FILE, &state)?;
        Ok(now_liked)
    }

    /// Whether this device has liked `post_id`.
    pub fn is_liked(&self, post_id: u64) -> bool {
        self.like_state().contains(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, InteractionStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = InteractionStore::open(tmp.path()).unwrap();
        (tmp, store)
    }

    #[test]
    fn toggle_adds_like_when_not_liked() {
        let (_tmp, store) = store();
        assert!(store.toggle_like(3).unwrap());
        assert!(store.like_state().contains(3));
    }

    #[test]
    fn toggle_removes_like_when_already_liked() {
        let (_tmp, store) = store();
        store.set_like_state(&LikeState { likes: vec![3] }).unwrap();
        assert!(!store.toggle_like(3).unwrap());
        assert!(!store.like_state().contains(3));
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let (_tmp, store) = store();
        store.set_like_state(&LikeState { likes: vec![7] }).unwrap();
        for post_id in [7, 99] {
            let before = store.is_liked(post_id);
            store.toggle_like(post_id).unwrap();
            store.toggle_like(post_id).unwrap();
            assert_eq!(store.is_liked(post_id), before);
        }
    }

    #[test]
    fn toggle_never_duplicates_ids() {
        let (_tmp, store) = store();
        store.toggle_like(1).unwrap();
        store.toggle_like(2).unwrap();
        store.toggle_like(1).unwrap();
        store.toggle_like(1).unwrap();
        let state = store.like_state();
        assert_eq!(state.likes.iter().filter(|id| **id == 1).count(), 1);
    }

    #[test]
    fn is_liked_checks_membership() {
        let (_tmp, store) = store();
        store
            .set_like_state(&LikeState {
                likes: vec![1, 2, 3],
            })
            .unwrap();
        assert!(store.is_liked(1));
        assert!(!store.is_liked(4));
    }

    #[test]
    fn malformed_like_file_treated_as_empty() {
        let (_tmp, store) = store();
        std::fs::write(store.path(super::LIKES_FILE), "][").unwrap();
        assert_eq!(store.like_state(), LikeState::default());
        // And toggling on top of it starts fresh.
        assert!(store.toggle_like(9).unwrap());
        assert_eq!(store.like_state().likes, vec![9]);
    }
}
