use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::favorites::snapshot::{FavoritePhoto, FavoritePost, FavoritesSnapshot};

/// Clonable handle to the favorites collections.
///
/// Explicitly constructed and passed to whichever views need it; single
/// instance per process by convention, not by hidden global state. All
/// mutations happen on the UI thread, but the interior lock makes a read
/// right after a write observe the write regardless of which clone did
/// the writing.
#[derive(Clone)]
pub struct FavoritesStore {
    inner: Arc<RwLock<FavoritesSnapshot>>,
    path: PathBuf,
}

#[derive(Debug, Error)]
enum PersistError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FavoritesStore {
    pub fn new(snapshot: FavoritesSnapshot, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
            path,
        }
    }

    /// Load a prior snapshot from `path`, or start empty.
    ///
    /// A missing, unreadable, or corrupt file is never an error here; the
    /// favorites simply start empty, and the problem is logged.
    pub fn load_or_default(path: PathBuf) -> Self {
        let snapshot = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "corrupt favorites snapshot, starting empty");
                    FavoritesSnapshot::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => FavoritesSnapshot::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read favorites snapshot, starting empty");
                FavoritesSnapshot::default()
            }
        };

        Self::new(snapshot, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `post` unless a favorite with the same id already exists.
    /// A duplicate add is a silent no-op.
    pub fn add_post(&self, post: FavoritePost) {
        let mut guard = self.inner.write();
        if guard.posts.iter().any(|p| p.id == post.id) {
            return;
        }
        guard.posts.push(post);
        self.persist(&guard);
    }

    /// Append `photo` unless a favorite with the same id already exists.
    pub fn add_photo(&self, photo: FavoritePhoto) {
        let mut guard = self.inner.write();
        if guard.photos.iter().any(|p| p.id == photo.id) {
            return;
        }
        guard.photos.push(photo);
        self.persist(&guard);
    }

    /// Remove the favorite post with `id`; no-op when absent.
    pub fn remove_post(&self, id: u64) {
        let mut guard = self.inner.write();
        let before = guard.posts.len();
        guard.posts.retain(|p| p.id != id);
        if guard.posts.len() != before {
            self.persist(&guard);
        }
    }

    /// Remove the favorite photo with `id`; no-op when absent.
    pub fn remove_photo(&self, id: u64) {
        let mut guard = self.inner.write();
        let before = guard.photos.len();
        guard.photos.retain(|p| p.id != id);
        if guard.photos.len() != before {
            self.persist(&guard);
        }
    }

    pub fn is_post_favorite(&self, id: u64) -> bool {
        self.inner.read().posts.iter().any(|p| p.id == id)
    }

    pub fn is_photo_favorite(&self, id: u64) -> bool {
        self.inner.read().photos.iter().any(|p| p.id == id)
    }

    /// Favorite posts in insertion order.
    pub fn posts(&self) -> Vec<FavoritePost> {
        self.inner.read().posts.clone()
    }

    /// Favorite photos in insertion order.
    pub fn photos(&self) -> Vec<FavoritePhoto> {
        self.inner.read().photos.clone()
    }

    /// Combined count, shown as the header badge.
    pub fn total(&self) -> usize {
        let guard = self.inner.read();
        guard.photos.len() + guard.posts.len()
    }

    /// Write the full snapshot to disk. Failures are logged and swallowed;
    /// persistence problems must never surface as user-visible errors.
    fn persist(&self, snapshot: &FavoritesSnapshot) {
        if let Err(err) = self.try_persist(snapshot) {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist favorites");
        }
    }

    fn try_persist(&self, snapshot: &FavoritesSnapshot) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_post(id: u64) -> FavoritePost {
        FavoritePost {
            user_id: 1,
            id,
            title: format!("post {id}"),
            body: "body".to_string(),
        }
    }

    fn sample_photo(id: u64) -> FavoritePhoto {
        FavoritePhoto {
            user_id: 1,
            album_id: 3,
            id,
            title: "t".to_string(),
            url: "u".to_string(),
            thumbnail_url: "tu".to_string(),
        }
    }

    fn store_in(dir: &TempDir) -> FavoritesStore {
        FavoritesStore::load_or_default(dir.path().join("favorites.json"))
    }

    #[test]
    fn duplicate_add_keeps_single_entry_in_first_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_post(sample_post(1));
        store.add_post(sample_post(2));
        store.add_post(sample_post(1));

        let posts = store.posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_photo(sample_photo(5));
        store.remove_photo(99);

        assert_eq!(store.photos().len(), 1);
    }

    #[test]
    fn membership_reflects_mutations_immediately() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.is_post_favorite(3));
        store.add_post(sample_post(3));
        assert!(store.is_post_favorite(3));
        store.remove_post(3);
        assert!(!store.is_post_favorite(3));
    }

    #[test]
    fn queries_have_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_photo(sample_photo(1));

        let before = store.photos();
        assert!(store.is_photo_favorite(1));
        assert!(!store.is_photo_favorite(2));
        assert_eq!(store.photos(), before);
    }

    #[test]
    fn total_counts_both_collections() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add_post(sample_post(1));
        store.add_photo(sample_photo(1));
        store.add_photo(sample_photo(2));

        assert_eq!(store.total(), 3);
    }

    #[test]
    fn mutations_survive_reload_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");

        let store = FavoritesStore::load_or_default(path.clone());
        store.add_photo(sample_photo(7));
        drop(store);

        let reloaded = FavoritesStore::load_or_default(path);
        assert!(reloaded.is_photo_favorite(7));
        let photos = reloaded.photos();
        assert_eq!(photos[0].album_id, 3);
        assert_eq!(photos[0].thumbnail_url, "tu");
    }

    #[test]
    fn corrupt_snapshot_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "not json at all {").unwrap();

        let store = FavoritesStore::load_or_default(path);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn unwritable_path_still_mutates_in_memory() {
        let dir = TempDir::new().unwrap();
        // Parent "file" is a regular file, so create_dir_all fails.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let store = FavoritesStore::load_or_default(blocker.join("favorites.json"));
        store.add_post(sample_post(1));

        assert!(store.is_post_favorite(1));
    }
}
