//! Locally persisted favorites.
//!
//! Two insertion-ordered collections (posts, photos) behind a clonable
//! store handle. Every mutation writes the full snapshot back to disk;
//! load failures fall back silently to an empty store.

mod snapshot;
mod store;

pub use snapshot::{FavoritePhoto, FavoritePost, FavoritesSnapshot};
pub use store::FavoritesStore;
