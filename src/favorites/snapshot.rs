use serde::{Deserialize, Serialize};

use crate::api::{Photo, Post};

/// A post copied into the favorites at the moment of favoriting.
///
/// Deliberately a snapshot, not a live reference: later changes to the
/// remote post do not propagate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePost {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// A photo copied into the favorites, tagged with the owning user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePhoto {
    pub user_id: u64,
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// The persisted document: `{"photos": [...], "posts": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesSnapshot {
    #[serde(default)]
    pub photos: Vec<FavoritePhoto>,
    #[serde(default)]
    pub posts: Vec<FavoritePost>,
}

impl From<&Post> for FavoritePost {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}

impl FavoritePhoto {
    /// The photo itself carries only the album id; the user id comes from
    /// the album's owner, known to the page doing the favoriting.
    pub fn from_photo(photo: &Photo, user_id: u64) -> Self {
        Self {
            user_id,
            album_id: photo.album_id,
            id: photo.id,
            title: photo.title.clone(),
            url: photo.url.clone(),
            thumbnail_url: photo.thumbnail_url.clone(),
        }
    }
}
