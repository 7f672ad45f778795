//! Fire-and-forget page fetches.
//!
//! Entering a route starts every request that page needs, each on its own
//! tokio task. Nothing is cancelled on navigation; instead every
//! completion is tagged with its route and the UI loop discards the ones
//! whose route is no longer current.

use std::future::Future;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::ui::events::AppEvent;
use crate::ui::page::{AlbumIntent, HomeIntent, PageUpdate, PostIntent, UserIntent};
use crate::ui::route::Route;

pub struct Fetcher {
    api: ApiClient,
    handle: Handle,
    tx: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(api: ApiClient, handle: Handle, tx: Sender<AppEvent>) -> Self {
        Self { api, handle, tx }
    }

    /// Start all requests for `route` concurrently.
    pub fn load(&self, route: &Route) {
        match *route {
            Route::Home => {
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Home(HomeIntent::UsersSettled(api.users().await))
                });
            }
            Route::User { user_id } => {
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::User(UserIntent::UserSettled(api.user(user_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::User(UserIntent::PostsSettled(api.user_posts(user_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::User(UserIntent::AlbumsSettled(api.user_albums(user_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::User(UserIntent::TodosSettled(api.user_todos(user_id).await))
                });
            }
            Route::Post { user_id, post_id } => {
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Post(PostIntent::PostSettled(api.post(post_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Post(PostIntent::AuthorSettled(api.user(user_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Post(PostIntent::CommentsSettled(api.post_comments(post_id).await))
                });
            }
            Route::Album { user_id, album_id } => {
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Album(AlbumIntent::AlbumSettled(api.album(album_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Album(AlbumIntent::OwnerSettled(api.user(user_id).await))
                });
                let api = self.api.clone();
                self.spawn(route.clone(), async move {
                    PageUpdate::Album(AlbumIntent::PhotosSettled(api.album_photos(album_id).await))
                });
            }
            // Favorites reads the local store only.
            Route::Favorites => {}
        }
    }

    fn spawn<F>(&self, route: Route, fut: F)
    where
        F: Future<Output = PageUpdate> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let update = fut.await;
            if tx.send(AppEvent::Fetch { route, update }).is_err() {
                tracing::debug!("event channel closed, dropping fetch result");
            }
        });
    }
}
