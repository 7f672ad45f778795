//! One state machine per route.
//!
//! Entering a route builds the matching page state (all resources
//! pending) and the fetcher starts that page's requests. Settled fetches
//! and key actions are intents; reducers do the rest.

pub mod album;
pub mod favorites;
pub mod home;
pub mod post;
pub mod user;

pub use album::{AlbumIntent, AlbumPageReducer, AlbumPageState};
pub use favorites::{FavoritesIntent, FavoritesPageReducer, FavoritesPageState, FavoritesSection};
pub use home::{HomeIntent, HomePageReducer, HomePageState};
pub use post::{PostIntent, PostPageReducer, PostPageState};
pub use user::{UserIntent, UserPageReducer, UserPageState, UserTab};

use crate::ui::route::Route;

/// Current page and its state.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home(HomePageState),
    User(UserPageState),
    Post(PostPageState),
    Album(AlbumPageState),
    Favorites(FavoritesPageState),
}

impl Page {
    /// Fresh page state for a route, every tracked resource pending.
    pub fn for_route(route: &Route) -> Self {
        match *route {
            Route::Home => Page::Home(HomePageState::default()),
            Route::User { user_id } => Page::User(UserPageState::new(user_id)),
            Route::Post { user_id, post_id } => Page::Post(PostPageState::new(user_id, post_id)),
            Route::Album { user_id, album_id } => {
                Page::Album(AlbumPageState::new(user_id, album_id))
            }
            Route::Favorites => Page::Favorites(FavoritesPageState::default()),
        }
    }
}

/// A settled fetch, addressed to the page kind it belongs to.
#[derive(Debug)]
pub enum PageUpdate {
    Home(HomeIntent),
    User(UserIntent),
    Post(PostIntent),
    Album(AlbumIntent),
}
