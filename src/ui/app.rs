use crate::favorites::{FavoritePhoto, FavoritePost, FavoritesStore};
use crate::ui::fetch::Fetcher;
use crate::ui::mvi::Reducer;
use crate::ui::page::{
    AlbumIntent, AlbumPageReducer, FavoritesIntent, FavoritesPageReducer, FavoritesSection,
    HomeIntent, HomePageReducer, Page, PageUpdate, PostIntent, PostPageReducer, UserIntent,
    UserPageReducer, UserTab,
};
use crate::ui::route::Route;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {{
        *$state = <$reducer>::reduce(std::mem::take($state), $intent);
    }};
}

/// Top-level UI state: the current route, its page state machine, the
/// back stack, and the favorites store handle.
pub struct App {
    route: Route,
    page: Page,
    back_stack: Vec<Route>,
    favorites: FavoritesStore,
    fetcher: Fetcher,
    should_quit: bool,
    spinner_frame: usize,
}

impl App {
    pub fn new(favorites: FavoritesStore, fetcher: Fetcher, initial: Route) -> Self {
        let mut app = Self {
            route: Route::Home,
            page: Page::for_route(&Route::Home),
            back_stack: Vec::new(),
            favorites,
            fetcher,
            should_quit: false,
            spinner_frame: 0,
        };
        app.enter(initial);
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Navigate to `route`, remembering where we came from.
    /// Re-entering the current route re-fetches (no caching).
    pub fn open(&mut self, route: Route) {
        if route != self.route {
            self.back_stack.push(self.route.clone());
        }
        self.enter(route);
    }

    /// Pop the back stack. Returns false at the root.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    /// Rebuild the page state (everything pending) and start its fetches.
    fn enter(&mut self, route: Route) {
        tracing::debug!(%route, "entering route");
        self.page = Page::for_route(&route);
        self.fetcher.load(&route);
        self.route = route;
    }

    /// Apply a settled fetch, unless it belongs to a departed route.
    pub fn on_fetch(&mut self, route: Route, update: PageUpdate) {
        if route != self.route {
            tracing::debug!(stale = %route, current = %self.route, "dropping fetch result for departed route");
            return;
        }

        match (&mut self.page, update) {
            (Page::Home(state), PageUpdate::Home(intent)) => {
                dispatch_mvi!(state, HomePageReducer, intent);
            }
            (Page::User(state), PageUpdate::User(intent)) => {
                dispatch_mvi!(state, UserPageReducer, intent);
            }
            (Page::Post(state), PageUpdate::Post(intent)) => {
                dispatch_mvi!(state, PostPageReducer, intent);
            }
            (Page::Album(state), PageUpdate::Album(intent)) => {
                dispatch_mvi!(state, AlbumPageReducer, intent);
            }
            // Route matched but the page kind didn't; nothing to apply.
            _ => tracing::debug!("fetch update does not match current page kind"),
        }
    }

    // ------------------------------------------------------------------
    // Key-driven intents
    // ------------------------------------------------------------------

    /// Move the cursor of whatever list the current page shows.
    pub fn move_selection(&mut self, delta: i32) {
        match &mut self.page {
            Page::Home(state) => dispatch_mvi!(state, HomePageReducer, HomeIntent::MoveSelection(delta)),
            Page::User(state) => dispatch_mvi!(state, UserPageReducer, UserIntent::MoveSelection(delta)),
            Page::Album(state) => {
                dispatch_mvi!(state, AlbumPageReducer, AlbumIntent::MoveSelection(delta));
            }
            Page::Post(state) => {
                let intent = if delta < 0 {
                    PostIntent::ScrollUp
                } else {
                    PostIntent::ScrollDown
                };
                dispatch_mvi!(state, PostPageReducer, intent);
            }
            Page::Favorites(state) => {
                let len = match state.section {
                    FavoritesSection::Photos => self.favorites.photos().len(),
                    FavoritesSection::Posts => self.favorites.posts().len(),
                };
                dispatch_mvi!(state, FavoritesPageReducer, FavoritesIntent::MoveSelection { delta, len });
            }
        }
    }

    /// Tab key: next tab on the user page, section toggle on favorites.
    pub fn next_tab(&mut self) {
        match &mut self.page {
            Page::User(state) => dispatch_mvi!(state, UserPageReducer, UserIntent::NextTab),
            Page::Favorites(state) => {
                dispatch_mvi!(state, FavoritesPageReducer, FavoritesIntent::SwitchSection);
            }
            _ => {}
        }
    }

    /// Enter key: open whatever the cursor points at.
    pub fn open_selected(&mut self) {
        let target = match &self.page {
            Page::Home(state) => state.selected_user().map(|user| Route::User { user_id: user.id }),
            Page::User(state) => match state.tab {
                UserTab::Posts => state.selected_post().map(|post| Route::Post {
                    user_id: state.user_id,
                    post_id: post.id,
                }),
                UserTab::Albums => state.selected_album().map(|album| Route::Album {
                    user_id: state.user_id,
                    album_id: album.id,
                }),
                UserTab::Todos => None,
            },
            Page::Favorites(state) => match state.section {
                FavoritesSection::Posts => {
                    self.favorites.posts().get(state.selected).map(|post| Route::Post {
                        user_id: post.user_id,
                        post_id: post.id,
                    })
                }
                FavoritesSection::Photos => {
                    self.favorites.photos().get(state.selected).map(|photo| Route::Album {
                        user_id: photo.user_id,
                        album_id: photo.album_id,
                    })
                }
            },
            _ => None,
        };

        if let Some(route) = target {
            self.open(route);
        }
    }

    /// Space key: toggle the favorite flag of the record under the cursor.
    pub fn toggle_favorite(&mut self) {
        match &self.page {
            Page::User(state) => {
                if let Some(post) = state.selected_post() {
                    let favorite = FavoritePost::from(post);
                    if self.favorites.is_post_favorite(favorite.id) {
                        self.favorites.remove_post(favorite.id);
                    } else {
                        self.favorites.add_post(favorite);
                    }
                }
            }
            Page::Post(state) => {
                if let Some(post) = state.post.loaded() {
                    let favorite = FavoritePost::from(post);
                    if self.favorites.is_post_favorite(favorite.id) {
                        self.favorites.remove_post(favorite.id);
                    } else {
                        self.favorites.add_post(favorite);
                    }
                }
            }
            Page::Album(state) => {
                if let Some(photo) = state.selected_photo() {
                    if self.favorites.is_photo_favorite(photo.id) {
                        self.favorites.remove_photo(photo.id);
                    } else {
                        let owner_id = state
                            .owner
                            .loaded()
                            .map(|owner| owner.id)
                            .unwrap_or(state.user_id);
                        self.favorites.add_photo(FavoritePhoto::from_photo(photo, owner_id));
                    }
                }
            }
            _ => {}
        }
    }

    /// Delete key on the favorites page: remove the selected entry.
    pub fn remove_selected_favorite(&mut self) {
        let Page::Favorites(state) = &mut self.page else {
            return;
        };

        let len = match state.section {
            FavoritesSection::Photos => {
                if let Some(photo) = self.favorites.photos().get(state.selected) {
                    self.favorites.remove_photo(photo.id);
                }
                self.favorites.photos().len()
            }
            FavoritesSection::Posts => {
                if let Some(post) = self.favorites.posts().get(state.selected) {
                    self.favorites.remove_post(post.id);
                }
                self.favorites.posts().len()
            }
        };

        dispatch_mvi!(state, FavoritesPageReducer, FavoritesIntent::Removed { len });
    }
}
