use crate::api::{Album, ApiError, Photo, User};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::page::home::move_selection;
use crate::ui::resource::{phase2, PagePhase, Resource};

/// Album detail: album record and owner gate the page, the photo list
/// fills in below with its own loading state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumPageState {
    pub user_id: u64,
    pub album_id: u64,
    pub album: Resource<Album>,
    pub owner: Resource<User>,
    pub photos: Resource<Vec<Photo>>,
    pub selected: usize,
}

impl UiState for AlbumPageState {}

#[derive(Debug)]
pub enum AlbumIntent {
    AlbumSettled(Result<Album, ApiError>),
    OwnerSettled(Result<User, ApiError>),
    PhotosSettled(Result<Vec<Photo>, ApiError>),
    MoveSelection(i32),
}

impl Intent for AlbumIntent {}

impl AlbumPageState {
    pub fn new(user_id: u64, album_id: u64) -> Self {
        Self {
            user_id,
            album_id,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> PagePhase<'_> {
        phase2(&self.album, &self.owner)
    }

    pub fn selected_photo(&self) -> Option<&Photo> {
        self.photos.loaded().and_then(|photos| photos.get(self.selected))
    }
}

pub struct AlbumPageReducer;

impl Reducer for AlbumPageReducer {
    type State = AlbumPageState;
    type Intent = AlbumIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlbumIntent::AlbumSettled(result) => Self::State {
                album: Resource::settle(result),
                ..state
            },
            AlbumIntent::OwnerSettled(result) => Self::State {
                owner: Resource::settle(result),
                ..state
            },
            AlbumIntent::PhotosSettled(result) => Self::State {
                photos: Resource::settle(result),
                ..state
            },
            AlbumIntent::MoveSelection(delta) => {
                let len = state.photos.loaded().map_or(0, Vec::len);
                Self::State {
                    selected: move_selection(state.selected, delta, len),
                    ..state
                }
            }
        }
    }
}
