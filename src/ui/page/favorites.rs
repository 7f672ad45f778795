use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::page::home::move_selection;

/// Which favorites collection the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoritesSection {
    #[default]
    Photos,
    Posts,
}

impl FavoritesSection {
    pub fn other(self) -> Self {
        match self {
            FavoritesSection::Photos => FavoritesSection::Posts,
            FavoritesSection::Posts => FavoritesSection::Photos,
        }
    }
}

/// Favorites page holds no remote resources; the collections come from
/// the store at render time, so intents carry the current list length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesPageState {
    pub section: FavoritesSection,
    pub selected: usize,
}

impl UiState for FavoritesPageState {}

#[derive(Debug)]
pub enum FavoritesIntent {
    SwitchSection,
    MoveSelection { delta: i32, len: usize },
    /// An entry was removed; clamp the cursor to the shrunk list.
    Removed { len: usize },
}

impl Intent for FavoritesIntent {}

pub struct FavoritesPageReducer;

impl Reducer for FavoritesPageReducer {
    type State = FavoritesPageState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::SwitchSection => Self::State {
                section: state.section.other(),
                selected: 0,
            },
            FavoritesIntent::MoveSelection { delta, len } => Self::State {
                selected: move_selection(state.selected, delta, len),
                ..state
            },
            FavoritesIntent::Removed { len } => Self::State {
                selected: if len == 0 {
                    0
                } else {
                    state.selected.min(len - 1)
                },
                ..state
            },
        }
    }
}
