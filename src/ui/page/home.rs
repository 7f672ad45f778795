use crate::api::{ApiError, User};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::resource::Resource;

/// Listing of all users.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomePageState {
    pub users: Resource<Vec<User>>,
    pub selected: usize,
}

impl UiState for HomePageState {}

#[derive(Debug)]
pub enum HomeIntent {
    UsersSettled(Result<Vec<User>, ApiError>),
    MoveSelection(i32),
}

impl Intent for HomeIntent {}

impl HomePageState {
    pub fn selected_user(&self) -> Option<&User> {
        self.users.loaded().and_then(|users| users.get(self.selected))
    }
}

pub struct HomePageReducer;

impl Reducer for HomePageReducer {
    type State = HomePageState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::UsersSettled(result) => Self::State {
                users: Resource::settle(result),
                ..state
            },
            HomeIntent::MoveSelection(delta) => {
                let len = state.users.loaded().map_or(0, Vec::len);
                Self::State {
                    selected: move_selection(state.selected, delta, len),
                    ..state
                }
            }
        }
    }
}

/// Wrap-around cursor movement over a list of `len` items.
pub(crate) fn move_selection(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if delta.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::user as sample_user;

    #[test]
    fn users_settle_into_loaded() {
        let state = HomePageReducer::reduce(
            HomePageState::default(),
            HomeIntent::UsersSettled(Ok(vec![sample_user(1), sample_user(2)])),
        );
        assert!(state.users.is_loaded());
        assert_eq!(state.selected_user().unwrap().id, 1);
    }

    #[test]
    fn selection_wraps_around() {
        let mut state = HomePageReducer::reduce(
            HomePageState::default(),
            HomeIntent::UsersSettled(Ok(vec![sample_user(1), sample_user(2)])),
        );
        state = HomePageReducer::reduce(state, HomeIntent::MoveSelection(-1));
        assert_eq!(state.selected, 1);
        state = HomePageReducer::reduce(state, HomeIntent::MoveSelection(1));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_is_inert_while_pending() {
        let state = HomePageReducer::reduce(HomePageState::default(), HomeIntent::MoveSelection(1));
        assert_eq!(state.selected, 0);
        assert!(state.users.is_pending());
    }
}
