use crate::api::{Album, ApiError, Post, Todo, User};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::page::home::move_selection;
use crate::ui::resource::{PagePhase, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Posts,
    Albums,
    Todos,
}

impl UserTab {
    pub fn next(self) -> Self {
        match self {
            UserTab::Posts => UserTab::Albums,
            UserTab::Albums => UserTab::Todos,
            UserTab::Todos => UserTab::Posts,
        }
    }

    pub fn index(self) -> usize {
        match self {
            UserTab::Posts => 0,
            UserTab::Albums => 1,
            UserTab::Todos => 2,
        }
    }
}

/// User detail: the user record is the page's primary resource; posts,
/// albums and todos each load independently behind their own tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPageState {
    pub user_id: u64,
    pub user: Resource<User>,
    pub posts: Resource<Vec<Post>>,
    pub albums: Resource<Vec<Album>>,
    pub todos: Resource<Vec<Todo>>,
    pub tab: UserTab,
    pub selected: usize,
}

impl UiState for UserPageState {}

#[derive(Debug)]
pub enum UserIntent {
    UserSettled(Result<User, ApiError>),
    PostsSettled(Result<Vec<Post>, ApiError>),
    AlbumsSettled(Result<Vec<Album>, ApiError>),
    TodosSettled(Result<Vec<Todo>, ApiError>),
    NextTab,
    MoveSelection(i32),
}

impl Intent for UserIntent {}

impl UserPageState {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Only the user record gates the page; the tabs degrade on their own.
    pub fn phase(&self) -> PagePhase<'_> {
        self.user.phase()
    }

    /// Item count of the active tab's list, zero while it is unsettled.
    pub fn active_tab_len(&self) -> usize {
        match self.tab {
            UserTab::Posts => self.posts.loaded().map_or(0, Vec::len),
            UserTab::Albums => self.albums.loaded().map_or(0, Vec::len),
            UserTab::Todos => self.todos.loaded().map_or(0, Vec::len),
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match self.tab {
            UserTab::Posts => self.posts.loaded().and_then(|posts| posts.get(self.selected)),
            _ => None,
        }
    }

    pub fn selected_album(&self) -> Option<&Album> {
        match self.tab {
            UserTab::Albums => self.albums.loaded().and_then(|albums| albums.get(self.selected)),
            _ => None,
        }
    }
}

pub struct UserPageReducer;

impl Reducer for UserPageReducer {
    type State = UserPageState;
    type Intent = UserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserIntent::UserSettled(result) => Self::State {
                user: Resource::settle(result),
                ..state
            },
            UserIntent::PostsSettled(result) => Self::State {
                posts: Resource::settle(result),
                ..state
            },
            UserIntent::AlbumsSettled(result) => Self::State {
                albums: Resource::settle(result),
                ..state
            },
            UserIntent::TodosSettled(result) => Self::State {
                todos: Resource::settle(result),
                ..state
            },
            UserIntent::NextTab => Self::State {
                tab: state.tab.next(),
                selected: 0,
                ..state
            },
            UserIntent::MoveSelection(delta) => {
                let len = state.active_tab_len();
                Self::State {
                    selected: move_selection(state.selected, delta, len),
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;

    fn settle_user(state: UserPageState) -> UserPageState {
        UserPageReducer::reduce(state, UserIntent::UserSettled(Ok(fixtures::user(1))))
    }

    #[test]
    fn starts_with_every_resource_pending() {
        let state = UserPageState::new(1);
        assert!(state.user.is_pending());
        assert!(state.posts.is_pending());
        assert!(state.albums.is_pending());
        assert!(state.todos.is_pending());
        assert_eq!(state.phase(), PagePhase::Loading);
    }

    #[test]
    fn primary_failure_gates_the_page_while_secondaries_pend() {
        let state = UserPageReducer::reduce(
            UserPageState::new(999),
            UserIntent::UserSettled(Err(crate::api::ApiError::Status {
                path: "/users/999".to_string(),
                status: 404,
            })),
        );
        assert_eq!(state.phase(), PagePhase::Failed("/users/999 returned HTTP 404"));
        // Secondary failures later do not resurrect the page.
        assert!(state.posts.is_pending());
    }

    #[test]
    fn primary_ready_while_secondary_still_loading() {
        let state = settle_user(UserPageState::new(1));
        assert_eq!(state.phase(), PagePhase::Ready);
        assert!(state.posts.is_pending());

        // The posts tab resolves independently, without touching the user.
        let state = UserPageReducer::reduce(
            state,
            UserIntent::PostsSettled(Ok(vec![fixtures::post(1, 1)])),
        );
        assert_eq!(state.phase(), PagePhase::Ready);
        assert_eq!(state.active_tab_len(), 1);
    }

    #[test]
    fn secondary_failure_does_not_fail_the_page() {
        let state = settle_user(UserPageState::new(1));
        let state = UserPageReducer::reduce(
            state,
            UserIntent::TodosSettled(Err(crate::api::ApiError::Status {
                path: "/users/1/todos".to_string(),
                status: 500,
            })),
        );
        assert_eq!(state.phase(), PagePhase::Ready);
        assert!(state.todos.failure().is_some());
    }

    #[test]
    fn tab_switch_resets_selection() {
        let state = settle_user(UserPageState::new(1));
        let state = UserPageReducer::reduce(
            state,
            UserIntent::PostsSettled(Ok(vec![fixtures::post(1, 1), fixtures::post(1, 2)])),
        );
        let state = UserPageReducer::reduce(state, UserIntent::MoveSelection(1));
        assert_eq!(state.selected, 1);

        let state = UserPageReducer::reduce(state, UserIntent::NextTab);
        assert_eq!(state.tab, UserTab::Albums);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn todos_tab_reports_its_length() {
        let state = settle_user(UserPageState::new(1));
        let state = UserPageReducer::reduce(
            state,
            UserIntent::TodosSettled(Ok(vec![
                fixtures::todo(1, 1, true),
                fixtures::todo(1, 2, false),
            ])),
        );
        let state = UserPageReducer::reduce(state, UserIntent::NextTab);
        let state = UserPageReducer::reduce(state, UserIntent::NextTab);
        assert_eq!(state.tab, UserTab::Todos);
        assert_eq!(state.active_tab_len(), 2);
    }

    #[test]
    fn selected_post_is_none_on_other_tabs() {
        let state = settle_user(UserPageState::new(1));
        let state = UserPageReducer::reduce(
            state,
            UserIntent::PostsSettled(Ok(vec![fixtures::post(1, 1)])),
        );
        assert!(state.selected_post().is_some());

        let state = UserPageReducer::reduce(state, UserIntent::NextTab);
        assert!(state.selected_post().is_none());
    }
}
