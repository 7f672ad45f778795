use crate::api::{ApiError, Comment, Post, User};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::resource::{phase2, PagePhase, Resource};

/// Post detail with its author and comments.
///
/// Post and author are both required before the page renders; the
/// comments section loads underneath on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostPageState {
    pub user_id: u64,
    pub post_id: u64,
    pub post: Resource<Post>,
    pub author: Resource<User>,
    pub comments: Resource<Vec<Comment>>,
    pub scroll: u16,
}

impl UiState for PostPageState {}

#[derive(Debug)]
pub enum PostIntent {
    PostSettled(Result<Post, ApiError>),
    AuthorSettled(Result<User, ApiError>),
    CommentsSettled(Result<Vec<Comment>, ApiError>),
    ScrollUp,
    ScrollDown,
}

impl Intent for PostIntent {}

impl PostPageState {
    pub fn new(user_id: u64, post_id: u64) -> Self {
        Self {
            user_id,
            post_id,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> PagePhase<'_> {
        phase2(&self.post, &self.author)
    }
}

pub struct PostPageReducer;

impl Reducer for PostPageReducer {
    type State = PostPageState;
    type Intent = PostIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostIntent::PostSettled(result) => Self::State {
                post: Resource::settle(result),
                ..state
            },
            PostIntent::AuthorSettled(result) => Self::State {
                author: Resource::settle(result),
                ..state
            },
            PostIntent::CommentsSettled(result) => Self::State {
                comments: Resource::settle(result),
                ..state
            },
            PostIntent::ScrollUp => Self::State {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            PostIntent::ScrollDown => Self::State {
                scroll: state.scroll.saturating_add(1),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;

    #[test]
    fn page_waits_for_both_primaries() {
        let state = PostPageReducer::reduce(
            PostPageState::new(1, 5),
            PostIntent::PostSettled(Ok(fixtures::post(1, 5))),
        );
        assert_eq!(state.phase(), PagePhase::Loading);

        let state = PostPageReducer::reduce(
            state,
            PostIntent::AuthorSettled(Ok(fixtures::user(1))),
        );
        assert_eq!(state.phase(), PagePhase::Ready);
        assert!(state.comments.is_pending());
    }

    #[test]
    fn author_failure_fails_the_page_even_with_post_loaded() {
        let state = PostPageReducer::reduce(
            PostPageState::new(1, 5),
            PostIntent::PostSettled(Ok(fixtures::post(1, 5))),
        );
        let state = PostPageReducer::reduce(
            state,
            PostIntent::AuthorSettled(Err(ApiError::Status {
                path: "/users/1".to_string(),
                status: 500,
            })),
        );
        assert!(matches!(state.phase(), PagePhase::Failed(_)));
    }

    #[test]
    fn comments_settle_independently() {
        let state = PostPageReducer::reduce(
            PostPageState::new(1, 5),
            PostIntent::CommentsSettled(Ok(vec![fixtures::comment(5, 1)])),
        );
        // Comments alone never make the page ready.
        assert_eq!(state.phase(), PagePhase::Loading);
        assert_eq!(state.comments.loaded().unwrap().len(), 1);
    }

    #[test]
    fn scroll_saturates_at_zero() {
        let state = PostPageReducer::reduce(PostPageState::new(1, 5), PostIntent::ScrollUp);
        assert_eq!(state.scroll, 0);
        let state = PostPageReducer::reduce(state, PostIntent::ScrollDown);
        assert_eq!(state.scroll, 1);
    }
}
