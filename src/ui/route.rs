use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Navigable locations, addressed by URL-style paths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    User {
        user_id: u64,
    },
    Post {
        user_id: u64,
        post_id: u64,
    },
    Album {
        user_id: u64,
        album_id: u64,
    },
    Favorites,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized route '{0}'")]
pub struct RouteParseError(String);

impl Route {
    /// URL-style path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::User { user_id } => format!("/users/{user_id}"),
            Route::Post { user_id, post_id } => format!("/users/{user_id}/posts/{post_id}"),
            Route::Album { user_id, album_id } => format!("/users/{user_id}/albums/{album_id}"),
            Route::Favorites => "/favorites".to_string(),
        }
    }

    /// Short label for the header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Users",
            Route::User { .. } => "User",
            Route::Post { .. } => "Post",
            Route::Album { .. } => "Album",
            Route::Favorites => "Favorites",
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = raw
            .trim()
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let parse_id = |s: &str| s.parse::<u64>().map_err(|_| RouteParseError(raw.to_string()));

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["favorites"] => Ok(Route::Favorites),
            ["users", user_id] => Ok(Route::User {
                user_id: parse_id(user_id)?,
            }),
            ["users", user_id, "posts", post_id] => Ok(Route::Post {
                user_id: parse_id(user_id)?,
                post_id: parse_id(post_id)?,
            }),
            ["users", user_id, "albums", album_id] => Ok(Route::Album {
                user_id: parse_id(user_id)?,
                album_id: parse_id(album_id)?,
            }),
            _ => Err(RouteParseError(raw.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
