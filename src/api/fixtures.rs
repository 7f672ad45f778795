//! Canned records for unit tests.

use crate::api::models::{Address, Album, Comment, Company, Geo, Photo, Post, Todo, User};

pub(crate) fn user(id: u64) -> User {
    User {
        id,
        name: format!("User {id}"),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "555-0000".to_string(),
        website: "example.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub(crate) fn post(user_id: u64, id: u64) -> Post {
    Post {
        user_id,
        id,
        title: format!("post {id}"),
        body: "sunt aut facere repellat".to_string(),
    }
}

pub(crate) fn comment(post_id: u64, id: u64) -> Comment {
    Comment {
        post_id,
        id,
        name: format!("comment {id}"),
        email: "Eliseo@gardner.biz".to_string(),
        body: "laudantium enim quasi".to_string(),
    }
}

pub(crate) fn album(user_id: u64, id: u64) -> Album {
    Album {
        user_id,
        id,
        title: format!("album {id}"),
    }
}

pub(crate) fn photo(album_id: u64, id: u64) -> Photo {
    Photo {
        album_id,
        id,
        title: format!("photo {id}"),
        url: format!("https://via.placeholder.com/600/{id}"),
        thumbnail_url: format!("https://via.placeholder.com/150/{id}"),
    }
}

pub(crate) fn todo(user_id: u64, id: u64, completed: bool) -> Todo {
    Todo {
        user_id,
        id,
        title: format!("todo {id}"),
        completed,
    }
}
