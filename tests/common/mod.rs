#![allow(dead_code)]

pub mod mock_api;

use placeview::api::{Address, Company, Geo, Post, User};

pub fn sample_user(id: u64) -> User {
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

pub fn sample_post(user_id: u64, id: u64) -> Post {
    Post {
        user_id,
        id,
        title: format!("post {id}"),
        body: "sunt aut facere repellat".to_string(),
    }
}
