//! Typed client for the remote demo REST service.
//!
//! Pure I/O boundary: each method performs a single GET, decodes the JSON
//! body into a model from [`models`], and reports failures through
//! [`ApiError`]. No retries, no caching.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fixtures;
mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Address, Album, Comment, Company, Geo, Photo, Post, Todo, User};
