use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::models::{Album, Comment, Photo, Post, Todo, User};
use crate::config::ApiConfig;

/// Client for the remote demo REST service.
///
/// Cheap to clone; each page fetch clones one per in-flight request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users".to_string()).await
    }

    pub async fn user(&self, id: u64) -> Result<User, ApiError> {
        self.get_json(format!("/users/{id}")).await
    }

    pub async fn user_posts(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
        self.get_json(format!("/users/{user_id}/posts")).await
    }

    pub async fn user_albums(&self, user_id: u64) -> Result<Vec<Album>, ApiError> {
        self.get_json(format!("/users/{user_id}/albums")).await
    }

    pub async fn user_todos(&self, user_id: u64) -> Result<Vec<Todo>, ApiError> {
        self.get_json(format!("/users/{user_id}/todos")).await
    }

    pub async fn post(&self, id: u64) -> Result<Post, ApiError> {
        self.get_json(format!("/posts/{id}")).await
    }

    pub async fn post_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(format!("/posts/{post_id}/comments")).await
    }

    pub async fn album(&self, id: u64) -> Result<Album, ApiError> {
        self.get_json(format!("/albums/{id}")).await
    }

    pub async fn album_photos(&self, album_id: u64) -> Result<Vec<Photo>, ApiError> {
        self.get_json(format!("/albums/{album_id}/photos")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: String) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                path: path.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
