use async_trait::async_trait;

use crate::model::{Health, NewComment, Post, PostForm};

/// The remote vlog service. One method per endpoint.
#[async_trait(?Send)]
pub trait VlogApi {
    type Error: std::error::Error;

    async fn list_posts(&self) -> Result<Vec<Post>, Self::Error>;
    /// Returns the created post when the service echoes it back.
    async fn create_post(&self, form: &PostForm) -> Result<Option<Post>, Self::Error>;
    async fn like_post(&self, post_id: &str) -> Result<(), Self::Error>;
    async fn add_comment(&self, post_id: &str, comment: &NewComment) -> Result<(), Self::Error>;
    async fn delete_post(&self, post_id: &str) -> Result<(), Self::Error>;
    async fn delete_comment(&self, comment_id: &str) -> Result<(), Self::Error>;
    async fn get_post(&self, post_id: &str) -> Result<Post, Self::Error>;
    async fn health(&self) -> Result<Health, Self::Error>;
}
