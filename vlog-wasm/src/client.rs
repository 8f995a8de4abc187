use crate::error::VlogClientError;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use vlog_core::{Confirm, Health, NewComment, Post, PostForm, VlogApi};

#[derive(Clone)]
pub struct VlogClientHttp {
    pub base_url: String,
}

impl VlogClientHttp {
    pub fn new(endpoint: &str) -> Self {
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Common send path: a success body is decoded, anything else becomes an Http error
    async fn send<T: DeserializeOwned>(request: Request) -> Result<T, VlogClientError> {
        let response = request.send().await?;

        if response.ok() {
            response.json().await.map_err(VlogClientError::from)
        } else {
            Err(Self::http_error(response).await)
        }
    }

    async fn send_empty(request: Request) -> Result<(), VlogClientError> {
        let response = request.send().await?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::http_error(response).await)
        }
    }

    async fn http_error(response: Response) -> VlogClientError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        VlogClientError::Http { status, message }
    }
}

fn require_id<'a>(id: &'a str) -> Result<&'a str, VlogClientError> {
    if id.trim().is_empty() {
        return Err(VlogClientError::InvalidRequest("empty id".to_string()));
    }
    Ok(id)
}

#[async_trait(?Send)]
impl VlogApi for VlogClientHttp {
    type Error = VlogClientError;

    async fn list_posts(&self) -> Result<Vec<Post>, VlogClientError> {
        let request = Request::get(&self.url("/posts")).build()?;
        Self::send(request).await
    }

    async fn create_post(&self, form: &PostForm) -> Result<Option<Post>, VlogClientError> {
        let request = Request::post(&self.url("/posts")).json(form)?;
        let response = request.send().await?;

        if !response.ok() {
            return Err(Self::http_error(response).await);
        }

        // The created post is optional; the page refetches regardless.
        let body = response.text().await?;
        Ok(Post::from_create_response(&body))
    }

    async fn like_post(&self, post_id: &str) -> Result<(), VlogClientError> {
        let id = require_id(post_id)?;
        let request = Request::post(&self.url(&format!("/posts/{id}/like"))).build()?;
        Self::send_empty(request).await
    }

    async fn add_comment(
        &self,
        post_id: &str,
        comment: &NewComment,
    ) -> Result<(), VlogClientError> {
        let id = require_id(post_id)?;
        let request = Request::post(&self.url(&format!("/posts/{id}/comments"))).json(comment)?;
        Self::send_empty(request).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), VlogClientError> {
        let id = require_id(post_id)?;
        let request = Request::delete(&self.url(&format!("/posts/{id}"))).build()?;
        Self::send_empty(request).await
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), VlogClientError> {
        let id = require_id(comment_id)?;
        let request = Request::delete(&self.url(&format!("/comments/{id}"))).build()?;
        Self::send_empty(request).await
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, VlogClientError> {
        let id = require_id(post_id)?;
        let request = Request::get(&self.url(&format!("/posts/{id}"))).build()?;
        Self::send(request).await
    }

    async fn health(&self) -> Result<Health, VlogClientError> {
        let request = Request::get(&self.url("/")).build()?;
        Self::send(request).await
    }
}

/// The browser's blocking `confirm()` dialog.
#[derive(Clone, Copy)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        gloo_dialogs::confirm(prompt)
    }
}
