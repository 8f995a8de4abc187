use crate::error::VlogClientError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use vlog_core::{Health, NewComment, Post, PostForm, VlogApi};

#[derive(Clone)]
pub struct VlogClientHttp {
    client: Arc<Client>,
    base_url: String,
}

impl VlogClientHttp {
    pub async fn connect(endpoint: &str) -> Result<Self, VlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(VlogClientError::InvalidRequest(
                "Endpoint must not be empty".to_string(),
            ));
        }
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Universal send: a success body is decoded, anything else becomes an Http error
    async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, VlogClientError> {
        let resp = req.send().await?;

        if resp.status().is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(VlogClientError::from_http_response(resp).await)
        }
    }

    async fn send_empty(req: RequestBuilder) -> Result<(), VlogClientError> {
        let resp = req.send().await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(VlogClientError::from_http_response(resp).await)
        }
    }
}

fn require_id<'a>(what: &str, id: &'a str) -> Result<&'a str, VlogClientError> {
    if id.trim().is_empty() {
        return Err(VlogClientError::InvalidRequest(format!(
            "{what} id must not be empty"
        )));
    }
    Ok(id)
}

#[async_trait(?Send)]
impl VlogApi for VlogClientHttp {
    type Error = VlogClientError;

    async fn list_posts(&self) -> Result<Vec<Post>, VlogClientError> {
        Self::send(self.client.get(self.url("/posts"))).await
    }

    async fn create_post(&self, form: &PostForm) -> Result<Option<Post>, VlogClientError> {
        let resp = self
            .client
            .post(self.url("/posts"))
            .json(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(VlogClientError::from_http_response(resp).await);
        }

        let body = resp.text().await?;
        Ok(Post::from_create_response(&body))
    }

    async fn like_post(&self, post_id: &str) -> Result<(), VlogClientError> {
        let id = require_id("Post", post_id)?;
        Self::send_empty(self.client.post(self.url(&format!("/posts/{id}/like")))).await
    }

    async fn add_comment(
        &self,
        post_id: &str,
        comment: &NewComment,
    ) -> Result<(), VlogClientError> {
        let id = require_id("Post", post_id)?;
        let req = self
            .client
            .post(self.url(&format!("/posts/{id}/comments")))
            .json(comment);
        Self::send_empty(req).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), VlogClientError> {
        let id = require_id("Post", post_id)?;
        Self::send_empty(self.client.delete(self.url(&format!("/posts/{id}")))).await
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), VlogClientError> {
        let id = require_id("Comment", comment_id)?;
        Self::send_empty(self.client.delete(self.url(&format!("/comments/{id}")))).await
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, VlogClientError> {
        let id = require_id("Post", post_id)?;
        Self::send(self.client.get(self.url(&format!("/posts/{id}")))).await
    }

    async fn health(&self) -> Result<Health, VlogClientError> {
        Self::send(self.client.get(self.url("/"))).await
    }
}
