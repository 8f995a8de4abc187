use chrono::{DateTime, NaiveDateTime};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {}, likes: {} }}", id, title, likes)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub video_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Comment {{ id: {}, content: {} }}", id, content)]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /posts`. Doubles as the new-post form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub video_url: String,
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}

/// `GET /` answer of the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    VideoUrl,
}

impl PostForm {
    /// Presence check only, like a `required` input: whitespace counts as present.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.content, &self.video_url]
            .iter()
            .all(|f| !f.is_empty())
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Content => &self.content,
            FormField::VideoUrl => &self.video_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Content => self.content = value,
            FormField::VideoUrl => self.video_url = value,
        }
    }
}

impl Post {
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }

    /// Reads the body of a successful `POST /posts`. Some deployments echo the
    /// created post, others answer with nothing usable; the latter yields `None`.
    pub fn from_create_response(body: &str) -> Option<Post> {
        if body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(body) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::debug!(error = %e, "create response is not a post, relying on refetch");
                None
            }
        }
    }
}

impl Comment {
    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

// The service may send RFC 3339 or a naive ISO-8601 string without an offset.
fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
