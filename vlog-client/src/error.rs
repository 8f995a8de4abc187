use thiserror::Error;

#[derive(Debug, Error)]
pub enum VlogClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl VlogClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        VlogClientError::Http { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VlogClientError::Http { status: 404, .. })
    }
}
