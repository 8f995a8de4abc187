use thiserror::Error;

#[derive(Debug, Error)]
pub enum VlogClientError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    RequestError(#[from] gloo_net::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
