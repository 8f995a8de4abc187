mod error;
mod http_client;

pub mod config;
pub mod logging;

pub use config::ClientConfig;
pub use error::VlogClientError;
pub use http_client::VlogClientHttp;
pub use vlog_core;
