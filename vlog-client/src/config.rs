pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let api_url = lookup("VLOG_API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_url);
        let log_filter = lookup("VLOG_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_json = match lookup("VLOG_LOG_JSON") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid VLOG_LOG_JSON: {}", raw))?,
            None => defaults.log_json,
        };

        Ok(Self {
            api_url,
            log_filter,
            log_json,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
