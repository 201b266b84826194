/// API endpoint configuration

/// Base URL used unless `SRL_API_URL` is set at build time
pub const DEFAULT_API_URL: &str = "http://api.speedrunslive.com:81";

pub const STREAMS_PATH: &str = "/frontend/streams";
pub const LEGACY_STREAMS_PATH: &str = "/test/team";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub streams_path: String,
    pub legacy_streams_path: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            streams_path: STREAMS_PATH.to_string(),
            legacy_streams_path: LEGACY_STREAMS_PATH.to_string(),
        }
    }

    pub fn streams_url(&self) -> String {
        self.join(&self.streams_path)
    }

    /// Team endpoint of older API deployments, which serve the
    /// `{"channels": [{"channel": ...}]}` shape. Point `streams_path` here
    /// when building against one of those.
    pub fn legacy_streams_url(&self) -> String {
        self.join(&self.legacy_streams_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("SRL_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}
