//! Client configuration

/// Client configuration for connecting to the table service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `SEATMAP_BASE_URL` and `SEATMAP_TIMEOUT_SECS`, falling back to
    /// the defaults when unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SEATMAP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            timeout: std::env::var("SEATMAP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
