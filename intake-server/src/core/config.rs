//! Server configuration

/// Server configuration, loaded from environment variables
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | DATABASE_PATH | ./data.db | SQLite database file |
/// | FRONTEND_ORIGINS | http://localhost:3000 | comma-separated allowed CORS origins |
/// | FRONTEND_ORIGIN_PATTERN | (unset) | regex matching additional allowed origins |
/// | EXTRACT_API_URL | https://api.openai.com/v1/chat/completions | assisted extraction endpoint |
/// | EXTRACT_API_KEY | (unset) | provider credential; absence disables assisted matching |
/// | EXTRACT_TIMEOUT_MS | 10000 | assisted call timeout (milliseconds) |
/// | LOG_LEVEL | info | tracing level filter |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// SQLite database file, created on first start
    pub database_path: String,
    /// Exact-match CORS origins
    pub frontend_origins: Vec<String>,
    /// Optional regex matching additional allowed origins
    pub frontend_origin_pattern: Option<String>,
    /// Assisted extraction provider endpoint
    pub extract_api_url: String,
    /// Provider credential; `None` disables the assisted strategy
    pub extract_api_key: Option<String>,
    /// Timeout for the assisted extraction call
    pub extract_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./data.db".into()),
            frontend_origins: std::env::var("FRONTEND_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            frontend_origin_pattern: std::env::var("FRONTEND_ORIGIN_PATTERN")
                .ok()
                .filter(|p| !p.is_empty()),
            extract_api_url: std::env::var("EXTRACT_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
            extract_api_key: std::env::var("EXTRACT_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            extract_timeout_ms: std::env::var("EXTRACT_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Override the listen port and database path
    ///
    /// Used in tests
    pub fn with_overrides(http_port: u16, database_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.database_path = database_path.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
