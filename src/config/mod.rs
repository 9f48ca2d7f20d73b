//! Backend configuration from the environment.

/// Default Ollama address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Where to reach the inference backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// Load from environment variables.
    ///
    /// `OLLAMA_BASE_URL` wins over `OLLAMA_HOST`; without either, the
    /// localhost default applies.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let base_url = std::env::var("OLLAMA_BASE_URL")
            .or_else(|_| std::env::var("OLLAMA_HOST"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(BackendConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn with_base_url_overrides() {
        let config = BackendConfig::default().with_base_url("http://gpu-box:11434");
        assert_eq!(config.base_url, "http://gpu-box:11434");
    }
}
