//! Configuration for the caption service.

/// Configuration for the caption service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3000")
    pub bind_addr: String,
    /// Model identifier handed to the generation driver
    pub model: String,
}

impl ServerConfig {
    /// Create a new service configuration.
    pub fn new(bind_addr: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            model: model.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `MUCHA_BIND_ADDR` (default: "127.0.0.1:3000")
    /// - `MUCHA_MODEL` (default: "gemini-2.0-flash")
    ///
    /// The Gemini API key is read separately by the driver from
    /// `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("MUCHA_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let model =
            std::env::var("MUCHA_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        Self { bind_addr, model }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1:3000", "gemini-2.0-flash")
    }
}
