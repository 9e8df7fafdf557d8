//! Application configuration. Gemini credentials and endpoint.

use serde::Deserialize;

/// Gemini REST base URL (v1beta carries `tools.googleSearch`).
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Gemini Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from NICHE_NAV_API_KEY, GEMINI_API_KEY or API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// REST base URL. Read from NICHE_NAV_API_BASE.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Model name. Defaults to "gemini-3-pro-preview". Read from NICHE_NAV_MODEL.
    #[serde(default)]
    pub model: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("NICHE_NAV_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment overrides the file.
        c = c.add_source(config::Environment::with_prefix("NICHE_NAV"));
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Falls back to GEMINI_API_KEY, then API_KEY.
    /// A blank value counts as unset and falls through to the next source.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    fn api_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        let present = |k: &String| !k.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| env("GEMINI_API_KEY").filter(present))
            .or_else(|| env("API_KEY").filter(present))
    }

    /// Returns the REST base URL without a trailing slash.
    pub fn api_base_or_default(&self) -> String {
        self.api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns the model name. Defaults to DEFAULT_MODEL.
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}
