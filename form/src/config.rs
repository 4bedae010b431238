use std::env;

use tracing::warn;

/// Default Airtable API host
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";

#[derive(Clone)]
pub struct Config {
    /// Personal access token sent as the bearer credential
    pub airtable_api_key: String,
    /// Airtable API host; overridden to point at a local stub
    pub airtable_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config = Self {
            airtable_api_key: env::var("AIRTABLE_API_KEY").unwrap_or_default(),
            airtable_api_url: env::var("AIRTABLE_API_URL")
                .unwrap_or_else(|_| DEFAULT_AIRTABLE_API_URL.to_string()),
        };

        if !config.has_api_key() {
            // Not fatal: Airtable will answer 401 and the form reports it.
            warn!("AIRTABLE_API_KEY is not set; submissions will be rejected");
        }

        config
    }

    /// Check if an API key was provided
    pub fn has_api_key(&self) -> bool {
        !self.airtable_api_key.is_empty()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("airtable_api_key", &"<redacted>")
            .field("airtable_api_url", &self.airtable_api_url)
            .finish()
    }
}
