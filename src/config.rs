//! Harness configuration from environment variables.
//!
//! Every setting has a localhost default so the suite runs unconfigured against
//! a local application and WebDriver server. A `.env` file is honoured the same
//! way the rest of our tooling honours it.

use crate::{
    constant::{DEFAULT_BASE_URL, DEFAULT_WEBDRIVER_URL},
    error::TestError,
};

/// Resolved configuration for one browser session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the application under test.
    pub base_url: String,
    /// URL of the WebDriver server (chromedriver or Selenium).
    pub webdriver_url: String,
    /// Whether the browser runs headless.
    pub headless: bool,
}

impl Config {
    /// Build a configuration from the environment.
    ///
    /// Reads `E2E_BASE_URL`, `E2E_WEBDRIVER_URL`, and `E2E_HEADLESS`, falling
    /// back to localhost defaults and headless mode when unset.
    pub fn from_env() -> Result<Self, TestError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("E2E_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let webdriver_url = std::env::var("E2E_WEBDRIVER_URL")
            .unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string());
        let headless = match std::env::var("E2E_HEADLESS") {
            Ok(value) => parse_bool("E2E_HEADLESS", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            base_url,
            webdriver_url,
            headless,
        })
    }

    /// Join a path onto the base URL, normalizing slashes.
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, TestError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(TestError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {value:?}"),
        }),
    }
}
