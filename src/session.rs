//! Browser session lifecycle for end-to-end scenarios.
//!
//! Each scenario starts its own [`TestSession`], which connects a Chrome
//! session through the configured WebDriver server, and quits it at the end of
//! the test so no browser process is leaked.

use std::sync::Once;

use thirtyfour::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::TestError};

static INIT_TRACING: Once = Once::new();

/// One browser session plus the configuration it was built from.
pub struct TestSession {
    /// Handle to the live browser session.
    pub driver: WebDriver,
    /// Configuration resolved from the environment at startup.
    pub config: Config,
}

impl TestSession {
    /// Start a new browser session.
    ///
    /// Initialises tracing once per process, loads configuration from the
    /// environment, and connects a (by default headless) Chrome session to the
    /// WebDriver server.
    pub async fn start() -> Result<Self, TestError> {
        INIT_TRACING.call_once(|| {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_test_writer()
                .try_init()
                .ok();
        });

        let config = Config::from_env()?;

        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }

        let driver = WebDriver::new(&config.webdriver_url, caps).await?;

        Ok(Self { driver, config })
    }

    /// Join a path onto the configured base URL.
    pub fn page_url(&self, path: &str) -> String {
        self.config.page_url(path)
    }

    /// Close the browser session.
    ///
    /// Must be called explicitly; dropping the session leaves the browser
    /// window open on the WebDriver server.
    pub async fn quit(self) -> Result<(), TestError> {
        self.driver.quit().await?;
        Ok(())
    }
}
