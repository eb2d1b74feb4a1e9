//! Fixed values shared across the end-to-end scenarios.
//!
//! This module defines the credentials, URLs, and timing constants used by every
//! browser scenario. The credentials are the seeded administrator account of the
//! application under test, not real secrets.

use std::time::Duration;

/// Username of the seeded administrator account.
pub static ADMIN_USERNAME: &str = "admin@example.com";

/// Password of the seeded administrator account.
pub static ADMIN_PASSWORD: &str = "password123";

/// Name used for rustaceans created by the suite.
///
/// The crate-creation scenario selects its author by this name, so it relies on
/// the rustacean-creation scenario having run at least once against the same
/// application instance.
pub static TEST_AUTHOR_NAME: &str = "E2E Test";

/// Version string entered into the crate form.
pub static CRATE_VERSION: &str = "1.0.0";

/// Base URL of the application under test when `E2E_BASE_URL` is unset.
pub static DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// WebDriver server URL when `E2E_WEBDRIVER_URL` is unset.
pub static DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Relative path of the screenshot written when the rustacean scenario fails.
pub static RUSTACEAN_FAILURE_SCREENSHOT: &str = "rustaceans-failure.png";

/// Maximum time to wait for an element to appear or become visible.
pub const ELEMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between element polling attempts.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);
