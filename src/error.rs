use thiserror::Error;

/// Error type for the end-to-end harness and scenarios.
///
/// Aggregates WebDriver failures (element not found, timeouts, navigation
/// errors), IO errors from diagnostic captures, and harness configuration
/// problems into a single type so scenarios can propagate with `?`.
#[derive(Error, Debug)]
pub enum TestError {
    /// WebDriver command failure (element lookup, navigation, timeout).
    #[error(transparent)]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
    /// IO failure while writing diagnostic output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Environment variable carried a value the harness cannot use.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    /// An element the scenario depends on lacks an expected attribute.
    #[error("Element is missing expected attribute {0:?}")]
    MissingAttribute(String),
}
