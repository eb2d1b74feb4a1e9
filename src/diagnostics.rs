//! Failure diagnostics for browser scenarios.

use std::path::Path;

use thirtyfour::prelude::*;

use crate::error::TestError;

/// Capture a screenshot and the page markup after a scenario failure.
///
/// Writes a full-page PNG to `path` and logs the current page source so the
/// DOM state at the moment of failure appears in the test output. The caller
/// is expected to re-raise its original error afterwards.
pub async fn capture_failure(driver: &WebDriver, path: &Path) -> Result<(), TestError> {
    driver.screenshot(path).await?;
    tracing::error!("wrote failure screenshot to {}", path.display());

    let source = driver.source().await?;
    tracing::error!("page source at failure:\n{source}");

    Ok(())
}
