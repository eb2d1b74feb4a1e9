//! Shared authentication helper.

use thirtyfour::prelude::*;

use crate::{
    constant::{ADMIN_PASSWORD, ADMIN_USERNAME, ELEMENT_TIMEOUT, POLL_INTERVAL},
    error::TestError,
    session::TestSession,
};

/// Log into the application as the seeded administrator.
///
/// Navigates to the login page, submits the fixed admin credentials, and waits
/// until the Logout button is displayed, which confirms the session is
/// authenticated. Fails with the underlying WebDriver timeout error if the
/// button never appears.
pub async fn login_as_admin(session: &TestSession) -> Result<(), TestError> {
    let driver = &session.driver;

    driver.goto(session.page_url("/login")).await?;

    driver
        .find(By::Css("input[name='username']"))
        .await?
        .send_keys(ADMIN_USERNAME)
        .await?;
    driver
        .find(By::Css("input[name='password']"))
        .await?
        .send_keys(ADMIN_PASSWORD)
        .await?;
    driver
        .find(By::Css("button[type='submit']"))
        .await?
        .click()
        .await?;

    // Login is confirmed once the header renders its Logout button.
    let logout = driver
        .query(By::XPath("//button[normalize-space()='Logout']"))
        .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?;
    logout
        .wait_until()
        .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
        .displayed()
        .await?;

    Ok(())
}
