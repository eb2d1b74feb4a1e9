//! Crate creation scenario.

use thirtyfour::prelude::*;

use rustaceans_e2e::constant::{CRATE_VERSION, ELEMENT_TIMEOUT, POLL_INTERVAL, TEST_AUTHOR_NAME};
use rustaceans_e2e::prelude::*;

#[tokio::test]
#[ignore = "requires the application and a WebDriver server"]
/// Creating a crate yields a table row with the code, name, and author id
///
/// The author dropdown is searched for the rustacean named by
/// `TEST_AUTHOR_NAME`, so the rustacean scenario must have run at least once
/// against the same application instance.
async fn can_add_crate() -> Result<(), TestError> {
    let session = TestSession::start().await?;

    let result = add_crate(&session).await;

    session.quit().await?;
    result
}

async fn add_crate(session: &TestSession) -> Result<(), TestError> {
    let driver = &session.driver;

    auth::login_as_admin(session).await?;

    driver
        .find(By::XPath("//a[normalize-space()='Crates']"))
        .await?
        .click()
        .await?;
    driver
        .query(By::XPath("//a[contains(., 'Add new crate')]"))
        .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?
        .click()
        .await?;

    let code = fixtures::random_crate_code();
    let name = fixtures::unique_crate_name();

    driver
        .query(By::Css("input[name='code']"))
        .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?
        .send_keys(&code)
        .await?;
    driver
        .find(By::Css("input[name='name']"))
        .await?
        .send_keys(&name)
        .await?;
    driver
        .find(By::Css("input[name='version']"))
        .await?
        .send_keys(CRATE_VERSION)
        .await?;

    // Select the author and capture the rustacean id behind the option.
    let option = driver
        .find(By::XPath(&format!(
            "//select[@name='author']/option[contains(., '{TEST_AUTHOR_NAME}')]"
        )))
        .await?;
    let author_id = option
        .attr("value")
        .await?
        .ok_or_else(|| TestError::MissingAttribute("value".to_string()))?;
    option.click().await?;

    driver
        .find(By::Css("textarea[name='description']"))
        .await?
        .send_keys(&fixtures::run_description())
        .await?;
    driver
        .find(By::XPath("//button[normalize-space()='Save']"))
        .await?
        .click()
        .await?;

    let row = driver
        .query(By::XPath(&format!("//tr[contains(., '{name}')]")))
        .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?;
    let text = row.text().await?;
    assert!(
        text.contains(&code),
        "row for {name} is missing the code, got: {text}"
    );
    assert!(text.contains(&name), "row is missing the name, got: {text}");
    // TODO: assert CRATE_VERSION once the crates table displays the version column
    assert!(
        text.contains(&author_id),
        "row is missing the author id {author_id}, got: {text}"
    );
    tracing::info!("created crate row: {text}");

    Ok(())
}
