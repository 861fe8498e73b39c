// Browser session setup
//
// One session is one Playwright server, one browser, one page. All page
// objects for a run are wired to the session's page by the factory; tests
// that run in parallel each launch their own session.

use playwright_rs::{Browser, LaunchOptions, Page, Playwright};

use crate::config::{BrowserKind, Config};
use crate::error::Result;

/// A live browser session against the storefront.
///
/// The playwright handle is kept alive for the lifetime of the session;
/// dropping it would tear down the server out from under the page.
pub struct Session {
    #[allow(dead_code)]
    playwright: Playwright,
    browser: Browser,
    page: Page,
}

impl Session {
    /// Launches the configured browser engine and opens one page.
    pub async fn launch(config: &Config) -> Result<Self> {
        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;
        let page = browser.new_page().await?;
        tracing::info!(browser = ?config.browser, headless = config.headless, "session ready");
        Ok(Self {
            playwright,
            browser,
            page,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Closes the browser. The Playwright server shuts down when the
    /// session is dropped.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}
