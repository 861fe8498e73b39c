// PageDriver - shared interaction primitives
//
// Every page object delegates to one of these instead of inheriting from a
// base type. The driver owns nothing exclusively: it holds a cheap clone of
// the shared page handle plus the session config, so page objects can each
// carry their own copy.
//
// The contract for every interaction is the same: wait (bounded) for the
// target to be visible, then act. No blind interaction is permitted; the
// bounded wait is the only resilience mechanism, and its exhaustion is
// fatal to the current flow.

use std::time::{Duration, Instant};

use playwright_rs::{expect, GotoOptions, Locator, Page, SelectOption, Viewport, WaitUntil};

use crate::config::Config;
use crate::error::{Error, Result};

/// Viewport applied before opening the home page, for consistent rendering.
const VIEWPORT: Viewport = Viewport {
    width: 1920,
    height: 1080,
};

/// Poll interval for the navigation wait. Matches the cadence of the
/// auto-retrying assertions in the underlying bindings.
const URL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared navigation and interaction primitives for page objects.
///
/// Cloning is cheap: the page handle is reference-counted internally and
/// all clones act on the same live browser page. Selectors are resolved
/// against the live DOM on every call, so a driver stays valid across
/// full-page navigations.
#[derive(Clone)]
pub struct PageDriver {
    page: Page,
    config: Config,
}

impl PageDriver {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    /// The underlying page handle, shared with every other page object in
    /// the session.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets the fixed viewport, navigates to the storefront root waiting
    /// for the `load` event, and verifies the landing URL contains the
    /// configured host.
    pub async fn open_home_page(&self) -> Result<()> {
        tracing::info!(base_url = %self.config.base_url, "opening home page");
        self.page.set_viewport_size(VIEWPORT).await?;
        self.page
            .goto(
                &self.config.base_url,
                Some(GotoOptions::new().wait_until(WaitUntil::Load)),
            )
            .await?;
        self.verify_url(&self.config.host)
    }

    /// Asserts the current URL contains `fragment` (case-sensitive).
    /// Pure check: no waiting, no side effects.
    pub fn verify_url(&self, fragment: &str) -> Result<()> {
        let url = self.page.url();
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(Error::NavigationMismatch {
                expected: fragment.to_string(),
                url,
            })
        }
    }

    /// Polls the current URL until it contains `fragment`, bounded by the
    /// configured wait budget. One wait, one deadline, then fail with the
    /// last URL observed.
    pub async fn wait_for_url(&self, fragment: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let url = self.page.url();
            if url.contains(fragment) {
                tracing::debug!(%url, fragment, "navigation observed");
                return Ok(());
            }
            if start.elapsed() >= self.config.wait_timeout {
                return Err(Error::NavigationMismatch {
                    expected: fragment.to_string(),
                    url,
                });
            }
            tokio::time::sleep(URL_POLL_INTERVAL).await;
        }
    }

    /// Waits for the element to be visible, bounded by the wait budget.
    /// Exhaustion raises a failure naming the selector.
    pub async fn ensure_visible(&self, selector: &str) -> Result<()> {
        let locator = self.locator(selector).await;
        expect(locator)
            .with_timeout(self.config.wait_timeout)
            .to_be_visible()
            .await
            .map_err(|err| self.visibility_error(selector, err))
    }

    /// Visibility-gated click.
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.ensure_visible(selector).await?;
        tracing::debug!(selector, "click");
        self.locator(selector).await.click(None).await?;
        Ok(())
    }

    /// Visibility-gated fill: replaces the element's content with `text`.
    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.ensure_visible(selector).await?;
        tracing::debug!(selector, "fill");
        self.locator(selector).await.fill(text, None).await?;
        Ok(())
    }

    /// Visibility-gated selection of the option whose visible label equals
    /// `label`. Fails with a selection mismatch if the control accepts the
    /// command but matches nothing.
    pub async fn select_by_label(&self, selector: &str, label: &str) -> Result<()> {
        self.ensure_visible(selector).await?;
        tracing::debug!(selector, label, "select option");
        let selected = self
            .locator(selector)
            .await
            .select_option(SelectOption::Label(label.to_string()), None)
            .await?;
        if selected.is_empty() {
            return Err(Error::SelectionMismatch {
                selector: selector.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Waits (bounded) for the element's text to contain `expected`.
    /// Used for values that settle asynchronously, like cart totals.
    pub async fn ensure_text_contains(&self, selector: &str, expected: &str) -> Result<()> {
        self.ensure_visible(selector).await?;
        expect(self.locator(selector).await)
            .with_timeout(self.config.wait_timeout)
            .to_contain_text(expected)
            .await
            .map_err(|err| match err {
                playwright_rs::Error::AssertionTimeout(_) => Error::SelectionMismatch {
                    selector: selector.to_string(),
                    label: expected.to_string(),
                },
                other => Error::Driver(other),
            })
    }

    /// Reads the current value of an input, after the visibility gate.
    pub async fn input_value(&self, selector: &str) -> Result<String> {
        self.ensure_visible(selector).await?;
        Ok(self.locator(selector).await.input_value(None).await?)
    }

    /// Resolves a locator against the live DOM. Called on every action so
    /// no element handle outlives a navigation.
    async fn locator(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    fn visibility_error(&self, selector: &str, err: playwright_rs::Error) -> Error {
        match err {
            playwright_rs::Error::AssertionTimeout(_) => Error::VisibilityTimeout {
                selector: selector.to_string(),
                timeout: self.config.wait_timeout,
            },
            other => Error::Driver(other),
        }
    }
}
