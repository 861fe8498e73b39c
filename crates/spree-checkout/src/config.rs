// Session configuration
//
// Everything here comes from the environment, with the demo storefront as
// the default target. Mirrors the knobs the original runner configuration
// exposed: base URL, headless toggle, browser choice.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default target storefront.
pub const DEFAULT_BASE_URL: &str = "https://demo.spreecommerce.org/";

/// Default bound for visibility and navigation waits.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser engine to drive the session with.
///
/// The storefront flow is engine-agnostic; firefox is the default because
/// it is the engine the flow is routinely exercised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    Chromium,
    #[default]
    Firefox,
    Webkit,
}

impl BrowserKind {
    /// Parses a `BROWSER` environment value. Unknown values fall back to
    /// the default engine rather than failing the run.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "chromium" => Self::Chromium,
            "webkit" => Self::Webkit,
            _ => Self::Firefox,
        }
    }
}

/// Settings for one browser session against the storefront.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the storefront under test.
    pub base_url: String,
    /// Host part of `base_url`; `open_home_page` asserts the post-navigation
    /// URL contains it.
    pub host: String,
    pub headless: bool,
    pub browser: BrowserKind,
    /// Wait budget applied to every visibility gate and navigation wait.
    pub wait_timeout: Duration,
}

impl Config {
    /// Builds a config from `BASE_URL`, `HEADLESS` and `BROWSER`.
    ///
    /// `HEADLESS` is on unless set to the literal string `false`, matching
    /// the original runner's semantics.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let headless = std::env::var("HEADLESS").as_deref() != Ok("false");
        let browser = std::env::var("BROWSER")
            .map(|v| BrowserKind::parse(&v))
            .unwrap_or_default();
        Self::new(base_url, headless, browser)
    }

    /// Builds a config for an explicit target, deriving the host to verify
    /// navigation against.
    pub fn new(base_url: String, headless: bool, browser: BrowserKind) -> Result<Self> {
        let host = Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| Error::InvalidBaseUrl {
                url: base_url.clone(),
            })?;
        Ok(Self {
            base_url,
            host,
            headless,
            browser,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_the_demo_storefront() {
        let config = Config::new(DEFAULT_BASE_URL.to_string(), true, BrowserKind::default())
            .expect("default base URL must parse");
        assert_eq!(config.host, "demo.spreecommerce.org");
        assert_eq!(config.browser, BrowserKind::Firefox);
        assert_eq!(config.wait_timeout, DEFAULT_WAIT_TIMEOUT);
    }

    #[test]
    fn host_is_derived_from_custom_base_url() {
        let config = Config::new(
            "http://127.0.0.1:4700/".to_string(),
            true,
            BrowserKind::Chromium,
        )
        .expect("local base URL must parse");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn base_url_without_host_is_rejected() {
        let err = Config::new("not a url".to_string(), true, BrowserKind::Firefox)
            .expect_err("bogus base URL must be rejected");
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn browser_kind_parses_known_engines() {
        assert_eq!(BrowserKind::parse("chromium"), BrowserKind::Chromium);
        assert_eq!(BrowserKind::parse("WebKit"), BrowserKind::Webkit);
        assert_eq!(BrowserKind::parse("firefox"), BrowserKind::Firefox);
        // Unknown values fall back rather than abort a run.
        assert_eq!(BrowserKind::parse("ie11"), BrowserKind::Firefox);
    }
}
