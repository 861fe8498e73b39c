// Error types for the checkout flow

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for checkout-flow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the page-object layer.
///
/// The first three variants are the only failure modes the wrappers
/// themselves produce; everything they gate on resolves to one of them.
/// None of them is recoverable inside the wrapper layer: a failed wait or
/// check aborts the current flow.
#[derive(Debug, Error)]
pub enum Error {
    /// An expected element never became visible within the wait budget.
    ///
    /// Every interaction is preceded by this wait; exhaustion means the
    /// page never reached the state the flow assumed.
    #[error("element '{selector}' was not visible after {timeout:?}")]
    VisibilityTimeout { selector: String, timeout: Duration },

    /// The page URL does not contain the expected fragment.
    ///
    /// Raised either by the immediate containment check or when a bounded
    /// navigation wait runs out; `url` is the last URL observed.
    #[error("expected URL containing '{expected}', got '{url}'")]
    NavigationMismatch { expected: String, url: String },

    /// No option or element matched a required label or text filter.
    #[error("no match for '{label}' in '{selector}'")]
    SelectionMismatch { selector: String, label: String },

    /// Error surfaced by the underlying browser bindings.
    #[error("browser driver error: {0}")]
    Driver(#[from] playwright_rs::Error),

    /// A fixture file could not be read.
    #[error("failed to read fixture '{}'", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file could not be parsed.
    #[error("failed to parse fixture '{}'", path.display())]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid absolute URL with a host.
    #[error("invalid base URL '{url}'")]
    InvalidBaseUrl { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_timeout_names_the_selector() {
        let err = Error::VisibilityTimeout {
            selector: "role=button[name=\"Sign Up\"]".to_string(),
            timeout: Duration::from_secs(10),
        };
        let message = err.to_string();
        assert!(message.contains("role=button[name=\"Sign Up\"]"));
        assert!(message.contains("10s"));
    }

    #[test]
    fn navigation_mismatch_carries_both_urls() {
        let err = Error::NavigationMismatch {
            expected: "delivery".to_string(),
            url: "https://demo.spreecommerce.org/checkout/address".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'delivery'"));
        assert!(message.contains("/checkout/address"));
    }
}
