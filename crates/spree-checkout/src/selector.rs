// Selector builders
//
// The bindings forward selector strings verbatim to the Playwright server,
// so the role/text engines and `>>` chaining are available without any
// wrapper API. These helpers keep the page objects free of format! noise
// and pin the exact engine syntax in one place.
//
// Selectors are plain strings: nothing is resolved until an action runs,
// so a selector built once stays valid across full-page navigations.

/// Selector for an element by ARIA role and accessible name.
///
/// The name match is case-insensitive, like the default accessible-name
/// lookup in Playwright's role queries.
pub fn by_role(role: &str, name: &str) -> String {
    format!(r#"role={role}[name="{name}"i]"#)
}

/// Same as [`by_role`] but the accessible name must match exactly,
/// including case.
pub fn by_role_exact(role: &str, name: &str) -> String {
    format!(r#"role={role}[name="{name}"]"#)
}

/// Selector for an element whose accessible name matches a regex,
/// case-insensitively.
pub fn by_role_name_regex(role: &str, pattern: &str) -> String {
    format!("role={role}[name=/{pattern}/i]")
}

/// Selector matching an element containing `text` (trimmed, substring,
/// case-insensitive).
pub fn by_text(text: &str) -> String {
    format!("text={text}")
}

/// Selector matching an element whose text equals `text` exactly.
pub fn by_text_exact(text: &str) -> String {
    format!(r#"text="{text}""#)
}

/// Selector matching an element whose text contains a case-insensitive
/// regex match for `pattern`. The pattern is passed through unescaped.
pub fn by_text_regex(pattern: &str) -> String {
    format!("text=/{pattern}/i")
}

/// Derives the URL slug the storefront uses for a product page: the name
/// lowercased with whitespace runs replaced by single dashes.
pub fn product_slug(product_name: &str) -> String {
    product_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// A nested locator-resolution context for elements inside an embedded
/// frame.
///
/// Fields hosted in a third-party iframe are not reachable from the
/// top-level document; their selectors must be resolved inside the frame's
/// own document. `FrameScope` carries the selector of the iframe element
/// and prefixes every inner selector with the frame-entry hop, producing
/// the same chain Playwright's frame locators compile to. The scope's own
/// selector is exposed so callers can verify the frame element is visible
/// before touching anything inside it.
#[derive(Debug, Clone)]
pub struct FrameScope {
    frame_selector: String,
}

impl FrameScope {
    pub fn new(frame_selector: impl Into<String>) -> Self {
        Self {
            frame_selector: frame_selector.into(),
        }
    }

    /// Selector of the iframe element itself, in the outer document.
    pub fn selector(&self) -> &str {
        &self.frame_selector
    }

    /// Selector for an element inside the frame's document.
    pub fn inner(&self, selector: &str) -> String {
        format!(
            "{} >> internal:control=enter-frame >> {}",
            self.frame_selector, selector
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_selector_is_case_insensitive_by_default() {
        assert_eq!(
            by_role("button", "Add To Cart"),
            r#"role=button[name="Add To Cart"i]"#
        );
    }

    #[test]
    fn exact_role_selector_omits_the_flag() {
        assert_eq!(by_role_exact("textbox", "Email"), r#"role=textbox[name="Email"]"#);
    }

    #[test]
    fn role_name_regex_selector() {
        assert_eq!(
            by_role_name_regex("link", "Classic Fit Tee"),
            "role=link[name=/Classic Fit Tee/i]"
        );
    }

    #[test]
    fn text_selectors() {
        assert_eq!(by_text("Paid"), "text=Paid");
        assert_eq!(by_text_exact("John Smith"), r#"text="John Smith""#);
        assert_eq!(by_text_regex("42 Baker Street"), "text=/42 Baker Street/i");
    }

    #[test]
    fn slug_lowercases_and_dash_joins() {
        assert_eq!(product_slug("Classic Fit Tee"), "classic-fit-tee");
        assert_eq!(product_slug("Basic Fit Tee"), "basic-fit-tee");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(product_slug("  Long   Sleeve\tShirt "), "long-sleeve-shirt");
    }

    #[test]
    fn frame_scope_prefixes_inner_selectors() {
        let scope = FrameScope::new(r#"iframe[name^="__privateStripeFrame"] >> nth=0"#);
        assert_eq!(
            scope.inner("#Field-numberInput"),
            r#"iframe[name^="__privateStripeFrame"] >> nth=0 >> internal:control=enter-frame >> #Field-numberInput"#
        );
        assert_eq!(
            scope.selector(),
            r#"iframe[name^="__privateStripeFrame"] >> nth=0"#
        );
    }
}
