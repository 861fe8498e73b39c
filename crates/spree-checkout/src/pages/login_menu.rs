use crate::driver::PageDriver;
use crate::error::Result;

/// Fixed password used for every generated account. The storefront only
/// requires that password and confirmation match.
pub const NEW_USER_PASSWORD: &str = "Test@12345";

const SIGN_UP_LINK: &str = r#"role=link[name="Sign Up"i]"#;
const SIGN_UP_HEADING: &str = r#"role=heading[name="Sign Up"i]"#;
// Exact accessible names: "Email" must not match "Email Confirmation"-style
// fields, and "Password" must not match the confirmation box.
const EMAIL: &str = r#"role=textbox[name="Email"]"#;
const PASSWORD: &str = r#"role=textbox[name="Password"]"#;
const PASSWORD_CONFIRMATION: &str = r#"role=textbox[name="Password Confirmation"i]"#;
const SIGN_UP_BUTTON: &str = r#"role=button[name="Sign Up"i]"#;

/// The account menu's sign-up sub-flow.
pub struct LoginMenu {
    driver: PageDriver,
}

impl LoginMenu {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Registers a new account with the given email and the fixed
    /// password pair. Each step's visibility check gates the next; the
    /// account creation itself is a side effect in the storefront.
    pub async fn sign_up_new_user(&self, email: &str) -> Result<()> {
        self.driver.click(SIGN_UP_LINK).await?;
        self.driver.ensure_visible(SIGN_UP_HEADING).await?;
        self.driver.fill(EMAIL, email).await?;
        self.driver.fill(PASSWORD, NEW_USER_PASSWORD).await?;
        self.driver
            .fill(PASSWORD_CONFIRMATION, NEW_USER_PASSWORD)
            .await?;
        self.driver.click(SIGN_UP_BUTTON).await
    }
}
