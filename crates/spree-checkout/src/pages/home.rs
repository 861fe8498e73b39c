use crate::driver::PageDriver;
use crate::error::Result;

const SIGN_UP_BANNER: &str = "text=Welcome! You have signed up";

/// The storefront landing page.
pub struct HomePage {
    driver: PageDriver,
}

impl HomePage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Navigates to the storefront root and verifies the landing URL.
    pub async fn open_home_page(&self) -> Result<()> {
        self.driver.open_home_page().await
    }

    /// Asserts the sign-up success banner is visible. Purely
    /// observational; the sign-up itself happens in the login menu.
    pub async fn verify_sign_up_succeeded(&self) -> Result<()> {
        self.driver.ensure_visible(SIGN_UP_BANNER).await
    }
}
