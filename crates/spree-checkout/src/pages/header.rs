use crate::driver::PageDriver;
use crate::error::Result;

// The profile icon is the third button in the top navigation; it carries
// no accessible name of its own.
const PROFILE_ICON: &str = r#"role=navigation[name="Top"i] >> role=button >> nth=2"#;
const SHOW_ALL: &str = r#"role=navigation[name="Top"i] >> role=link[name="Shop All"i]"#;
const VIEW_BAG: &str = r#"role=link[name="Items in cart, View bag"i]"#;
const CHECK_OUT: &str = r#"role=link[name="Checkout"i]"#;

/// The persistent top navigation region.
pub struct Header {
    driver: PageDriver,
}

impl Header {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Opens the account menu.
    pub async fn click_profile_icon(&self) -> Result<()> {
        self.driver.click(PROFILE_ICON).await
    }

    /// Navigates to the full product listing and verifies arrival.
    pub async fn click_show_all(&self) -> Result<()> {
        self.driver.click(SHOW_ALL).await?;
        self.driver.wait_for_url("products").await?;
        self.driver.verify_url("products")
    }

    /// Opens the cart sidebar.
    pub async fn click_view_bag(&self) -> Result<()> {
        self.driver.click(VIEW_BAG).await
    }

    /// Proceeds from the cart to checkout. Callers wait for the address
    /// step themselves, since the destination depends on cart state.
    pub async fn click_check_out(&self) -> Result<()> {
        self.driver.click(CHECK_OUT).await
    }
}
