use crate::data::{Address, User};
use crate::driver::PageDriver;
use crate::error::Result;
use crate::selector;

const SAVE_AND_CONTINUE: &str = r#"role=button[name="Save and Continue"i]"#;

/// The delivery step of checkout. Observational except for the final
/// continue click: it re-verifies what the address step entered.
pub struct DeliveryPage {
    driver: PageDriver,
}

impl DeliveryPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Asserts the full name and email exactly and the street address as a
    /// case-insensitive substring, then continues to the payment step.
    pub async fn verify_delivery_details(&self, user: &User, address: &Address) -> Result<()> {
        self.driver
            .ensure_visible(&selector::by_text_exact(&user.full_name()))
            .await?;
        self.driver
            .ensure_visible(&selector::by_text_exact(&user.email))
            .await?;
        // The address text is used as a pattern verbatim, matching the
        // flow's historical behavior.
        self.driver
            .ensure_visible(&selector::by_text_regex(&address.street_address))
            .await?;
        self.driver.click(SAVE_AND_CONTINUE).await?;
        self.driver.wait_for_url("payment").await?;
        self.driver.verify_url("payment")
    }
}
