use crate::data::{Address, User};
use crate::driver::PageDriver;
use crate::error::Result;
use crate::selector;

// The country picker is a native select, which exposes the combobox role.
const COUNTRY: &str = r#"role=combobox[name="Country"i]"#;
const FIRST_NAME: &str = r#"role=textbox[name="First name"i]"#;
const LAST_NAME: &str = r#"role=textbox[name="Last name"i]"#;
const STREET_ADDRESS: &str = r#"role=textbox[name="Street and house number"i]"#;
const CITY: &str = r#"role=textbox[name="City"i]"#;
const POSTAL_CODE: &str = r#"role=textbox[name="Postal Code"i]"#;
const SAVE_AND_CONTINUE: &str = r#"role=button[name="Save and Continue"i]"#;

/// The address step of checkout.
pub struct AddressPage {
    driver: PageDriver,
}

impl AddressPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Verifies the signed-in email is shown, fills the shipping form and
    /// continues to the delivery step.
    pub async fn input_address_details(&self, user: &User, address: &Address) -> Result<()> {
        self.driver
            .ensure_visible(&selector::by_text(&user.email))
            .await?;
        self.driver
            .select_by_label(COUNTRY, &address.country)
            .await?;
        self.driver.fill(FIRST_NAME, &user.first_name).await?;
        self.driver.fill(LAST_NAME, &user.last_name).await?;
        self.driver
            .fill(STREET_ADDRESS, &address.street_address)
            .await?;
        self.driver.fill(CITY, &address.city).await?;
        self.driver.fill(POSTAL_CODE, &address.postal).await?;
        self.driver.click(SAVE_AND_CONTINUE).await?;
        self.driver.wait_for_url("delivery").await?;
        self.driver.verify_url("delivery")
    }
}
