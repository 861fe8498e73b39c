use crate::data::User;
use crate::driver::PageDriver;
use crate::error::Result;
use crate::selector;

const ORDER_CONFIRMED: &str = r#"role=heading[name="Your order is confirmed!"i]"#;
const PAID: &str = "text=Paid";

/// The order confirmation page. Purely observational.
pub struct StatusPage {
    driver: PageDriver,
}

impl StatusPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Asserts the personalized thank-you heading, the confirmation
    /// heading, and the paid status label.
    pub async fn verify_order(&self, user: &User) -> Result<()> {
        let thanks = selector::by_role(
            "heading",
            &format!("Thanks {} for your order!", user.first_name),
        );
        self.driver.ensure_visible(&thanks).await?;
        self.driver.ensure_visible(ORDER_CONFIRMED).await?;
        self.driver.ensure_visible(PAID).await
    }
}
