use crate::data::Payment;
use crate::driver::PageDriver;
use crate::error::Result;
use crate::selector::FrameScope;

// The card fields live inside the first Stripe-hosted iframe, a separate
// document from the checkout page.
const STRIPE_FRAME: &str = r#"iframe[name^="__privateStripeFrame"] >> nth=0"#;
const CARD_NUMBER: &str = "#Field-numberInput";
const EXPIRATION_DATE: &str = "#Field-expiryInput";
const SECURITY_CODE: &str = "#Field-cvcInput";
const PAY_NOW: &str = r#"role=button[name="Pay now"i]"#;

/// The payment step of checkout.
pub struct PaymentPage {
    driver: PageDriver,
}

impl PaymentPage {
    pub(crate) fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Fills the card fields inside the payment iframe, submits, and waits
    /// for the completion step.
    ///
    /// The frame element itself is verified visible before any selector is
    /// resolved inside it; the field selectors then resolve in the frame's
    /// document, not the top-level one.
    pub async fn input_payment_details(&self, payment: &Payment) -> Result<()> {
        let frame = FrameScope::new(STRIPE_FRAME);
        self.driver.ensure_visible(frame.selector()).await?;
        self.driver
            .fill(&frame.inner(CARD_NUMBER), &payment.card_number)
            .await?;
        self.driver
            .fill(&frame.inner(EXPIRATION_DATE), &payment.expiration_date)
            .await?;
        self.driver
            .fill(&frame.inner(SECURITY_CODE), &payment.security_code)
            .await?;
        self.driver.click(PAY_NOW).await?;
        self.driver.wait_for_url("complete").await?;
        self.driver.verify_url("complete")
    }
}
