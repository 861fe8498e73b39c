use playwright_rs::Page;

use crate::config::Config;
use crate::driver::PageDriver;
use crate::pages::{
    AddressPage, DeliveryPage, Header, HomePage, LoginMenu, PaymentPage, ProductsPage, StatusPage,
};

/// Composition root: builds one instance of every page object, all bound
/// to the same browser page. No behavior beyond wiring.
///
/// The page handle is injected here and nowhere else; no wrapper assumes
/// exclusive ownership of it.
pub struct PageFactory {
    pub home_page: HomePage,
    pub login_menu: LoginMenu,
    pub header: Header,
    pub products_page: ProductsPage,
    pub address_page: AddressPage,
    pub delivery_page: DeliveryPage,
    pub payment_page: PaymentPage,
    pub status_page: StatusPage,
}

impl PageFactory {
    pub fn new(page: Page, config: Config) -> Self {
        let driver = PageDriver::new(page, config);
        Self {
            home_page: HomePage::new(driver.clone()),
            login_menu: LoginMenu::new(driver.clone()),
            header: Header::new(driver.clone()),
            products_page: ProductsPage::new(driver.clone()),
            address_page: AddressPage::new(driver.clone()),
            delivery_page: DeliveryPage::new(driver.clone()),
            payment_page: PaymentPage::new(driver.clone()),
            status_page: StatusPage::new(driver),
        }
    }
}
