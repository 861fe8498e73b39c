//! spree-checkout: page-object automation of the Spree demo storefront
//!
//! Drives a full purchase journey (sign-up, browse, cart, address,
//! delivery, payment, confirmation) through the `playwright-rs` bindings.
//! The page objects encapsulate selectors and user actions per screen;
//! the shared [`PageDriver`] supplies the visibility-gated interaction
//! primitives they are all built from.
//!
//! # Example
//!
//! ```ignore
//! use spree_checkout::{generate_user, Config, PageFactory, Session};
//!
//! #[tokio::main]
//! async fn main() -> spree_checkout::Result<()> {
//!     let config = Config::from_env()?;
//!     let session = Session::launch(&config).await?;
//!     let pages = PageFactory::new(session.page().clone(), config);
//!     let user = generate_user();
//!
//!     pages.home_page.open_home_page().await?;
//!     pages.header.click_profile_icon().await?;
//!     pages.login_menu.sign_up_new_user(&user.email).await?;
//!     pages.home_page.verify_sign_up_succeeded().await?;
//!
//!     session.close().await
//! }
//! ```

mod config;
mod data;
mod driver;
mod error;
mod pages;
mod selector;
mod session;

pub use config::{BrowserKind, Config, DEFAULT_BASE_URL, DEFAULT_WAIT_TIMEOUT};
pub use data::{
    generate_user, load_address, load_payment, load_products, Address, Payment, Product, User,
};
pub use driver::PageDriver;
pub use error::{Error, Result};
pub use pages::{
    AddressPage, DeliveryPage, Header, HomePage, LoginMenu, PageFactory, PaymentPage,
    ProductsPage, StatusPage, NEW_USER_PASSWORD,
};
pub use selector::FrameScope;
pub use session::Session;
