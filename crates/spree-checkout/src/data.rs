// Data records for the checkout flow
//
// Fixture-backed records are deserialized from the JSON files under
// `data/`; the user record is generated fresh per run so every sign-up
// hits the storefront with an unused email.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Account holder for one run. Generated once, immutable afterwards; the
/// delivery and status pages verify its fields against on-screen labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Full name as the storefront displays it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Shipping address, loaded from `data/address.json`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub street_address: String,
    pub city: String,
    pub postal: String,
}

/// Card details, loaded from `data/payment.json`. Write-only: filled into
/// the payment form, never re-read.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub card_number: String,
    pub expiration_date: String,
    pub security_code: String,
}

/// One cart line, loaded from `data/products.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    /// Requested quantity. The product page starts at one, so adding a
    /// quantity of `count` takes `count - 1` increment clicks.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Size variant to pick; products without variants leave this unset
    /// and the size step is skipped entirely.
    #[serde(default)]
    pub size: Option<String>,
    /// Unit price, used to compute expected line and cart totals.
    #[serde(default)]
    pub price: Option<f64>,
}

fn default_count() -> u32 {
    1
}

impl Product {
    /// How many quantity-increment clicks this line needs.
    pub fn increment_clicks(&self) -> u32 {
        self.count.saturating_sub(1)
    }

    pub fn unit_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Fixture {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::FixtureFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the product list fixture.
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    load_fixture(path.as_ref())
}

/// Loads the shipping address fixture.
pub fn load_address(path: impl AsRef<Path>) -> Result<Address> {
    load_fixture(path.as_ref())
}

/// Loads the card details fixture.
pub fn load_payment(path: impl AsRef<Path>) -> Result<Payment> {
    load_fixture(path.as_ref())
}

const FIRST_NAMES: &[&str] = &[
    "James", "Oliver", "Henry", "Theodore", "Lucas", "William", "Benjamin", "Levi",
    "Sebastian", "Daniel",
];

const LAST_NAME: &str = "Smith";

/// Generates a user with a fresh email address.
///
/// The email embeds the lowercased first name plus a six-digit suffix
/// (`auto.henry.583204@test.com`) so repeated runs register distinct
/// accounts; the last name is fixed.
pub fn generate_user() -> User {
    let mut rng = rand::rng();
    let first_name = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let suffix: u32 = rng.random_range(100_000..1_000_000);
    User {
        first_name: first_name.to_string(),
        last_name: LAST_NAME.to_string(),
        email: format!("auto.{}.{}@test.com", first_name.to_lowercase(), suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_count_defaults_to_one() {
        let product: Product =
            serde_json::from_str(r#"{ "productName": "Basic Fit Tee" }"#).expect("valid product");
        assert_eq!(product.count, 1);
        assert_eq!(product.size, None);
        assert_eq!(product.price, None);
    }

    #[test]
    fn product_parses_all_fields() {
        let product: Product = serde_json::from_str(
            r#"{ "productName": "Classic Fit Tee", "count": 2, "size": "M", "price": 14.99 }"#,
        )
        .expect("valid product");
        assert_eq!(product.product_name, "Classic Fit Tee");
        assert_eq!(product.count, 2);
        assert_eq!(product.size.as_deref(), Some("M"));
        assert_eq!(product.unit_price(), 14.99);
    }

    #[test]
    fn increment_clicks_is_count_minus_one() {
        let mut product: Product =
            serde_json::from_str(r#"{ "productName": "Tee" }"#).expect("valid product");
        assert_eq!(product.increment_clicks(), 0);
        product.count = 4;
        assert_eq!(product.increment_clicks(), 3);
        // A zero count cannot underflow.
        product.count = 0;
        assert_eq!(product.increment_clicks(), 0);
    }

    #[test]
    fn address_parses_camel_case_fields() {
        let address: Address = serde_json::from_str(
            r#"{
                "country": "United States",
                "streetAddress": "42 Baker Street",
                "city": "Springfield",
                "postal": "62704"
            }"#,
        )
        .expect("valid address");
        assert_eq!(address.street_address, "42 Baker Street");
        assert_eq!(address.postal, "62704");
    }

    #[test]
    fn generated_email_embeds_first_name_and_suffix() {
        let pattern = regex::Regex::new(r"^auto\.[a-z]+\.\d{6}@test\.com$").expect("valid regex");
        for _ in 0..20 {
            let user = generate_user();
            assert!(
                pattern.is_match(&user.email),
                "unexpected email shape: {}",
                user.email
            );
            assert!(user
                .email
                .contains(&format!("auto.{}.", user.first_name.to_lowercase())));
            assert_eq!(user.last_name, LAST_NAME);
        }
    }

    #[test]
    fn full_name_joins_with_a_space() {
        let user = User {
            first_name: "Henry".to_string(),
            last_name: "Smith".to_string(),
            email: "auto.henry.123456@test.com".to_string(),
        };
        assert_eq!(user.full_name(), "Henry Smith");
    }

    #[test]
    fn missing_fixture_reports_the_path() {
        let err = load_products("data/does-not-exist.json").expect_err("must fail");
        match err {
            Error::Fixture { path, .. } => {
                assert!(path.ends_with("does-not-exist.json"));
            }
            other => panic!("expected Fixture error, got {other:?}"),
        }
    }
}
