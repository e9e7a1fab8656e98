//! Wire types exchanged with the storefront backend.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub street: Vec<String>,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub postcode: String,
    pub country_id: String,
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Address {
    /// "Firstname Lastname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }

    /// Fields the backend needs to quote delivery options.
    pub fn estimation_fields(&self) -> EstimationFields {
        EstimationFields {
            country_id: self.country_id.clone(),
            region: self.region.clone(),
            postcode: self.postcode.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub carrier_code: String,
    pub method_code: String,
    pub carrier_title: String,
    pub method_title: String,
    pub amount: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub code: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalsItem {
    pub name: String,
    pub qty: u32,
    pub row_total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    #[serde(default)]
    pub items: Vec<TotalsItem>,
    pub subtotal: f64,
    #[serde(default)]
    pub shipping_amount: f64,
    #[serde(default)]
    pub tax_amount: f64,
    pub grand_total: f64,
    pub quote_currency_code: String,
}

impl CheckoutTotals {
    pub fn format(&self, amount: f64) -> String {
        format_price(amount, &self.quote_currency_code)
    }
}

/// Format an amount with its ISO currency code, e.g. "USD 12.50".
pub fn format_price(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{currency} {amount:.2}")
    }
}

/// Address fields whose change re-quotes shipping methods.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationFields {
    pub country_id: String,
    #[serde(default)]
    pub region: Option<String>,
    pub postcode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressInformation {
    pub shipping_address: Address,
    pub billing_address: Address,
    pub shipping_carrier_code: String,
    pub shipping_method_code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodSelection {
    pub method: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentInformation {
    pub billing_address: Address,
    pub payment_method: PaymentMethodSelection,
}

/// Response to saving shipping information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    pub totals: CheckoutTotals,
}

/// Response to saving payment information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
}
