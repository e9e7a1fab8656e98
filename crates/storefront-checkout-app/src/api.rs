//! Storefront backend calls made by the checkout container.

use checkout::{
    AddressInformation, CheckoutConfig, CheckoutError, CheckoutTotals, EstimationFields,
    OrderConfirmation, PaymentDetails, PaymentInformation, ShippingMethod,
    ESTIMATE_SHIPPING_PATH, PAYMENT_INFORMATION_PATH, SHIPPING_INFORMATION_PATH, TOTALS_PATH,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn http_error(e: gloo_net::Error) -> CheckoutError {
    CheckoutError::HttpError(e.to_string())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, CheckoutError> {
    let status = resp.status();
    let body = resp.text().await.map_err(http_error)?;
    if !(200..300).contains(&status) {
        return Err(CheckoutError::HttpError(format!("HTTP {}: {}", status, body)));
    }
    Ok(serde_json::from_str(&body)?)
}

async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, CheckoutError> {
    let resp = Request::post(url)
        .json(body)
        .map_err(http_error)?
        .send()
        .await
        .map_err(http_error)?;
    read_json(resp).await
}

/// Current cart totals.
pub async fn fetch_totals(config: &CheckoutConfig) -> Result<CheckoutTotals, CheckoutError> {
    let resp = Request::get(&config.endpoint(TOTALS_PATH))
        .send()
        .await
        .map_err(http_error)?;
    read_json(resp).await
}

/// Delivery options for a partially entered address.
pub async fn estimate_shipping_methods(
    config: &CheckoutConfig,
    fields: &EstimationFields,
) -> Result<Vec<ShippingMethod>, CheckoutError> {
    post(&config.endpoint(ESTIMATE_SHIPPING_PATH), fields).await
}

/// Save shipping address and method; returns payment methods and fresh totals.
pub async fn save_shipping_information(
    config: &CheckoutConfig,
    info: &AddressInformation,
) -> Result<PaymentDetails, CheckoutError> {
    post(&config.endpoint(SHIPPING_INFORMATION_PATH), info).await
}

/// Place the order.
pub async fn save_payment_information(
    config: &CheckoutConfig,
    info: &PaymentInformation,
) -> Result<OrderConfirmation, CheckoutError> {
    post(&config.endpoint(PAYMENT_INFORMATION_PATH), info).await
}
