use crate::error::CheckoutError;

/// Header name pushed while the checkout view is mounted.
pub const CHECKOUT_HEADER: &str = "CHECKOUT";

/// Where "back" and "continue shopping" lead.
pub const SITE_ROOT: &str = "/";

/// DOM id of the injected PayPal SDK script.
pub const PAYPAL_SCRIPT: &str = "PAYPAL_SCRIPT";

/// DOM id of the node the PayPal button is mounted into.
pub const PAYPAL_BUTTON: &str = "PAYPAL_BUTTON";

/// PayPal JS SDK loader.
pub const PAYPAL_SDK_URL: &str = "https://www.paypal.com/sdk/js";

/// PayPal sandbox client id.
pub const PAYPAL_SANDBOX_CLIENT_ID: &str = "sb";

/// Payment method code that renders the PayPal button in the billing step.
pub const PAYPAL_METHOD_CODE: &str = "paypal_express";

pub const SDK_POLL_INTERVAL_MS: u32 = 250;
pub const SDK_POLL_ATTEMPTS: u32 = 40;

// Storefront backend routes, relative to the api base url.
pub const TOTALS_PATH: &str = "/api/checkout/totals";
pub const ESTIMATE_SHIPPING_PATH: &str = "/api/checkout/estimate-shipping-methods";
pub const SHIPPING_INFORMATION_PATH: &str = "/api/checkout/shipping-information";
pub const PAYMENT_INFORMATION_PATH: &str = "/api/checkout/payment-information";

/// PayPal SDK loader settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalConfig {
    pub sdk_url: String,
    pub client_id: String,
}

impl Default for PayPalConfig {
    /// Defaults to the sandbox client.
    fn default() -> Self {
        Self {
            sdk_url: PAYPAL_SDK_URL.to_string(),
            client_id: PAYPAL_SANDBOX_CLIENT_ID.to_string(),
        }
    }
}

impl PayPalConfig {
    /// Full script `src`, with the client id as a query parameter.
    pub fn script_src(&self) -> Result<String, CheckoutError> {
        let url = url::Url::parse_with_params(&self.sdk_url, &[("client-id", &self.client_id)])
            .map_err(|e| CheckoutError::ConfigError(format!("invalid paypal sdk url: {e}")))?;
        Ok(url.to_string())
    }
}

/// Runtime checkout configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Storefront backend base url. Empty means same-origin.
    pub api_base_url: String,
    pub site_root: String,
    pub paypal: PayPalConfig,
    pub sdk_poll_interval_ms: u32,
    pub sdk_poll_attempts: u32,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            site_root: SITE_ROOT.to_string(),
            paypal: PayPalConfig::default(),
            sdk_poll_interval_ms: SDK_POLL_INTERVAL_MS,
            sdk_poll_attempts: SDK_POLL_ATTEMPTS,
        }
    }
}

impl CheckoutConfig {
    /// Defaults overridden by `STOREFRONT_API_URL`, `PAYPAL_CLIENT_ID` and
    /// `PAYPAL_SDK_URL` as seen at compile time. The browser has no process
    /// environment, so these are baked into the bundle.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("STOREFRONT_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(client_id) = option_env!("PAYPAL_CLIENT_ID") {
            config.paypal.client_id = client_id.to_string();
        }
        if let Some(sdk_url) = option_env!("PAYPAL_SDK_URL") {
            config.paypal.sdk_url = sdk_url.to_string();
        }
        config
    }

    /// Join a backend route onto the api base url.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
