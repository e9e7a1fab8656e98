//! Checkout container: owns the step, loading flags and backend data, and
//! hands them to [`CheckoutFlow`] as a props bag.
//!
//! State transitions live on [`CheckoutState`] so they can be exercised
//! without a browser; the component only wires them to backend calls.

use crate::api;
use crate::flow::{CheckoutFlow, GuestEmail};
use checkout::{
    Address, AddressInformation, CheckoutConfig, CheckoutError, CheckoutProps, CheckoutStep,
    CheckoutTotals, EstimationFields, Handler, OrderConfirmation, PaymentDetails,
    PaymentInformation, PaymentMethod, ShippingMethod,
};
use leptos::*;

#[derive(Clone, Debug, PartialEq)]
struct CheckoutState {
    step: CheckoutStep,
    shipping_methods: Vec<ShippingMethod>,
    payment_methods: Option<Vec<PaymentMethod>>,
    is_loading: bool,
    is_delivery_options_loading: bool,
    shipping_address: Address,
    totals: CheckoutTotals,
    order_id: String,
    error: Option<String>,
}

impl Default for CheckoutState {
    /// Starts loading: totals are fetched on mount.
    fn default() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping_methods: Vec::new(),
            payment_methods: None,
            is_loading: true,
            is_delivery_options_loading: false,
            shipping_address: Address::default(),
            totals: CheckoutTotals::default(),
            order_id: String::new(),
            error: None,
        }
    }
}

impl CheckoutState {
    fn fail(&mut self, context: &str, e: CheckoutError) {
        log::error!("{}: {}", context, e);
        self.error = Some(format!("{}. Please try again.", context));
    }

    fn totals_loaded(&mut self, result: Result<CheckoutTotals, CheckoutError>) {
        match result {
            Ok(totals) => self.totals = totals,
            Err(e) => self.fail("Could not load your cart", e),
        }
        self.is_loading = false;
    }

    fn begin_estimate(&mut self) {
        self.is_delivery_options_loading = true;
    }

    fn estimate_finished(&mut self, result: Result<Vec<ShippingMethod>, CheckoutError>) {
        match result {
            Ok(methods) => self.shipping_methods = methods,
            Err(e) => self.fail("Could not load delivery options", e),
        }
        self.is_delivery_options_loading = false;
    }

    /// Claims the loading flag for a save. Returns false while another
    /// request is in flight; the caller must not post in that case.
    fn begin_save(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    fn address_saved(&mut self, address: Address, result: Result<PaymentDetails, CheckoutError>) {
        match result {
            Ok(details) => {
                self.shipping_address = address;
                self.payment_methods = Some(details.payment_methods);
                self.totals = details.totals;
                self.step = CheckoutStep::Billing;
            }
            Err(e) => self.fail("Could not save your address", e),
        }
        self.is_loading = false;
    }

    fn payment_saved(&mut self, result: Result<OrderConfirmation, CheckoutError>) {
        match result {
            Ok(confirmation) => {
                log::info!("order placed: {}", confirmation.order_id);
                self.order_id = confirmation.order_id;
                self.step = CheckoutStep::Details;
            }
            Err(e) => self.fail("Could not place your order", e),
        }
        self.is_loading = false;
    }

    /// Props without handlers; the component fills those in.
    fn props(&self) -> CheckoutProps {
        CheckoutProps {
            checkout_step: self.step,
            shipping_methods: self.shipping_methods.clone(),
            payment_methods: self.payment_methods.clone(),
            is_loading: self.is_loading,
            is_delivery_options_loading: self.is_delivery_options_loading,
            shipping_address: self.shipping_address.clone(),
            checkout_totals: self.totals.clone(),
            order_id: self.order_id.clone(),
            ..Default::default()
        }
    }
}

fn with_guest_email(address: &mut Address, email: &str) {
    if !email.is_empty() && address.email.is_none() {
        address.email = Some(email.to_string());
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let config = store_value(use_context::<CheckoutConfig>().unwrap_or_default());
    let state = create_rw_signal(CheckoutState::default());
    let email = create_rw_signal(String::new());
    provide_context(GuestEmail(email));

    spawn_local(async move {
        let result = api::fetch_totals(&config.get_value()).await;
        state.update(|s| s.totals_loaded(result));
    });

    let on_estimate = Handler::new(move |fields: EstimationFields| {
        state.update(CheckoutState::begin_estimate);
        spawn_local(async move {
            let result = api::estimate_shipping_methods(&config.get_value(), &fields).await;
            state.update(|s| s.estimate_finished(result));
        });
    });

    let save_address = Handler::new(move |mut info: AddressInformation| {
        if !state.try_update(CheckoutState::begin_save).unwrap_or(false) {
            log::debug!("address save ignored, request in flight");
            return;
        }
        let guest = email.get_untracked();
        with_guest_email(&mut info.shipping_address, &guest);
        with_guest_email(&mut info.billing_address, &guest);
        spawn_local(async move {
            let result = api::save_shipping_information(&config.get_value(), &info).await;
            state.update(|s| s.address_saved(info.shipping_address, result));
        });
    });

    let save_payment = Handler::new(move |mut info: PaymentInformation| {
        if !state.try_update(CheckoutState::begin_save).unwrap_or(false) {
            log::debug!("payment save ignored, request in flight");
            return;
        }
        with_guest_email(&mut info.billing_address, &email.get_untracked());
        spawn_local(async move {
            let result = api::save_payment_information(&config.get_value(), &info).await;
            state.update(|s| s.payment_saved(result));
        });
    });

    let props = Signal::derive(move || CheckoutProps {
        save_address_information: save_address.clone(),
        save_payment_information: save_payment.clone(),
        on_shipping_estimation_fields_change: on_estimate.clone(),
        ..state.with(CheckoutState::props)
    });

    view! {
        <Show when=move || state.with(|s| s.error.is_some()) fallback=|| ()>
            <p class="error-text">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
        </Show>
        <CheckoutFlow props=props />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> CheckoutState {
        let mut state = CheckoutState::default();
        state.totals_loaded(Ok(CheckoutTotals::default()));
        state
    }

    fn http_failure() -> CheckoutError {
        CheckoutError::HttpError("status 500".to_string())
    }

    #[test]
    fn test_guest_email_fills_missing_only() {
        let mut address = Address::default();
        with_guest_email(&mut address, "ada@example.com");
        assert_eq!(address.email.as_deref(), Some("ada@example.com"));

        with_guest_email(&mut address, "other@example.com");
        assert_eq!(address.email.as_deref(), Some("ada@example.com"));

        let mut untouched = Address::default();
        with_guest_email(&mut untouched, "");
        assert!(untouched.email.is_none());
    }

    #[test]
    fn test_loading_until_totals_arrive() {
        let mut state = CheckoutState::default();
        assert!(state.props().is_loading);
        assert!(!state.begin_save());

        state.totals_loaded(Err(http_failure()));
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Could not load your cart. Please try again.")
        );
    }

    #[test]
    fn test_second_save_is_ignored_while_in_flight() {
        let mut state = idle();
        assert!(state.begin_save());
        assert!(state.is_loading);
        assert!(!state.begin_save());

        state.payment_saved(Ok(OrderConfirmation {
            order_id: "000000042".to_string(),
        }));
        assert!(!state.is_loading);
        assert!(state.begin_save());
    }

    #[test]
    fn test_address_saved_moves_to_billing() {
        let mut state = idle();
        let address = Address {
            firstname: "Ada".to_string(),
            country_id: "GB".to_string(),
            ..Default::default()
        };
        let details = PaymentDetails {
            payment_methods: vec![PaymentMethod {
                code: "paypal_express".to_string(),
                title: "PayPal".to_string(),
            }],
            totals: CheckoutTotals {
                grand_total: 12.5,
                ..Default::default()
            },
        };

        assert!(state.begin_save());
        state.address_saved(address.clone(), Ok(details));

        let props = state.props();
        assert_eq!(props.checkout_step, CheckoutStep::Billing);
        assert_eq!(props.shipping_address, address);
        assert_eq!(props.payment_methods.map(|m| m.len()), Some(1));
        assert_eq!(props.checkout_totals.grand_total, 12.5);
        assert!(!props.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_save_keeps_step_and_shows_error() {
        let mut state = idle();
        assert!(state.begin_save());
        state.address_saved(Address::default(), Err(http_failure()));
        assert_eq!(state.step, CheckoutStep::Shipping);
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Could not save your address. Please try again.")
        );

        state.step = CheckoutStep::Billing;
        assert!(state.begin_save());
        assert!(state.error.is_none());
        state.payment_saved(Err(http_failure()));
        assert_eq!(state.step, CheckoutStep::Billing);
        assert!(state.order_id.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_payment_saved_moves_to_details() {
        let mut state = idle();
        state.step = CheckoutStep::Billing;
        assert!(state.begin_save());
        state.payment_saved(Ok(OrderConfirmation {
            order_id: "000000042".to_string(),
        }));
        let props = state.props();
        assert_eq!(props.checkout_step, CheckoutStep::Details);
        assert_eq!(props.order_id, "000000042");
    }

    #[test]
    fn test_estimate_toggles_delivery_loading() {
        let mut state = idle();
        state.begin_estimate();
        assert!(state.props().is_delivery_options_loading);

        let method = ShippingMethod {
            carrier_code: "flatrate".to_string(),
            method_code: "flatrate".to_string(),
            carrier_title: "Flat Rate".to_string(),
            method_title: "Fixed".to_string(),
            amount: 5.0,
            available: true,
        };
        state.estimate_finished(Ok(vec![method.clone()]));
        assert!(!state.is_delivery_options_loading);
        assert_eq!(state.shipping_methods, vec![method]);

        state.begin_estimate();
        state.estimate_finished(Err(http_failure()));
        assert!(!state.is_delivery_options_loading);
        assert_eq!(state.shipping_methods.len(), 1);
        assert!(state.error.is_some());
    }
}
