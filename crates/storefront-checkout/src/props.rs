//! The props bag a container hands to the checkout view.

use crate::model::{
    Address, AddressInformation, CheckoutTotals, EstimationFields, PaymentInformation,
    PaymentMethod, ShippingMethod,
};
use crate::step::CheckoutStep;
use std::fmt;
use std::rc::Rc;

/// A cloneable callback. Two handlers are equal when they share the same closure.
pub struct Handler<T>(Rc<dyn Fn(T)>);

impl<T> Handler<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<T: 'static> Handler<T> {
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<T: 'static> Default for Handler<T> {
    fn default() -> Self {
        Self::noop()
    }
}

/// Everything the checkout view renders from. Owned by the parent container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutProps {
    pub checkout_step: CheckoutStep,
    pub shipping_methods: Vec<ShippingMethod>,
    /// `None` renders as an empty list.
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub is_loading: bool,
    pub is_delivery_options_loading: bool,
    pub shipping_address: Address,
    pub checkout_totals: CheckoutTotals,
    pub order_id: String,
    pub save_address_information: Handler<AddressInformation>,
    pub save_payment_information: Handler<PaymentInformation>,
    pub on_shipping_estimation_fields_change: Handler<EstimationFields>,
}

impl CheckoutProps {
    pub fn new(checkout_step: CheckoutStep) -> Self {
        Self {
            checkout_step,
            ..Default::default()
        }
    }
}
