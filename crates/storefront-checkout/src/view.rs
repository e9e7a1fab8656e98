//! View models for the checkout page.
//!
//! [`CheckoutView::render`] is a pure function of [`CheckoutProps`]; the UI
//! layer only turns the result into DOM.

use crate::constants::SITE_ROOT;
use crate::descriptor::descriptor;
use crate::model::{
    Address, AddressInformation, CheckoutTotals, EstimationFields, PaymentInformation,
    PaymentMethod, ShippingMethod,
};
use crate::props::{CheckoutProps, Handler};
use crate::step::CheckoutStep;

pub const META_TITLE: &str = "Checkout";
pub const WRAPPER_LABEL: &str = "Checkout page";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestFormView {
    pub is_billing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShippingStepView {
    pub shipping_methods: Vec<ShippingMethod>,
    pub is_loading: bool,
    pub save_address_information: Handler<AddressInformation>,
    pub on_shipping_estimation_fields_change: Handler<EstimationFields>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BillingStepView {
    pub payment_methods: Vec<PaymentMethod>,
    pub shipping_address: Address,
    pub save_payment_information: Handler<PaymentInformation>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsStepView {
    pub order_id: String,
    pub continue_href: &'static str,
}

impl DetailsStepView {
    pub fn order_line(&self) -> String {
        format!("Your order # is: {}", self.order_id)
    }

    pub fn email_notice(&self) -> &'static str {
        "We'll email you an order confirmation with details and tracking info."
    }

    pub fn continue_label(&self) -> &'static str {
        "Continue shopping"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepBody {
    Shipping(ShippingStepView),
    Billing(BillingStepView),
    Details(DetailsStepView),
}

impl StepBody {
    pub fn step(&self) -> CheckoutStep {
        match self {
            StepBody::Shipping(_) => CheckoutStep::Shipping,
            StepBody::Billing(_) => CheckoutStep::Billing,
            StepBody::Details(_) => CheckoutStep::Details,
        }
    }

    pub fn shipping(&self) -> Option<&ShippingStepView> {
        match self {
            StepBody::Shipping(view) => Some(view),
            _ => None,
        }
    }

    pub fn billing(&self) -> Option<&BillingStepView> {
        match self {
            StepBody::Billing(view) => Some(view),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&DetailsStepView> {
        match self {
            StepBody::Details(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderView {
    pub is_loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderSummaryView {
    pub totals: CheckoutTotals,
}

/// The whole page, in render order.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutView {
    pub step: CheckoutStep,
    pub title: &'static str,
    pub guest_form: GuestFormView,
    pub body: StepBody,
    pub loader: LoaderView,
    pub summary: Option<OrderSummaryView>,
}

impl CheckoutView {
    pub fn render(props: &CheckoutProps) -> Self {
        let step = props.checkout_step;
        let descriptor = descriptor(step);
        tracing::trace!(%step, "rendering checkout view");

        CheckoutView {
            step,
            title: descriptor.title,
            guest_form: GuestFormView {
                is_billing: step == CheckoutStep::Billing,
            },
            body: (descriptor.render)(props),
            loader: LoaderView {
                is_loading: props.is_loading,
            },
            summary: descriptor.totals_visible.then(|| OrderSummaryView {
                totals: props.checkout_totals.clone(),
            }),
        }
    }
}

pub(crate) fn render_shipping_step(props: &CheckoutProps) -> StepBody {
    StepBody::Shipping(ShippingStepView {
        shipping_methods: props.shipping_methods.clone(),
        is_loading: props.is_delivery_options_loading,
        save_address_information: props.save_address_information.clone(),
        on_shipping_estimation_fields_change: props.on_shipping_estimation_fields_change.clone(),
    })
}

pub(crate) fn render_billing_step(props: &CheckoutProps) -> StepBody {
    StepBody::Billing(BillingStepView {
        payment_methods: props.payment_methods.clone().unwrap_or_default(),
        shipping_address: props.shipping_address.clone(),
        save_payment_information: props.save_payment_information.clone(),
    })
}

pub(crate) fn render_details_step(props: &CheckoutProps) -> StepBody {
    StepBody::Details(DetailsStepView {
        order_id: props.order_id.clone(),
        continue_href: SITE_ROOT,
    })
}
