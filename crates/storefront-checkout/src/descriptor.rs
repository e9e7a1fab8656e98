//! Step descriptor table.
//!
//! Each [`CheckoutStep`] maps to a title, a pure render function over the
//! props bag, and whether the order summary shows next to it. The lookup is
//! an exhaustive `match`, so a new step cannot be added without its entry.

use crate::props::CheckoutProps;
use crate::step::CheckoutStep;
use crate::view::{render_billing_step, render_details_step, render_shipping_step, StepBody};

pub type RenderFn = fn(&CheckoutProps) -> StepBody;

pub struct StepDescriptor {
    pub title: &'static str,
    pub render: RenderFn,
    pub totals_visible: bool,
}

static SHIPPING: StepDescriptor = StepDescriptor {
    title: "Shipping step",
    render: render_shipping_step,
    totals_visible: true,
};

static BILLING: StepDescriptor = StepDescriptor {
    title: "Billing step",
    render: render_billing_step,
    totals_visible: true,
};

static DETAILS: StepDescriptor = StepDescriptor {
    title: "Thank you for your purchase!",
    render: render_details_step,
    totals_visible: false,
};

pub fn descriptor(step: CheckoutStep) -> &'static StepDescriptor {
    match step {
        CheckoutStep::Shipping => &SHIPPING,
        CheckoutStep::Billing => &BILLING,
        CheckoutStep::Details => &DETAILS,
    }
}
