//! Checkout flow for the storefront.
//!
//! Three steps (shipping, billing, order confirmation) driven by a parent
//! container, plus a PayPal button host.
//!
//! - [`CheckoutView`] — pure view model rendered from a [`CheckoutProps`] bag
//! - [`descriptor`] — the step table: title, render fn, totals flag
//! - [`HeaderSync`] — pushes [`HeaderState`] to a [`HeaderDisplay`] on step change
//! - [`PaymentWidgetHost`] — SDK script tag plus a button once [`PaymentSdk::Ready`]
//!
//! # Example
//!
//! ```
//! use checkout::{CheckoutProps, CheckoutStep, CheckoutView};
//!
//! let props = CheckoutProps {
//!     order_id: "1000234".to_string(),
//!     ..CheckoutProps::new(CheckoutStep::Details)
//! };
//! let view = CheckoutView::render(&props);
//! assert!(view.summary.is_none());
//! assert!(view.body.details().unwrap().order_line().contains("1000234"));
//! ```

pub mod constants;
pub mod descriptor;
pub mod error;
pub mod header;
pub mod model;
pub mod paypal;
pub mod props;
pub mod step;
pub mod view;

pub use constants::*;
pub use descriptor::{descriptor, StepDescriptor};
pub use error::CheckoutError;
pub use header::{HeaderDisplay, HeaderState, HeaderSync, Navigator};
pub use model::*;
pub use paypal::{
    ButtonMount, PaymentSdk, PaymentSdkHandle, PaymentWidgetHost, PaymentWidgetView, ScriptTag,
};
pub use props::{CheckoutProps, Handler};
pub use step::CheckoutStep;
pub use view::*;
