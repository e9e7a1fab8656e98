//! PayPal JS SDK interop and the widget component.
//!
//! The SDK is reached through `window.paypal` with `Reflect` lookups only, so
//! a missing or partial SDK object surfaces as a [`CheckoutError`] instead of
//! a JS exception.

use checkout::{
    ButtonMount, CheckoutConfig, CheckoutError, PaymentSdk, PaymentSdkHandle, PaymentWidgetHost,
};
use js_sys::{Function, Reflect};
use leptos::*;
use leptos_meta::Script;
use wasm_bindgen::{JsCast, JsValue};

/// Rendering runtime the PayPal buttons are bound to.
pub const RUNTIME: &str = "leptos";

/// Loaded `window.paypal` object.
#[derive(Clone, Debug, PartialEq)]
pub struct JsPayPal(JsValue);

impl JsPayPal {
    /// `window.paypal`, if the SDK script has finished loading.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let paypal = Reflect::get(&window, &JsValue::from_str("paypal")).ok()?;
        if paypal.is_undefined() || paypal.is_null() {
            None
        } else {
            Some(Self(paypal))
        }
    }
}

impl From<JsValue> for JsPayPal {
    fn from(value: JsValue) -> Self {
        Self(value)
    }
}

/// Result of `paypal.Buttons()`, not yet attached to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct JsPayPalButton(JsValue);

impl JsPayPalButton {
    pub fn render_into(&self, container: &web_sys::Element) -> Result<(), CheckoutError> {
        let render = method(&self.0, "render")?;
        render.call1(&self.0, container).map_err(js_error)?;
        Ok(())
    }
}

impl PaymentSdkHandle for JsPayPal {
    type Button = JsPayPalButton;

    fn create_button(&self, mount: &ButtonMount) -> Result<JsPayPalButton, CheckoutError> {
        let factory = method(&self.0, "Buttons")?;
        let buttons = factory.call0(&self.0).map_err(js_error)?;
        log::debug!(
            "paypal buttons created for #{} ({})",
            mount.container_id,
            mount.runtime
        );
        Ok(JsPayPalButton(buttons))
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function, CheckoutError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| CheckoutError::MissingCapability(format!("paypal.{name}")))
}

fn js_error(e: JsValue) -> CheckoutError {
    CheckoutError::SdkError(format!("{:?}", e))
}

/// Poll for `window.paypal` until it appears or attempts run out.
pub async fn wait_for_sdk(interval_ms: u32, attempts: u32) -> PaymentSdk<JsPayPal> {
    for _ in 0..attempts {
        let sdk = PaymentSdk::from(JsPayPal::detect());
        if sdk.is_ready() {
            return sdk;
        }
        gloo_timers::future::TimeoutFuture::new(interval_ms).await;
    }
    log::warn!("paypal sdk not loaded after {} attempts", attempts);
    PaymentSdk::NotLoaded
}

/// SDK script tag plus, once the parent reports the SDK ready, the button.
#[component]
pub fn PayPal(#[prop(into)] sdk: Signal<PaymentSdk<JsPayPal>>) -> impl IntoView {
    let config = use_context::<CheckoutConfig>().unwrap_or_default();
    let host = match PaymentWidgetHost::<JsPayPal>::new(&config.paypal, ButtonMount::new(RUNTIME))
    {
        Ok(host) => host,
        Err(e) => {
            log::error!("paypal widget disabled: {}", e);
            return ().into_view();
        }
    };
    let script = host.script().clone();
    let container_id = host.mount().container_id;
    let container = create_node_ref::<html::Div>();
    let attached = store_value(None::<JsPayPalButton>);

    create_effect(move |_| {
        let widget = host.render(&sdk.get());
        let Some(element) = container.get() else {
            return;
        };
        match widget.button {
            Some(button) if attached.with_value(|a| a.as_ref() != Some(&button)) => {
                match button.render_into(&element) {
                    Ok(()) => attached.set_value(Some(button)),
                    Err(e) => log::warn!("paypal button not attached: {}", e),
                }
            }
            Some(_) => {}
            None => attached.set_value(None),
        }
    });

    view! {
        <Script id=script.id src=script.src />
        <div id=container_id class="PayPal" node_ref=container></div>
    }
    .into_view()
}
