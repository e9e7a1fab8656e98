#![cfg(target_arch = "wasm32")]

use checkout::{ButtonMount, CheckoutError, PaymentSdkHandle};
use js_sys::Function;
use storefront_checkout_app::paypal::{JsPayPal, RUNTIME};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sdk_from(source: &str) -> JsPayPal {
    let object = Function::new_no_args(source).call0(&JsValue::NULL).unwrap();
    JsPayPal::from(object)
}

#[wasm_bindgen_test]
fn detect_without_sdk_is_none() {
    assert!(JsPayPal::detect().is_none());
}

#[wasm_bindgen_test]
fn sdk_without_buttons_is_missing_capability() {
    let sdk = sdk_from("return { version: '5' };");
    let err = sdk.create_button(&ButtonMount::new(RUNTIME)).unwrap_err();
    assert!(matches!(err, CheckoutError::MissingCapability(ref name) if name == "paypal.Buttons"));
}

#[wasm_bindgen_test]
fn sdk_with_buttons_renders_into_container() {
    let sdk = sdk_from(
        "window.__rendered = 0; \
         return { Buttons: function () { return { render: function () { window.__rendered += 1; } }; } };",
    );
    let button = sdk.create_button(&ButtonMount::new(RUNTIME)).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    button.render_into(&container).unwrap();

    let window = web_sys::window().unwrap();
    let rendered = js_sys::Reflect::get(&window, &JsValue::from_str("__rendered")).unwrap();
    assert_eq!(rendered.as_f64(), Some(1.0));
}
