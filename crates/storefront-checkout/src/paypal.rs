//! PayPal button host.
//!
//! Always renders the SDK script tag. Once the SDK reports ready, builds the
//! vendor button once and keeps it for later renders.

use crate::constants::{PayPalConfig, PAYPAL_BUTTON, PAYPAL_SCRIPT};
use crate::error::CheckoutError;
use std::cell::RefCell;

/// Loading state of the third-party payment SDK.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentSdk<H> {
    NotLoaded,
    Ready(H),
}

impl<H> Default for PaymentSdk<H> {
    fn default() -> Self {
        PaymentSdk::NotLoaded
    }
}

impl<H> PaymentSdk<H> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PaymentSdk::Ready(_))
    }
}

impl<H> From<Option<H>> for PaymentSdk<H> {
    fn from(handle: Option<H>) -> Self {
        handle.map_or(PaymentSdk::NotLoaded, PaymentSdk::Ready)
    }
}

/// Where and for which rendering runtime a button gets built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonMount {
    pub container_id: &'static str,
    pub runtime: &'static str,
}

impl ButtonMount {
    pub fn new(runtime: &'static str) -> Self {
        Self {
            container_id: PAYPAL_BUTTON,
            runtime,
        }
    }
}

/// A loaded payment SDK able to build buttons.
pub trait PaymentSdkHandle {
    type Button: Clone;

    /// Build a button for `mount`. `mount.runtime` names the rendering
    /// runtime hosting the button; SDKs with a single driver may ignore it.
    /// Fails with [`CheckoutError::MissingCapability`] when the SDK lacks a
    /// button factory.
    fn create_button(&self, mount: &ButtonMount) -> Result<Self::Button, CheckoutError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptTag {
    pub id: &'static str,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentWidgetView<B> {
    pub script: ScriptTag,
    pub button: Option<B>,
}

pub struct PaymentWidgetHost<H: PaymentSdkHandle> {
    script: ScriptTag,
    mount: ButtonMount,
    button: RefCell<Option<H::Button>>,
}

impl<H: PaymentSdkHandle> PaymentWidgetHost<H> {
    pub fn new(config: &PayPalConfig, mount: ButtonMount) -> Result<Self, CheckoutError> {
        Ok(Self {
            script: ScriptTag {
                id: PAYPAL_SCRIPT,
                src: config.script_src()?,
            },
            mount,
            button: RefCell::new(None),
        })
    }

    pub fn script(&self) -> &ScriptTag {
        &self.script
    }

    pub fn mount(&self) -> &ButtonMount {
        &self.mount
    }

    pub fn render(&self, sdk: &PaymentSdk<H>) -> PaymentWidgetView<H::Button> {
        let handle = match sdk {
            PaymentSdk::NotLoaded => {
                self.button.borrow_mut().take();
                return PaymentWidgetView {
                    script: self.script.clone(),
                    button: None,
                };
            }
            PaymentSdk::Ready(handle) => handle,
        };

        let mut slot = self.button.borrow_mut();
        if slot.is_none() {
            match handle.create_button(&self.mount) {
                Ok(button) => {
                    tracing::debug!(
                        container = self.mount.container_id,
                        runtime = self.mount.runtime,
                        "paypal button created"
                    );
                    *slot = Some(button);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "paypal sdk unusable, rendering script only");
                }
            }
        }

        PaymentWidgetView {
            script: self.script.clone(),
            button: slot.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct StubButton {
        runtime: &'static str,
        container_id: &'static str,
    }

    #[derive(Clone, Default)]
    struct StubSdk {
        created: Rc<Cell<u32>>,
        broken: bool,
    }

    impl PaymentSdkHandle for StubSdk {
        type Button = StubButton;

        fn create_button(&self, mount: &ButtonMount) -> Result<StubButton, CheckoutError> {
            if self.broken {
                return Err(CheckoutError::MissingCapability("Buttons".to_string()));
            }
            self.created.set(self.created.get() + 1);
            Ok(StubButton {
                runtime: mount.runtime,
                container_id: mount.container_id,
            })
        }
    }

    fn host() -> PaymentWidgetHost<StubSdk> {
        PaymentWidgetHost::new(&PayPalConfig::default(), ButtonMount::new("leptos")).unwrap()
    }

    #[test]
    fn test_not_loaded_renders_script_only() {
        let view = host().render(&PaymentSdk::NotLoaded);
        assert!(view.button.is_none());
        assert_eq!(view.script.id, PAYPAL_SCRIPT);
        assert_eq!(view.script.src, "https://www.paypal.com/sdk/js?client-id=sb");
    }

    #[test]
    fn test_ready_creates_button_once() {
        let host = host();
        let sdk = StubSdk::default();
        let ready = PaymentSdk::Ready(sdk.clone());

        let first = host.render(&ready);
        let second = host.render(&ready);

        assert_eq!(sdk.created.get(), 1);
        let button = first.button.unwrap();
        assert_eq!(button.runtime, "leptos");
        assert_eq!(button.container_id, PAYPAL_BUTTON);
        assert_eq!(second.button, Some(button));
    }

    #[test]
    fn test_unloading_drops_button() {
        let host = host();
        let sdk = StubSdk::default();
        host.render(&PaymentSdk::Ready(sdk.clone()));
        assert!(host.render(&PaymentSdk::NotLoaded).button.is_none());
        host.render(&PaymentSdk::Ready(sdk.clone()));
        assert_eq!(sdk.created.get(), 2);
    }

    #[test]
    fn test_missing_capability_degrades_to_script() {
        let sdk = StubSdk {
            broken: true,
            ..Default::default()
        };
        let view = host().render(&PaymentSdk::Ready(sdk));
        assert!(view.button.is_none());
        assert_eq!(view.script.id, PAYPAL_SCRIPT);
    }

    #[test]
    fn test_from_option() {
        assert!(!PaymentSdk::<StubSdk>::from(None).is_ready());
        assert!(PaymentSdk::from(Some(StubSdk::default())).is_ready());
    }

    #[test]
    fn test_bad_sdk_url_fails_fast() {
        let config = PayPalConfig {
            sdk_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(PaymentWidgetHost::<StubSdk>::new(&config, ButtonMount::new("leptos")).is_err());
    }
}
