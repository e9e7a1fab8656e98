//! Checkout page components.
//!
//! [`CheckoutFlow`] renders a [`CheckoutView`] computed from the props bag. The
//! step body is rebuilt only when the step changes, so form input survives
//! prop updates such as freshly estimated shipping methods.

use crate::paypal::{self, JsPayPal, PayPal};
use crate::HeaderContext;
use checkout::{
    format_price, Address, AddressInformation, BillingStepView, CheckoutConfig, CheckoutProps,
    CheckoutStep, CheckoutTotals, CheckoutView, DetailsStepView, Handler, HeaderDisplay,
    HeaderState, HeaderSync, Navigator, PaymentInformation, PaymentMethodSelection, PaymentSdk,
    ShippingMethod, ShippingStepView, META_TITLE, PAYPAL_METHOD_CODE, WRAPPER_LABEL,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

/// Guest e-mail, shared between the guest form and the container.
#[derive(Clone, Copy)]
pub struct GuestEmail(pub RwSignal<String>);

struct SignalHeader(RwSignal<Option<HeaderState>>);

impl HeaderDisplay for SignalHeader {
    fn set_header_state(&self, state: HeaderState) {
        self.0.set(Some(state));
    }
}

struct RouterNavigator(Rc<dyn Fn(&str, NavigateOptions)>);

impl Navigator for RouterNavigator {
    fn push(&self, path: &str) {
        (self.0)(path, NavigateOptions::default())
    }
}

#[component]
pub fn CheckoutFlow(#[prop(into)] props: Signal<CheckoutProps>) -> impl IntoView {
    let model = create_memo(move |_| props.with(CheckoutView::render));
    let step = create_memo(move |_| model.with(|m| m.step));

    let HeaderContext(header) = expect_context::<HeaderContext>();
    let header_sync = HeaderSync::new(
        Rc::new(SignalHeader(header)),
        Rc::new(RouterNavigator(Rc::new(use_navigate()))),
    );
    create_effect(move |_| {
        header_sync.sync(step.get());
    });
    on_cleanup(move || header.set(None));

    let busy = Signal::derive(move || model.with(|m| m.loader.is_loading));
    let body = move || match step.get() {
        CheckoutStep::Shipping => view! {
            <ShippingStep busy=busy data=Signal::derive(move || {
                model.with(|m| m.body.shipping().cloned().unwrap_or_default())
            }) />
        }
        .into_view(),
        CheckoutStep::Billing => view! {
            <BillingStep busy=busy data=Signal::derive(move || {
                model.with(|m| m.body.billing().cloned().unwrap_or_default())
            }) />
        }
        .into_view(),
        CheckoutStep::Details => view! {
            <DetailsStep data=Signal::derive(move || {
                model.with(|m| m.body.details().cloned().unwrap_or_default())
            }) />
        }
        .into_view(),
    };

    view! {
        <Title text=META_TITLE />
        <section class="Checkout">
            <div class="Checkout-Wrapper" aria-label=WRAPPER_LABEL>
                <div class="Checkout-Step">
                    <h1 class="Checkout-Title">{move || model.with(|m| m.title)}</h1>
                    <GuestForm is_billing=Signal::derive(move || model.with(|m| m.guest_form.is_billing)) />
                    {body}
                    <Loader is_loading=Signal::derive(move || model.with(|m| m.loader.is_loading)) />
                </div>
                {move || {
                    model
                        .with(|m| m.summary.clone())
                        .map(|summary| view! { <OrderSummary totals=summary.totals /> })
                }}
            </div>
        </section>
    }
}

#[component]
fn GuestForm(#[prop(into)] is_billing: Signal<bool>) -> impl IntoView {
    let email = use_context::<GuestEmail>()
        .map(|GuestEmail(email)| email)
        .unwrap_or_else(|| create_rw_signal(String::new()));

    view! {
        <div class="CheckoutGuestForm">
            <h3>
                {move || if is_billing.get() { "Billing contact" } else { "Enter personal email" }}
            </h3>
            <input
                type="email"
                class="input"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn AddressField(
    address: RwSignal<Address>,
    label: &'static str,
    read: fn(&Address) -> String,
    write: fn(&mut Address, String),
    #[prop(optional)] on_change: Option<Handler<()>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                class="input"
                prop:value=move || address.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    address.update(|a| write(a, value));
                }
                on:change=move |_| {
                    if let Some(handler) = &on_change {
                        handler.emit(());
                    }
                }
            />
        </label>
    }
}

/// Address inputs. `on_estimate` fires when a field that affects delivery
/// options is committed.
#[component]
fn AddressForm(
    address: RwSignal<Address>,
    #[prop(optional)] on_estimate: Option<Handler<()>>,
) -> impl IntoView {
    view! {
        <fieldset class="AddressForm">
            <AddressField address=address label="First name"
                read={|a: &Address| a.firstname.clone()}
                write={|a: &mut Address, v: String| a.firstname = v}
            />
            <AddressField address=address label="Last name"
                read={|a: &Address| a.lastname.clone()}
                write={|a: &mut Address, v: String| a.lastname = v}
            />
            <AddressField address=address label="Street address"
                read={|a: &Address| a.street.first().cloned().unwrap_or_default()}
                write={|a: &mut Address, v: String| a.street = vec![v]}
            />
            <AddressField address=address label="City"
                read={|a: &Address| a.city.clone()}
                write={|a: &mut Address, v: String| a.city = v}
            />
            <AddressField address=address label="Country"
                read={|a: &Address| a.country_id.clone()}
                write={|a: &mut Address, v: String| a.country_id = v.trim().to_uppercase()}
                on_change=on_estimate.clone().unwrap_or_default()
            />
            <AddressField address=address label="State/Province"
                read={|a: &Address| a.region.clone().unwrap_or_default()}
                write={|a: &mut Address, v: String| a.region = (!v.is_empty()).then_some(v)}
                on_change=on_estimate.clone().unwrap_or_default()
            />
            <AddressField address=address label="Zip/Postal code"
                read={|a: &Address| a.postcode.clone()}
                write={|a: &mut Address, v: String| a.postcode = v}
                on_change=on_estimate.unwrap_or_default()
            />
            <AddressField address=address label="Phone number"
                read={|a: &Address| a.telephone.clone()}
                write={|a: &mut Address, v: String| a.telephone = v}
            />
        </fieldset>
    }
}

#[component]
fn ShippingStep(
    #[prop(into)] data: Signal<ShippingStepView>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let address = create_rw_signal(Address::default());
    let selected = create_rw_signal(None::<(String, String)>);

    // A re-estimate may drop the chosen method.
    create_effect(move |_| {
        let offered =
            data.with(|d| offered_selection(&d.shipping_methods, selected.get_untracked()));
        if offered.is_none() && selected.with_untracked(Option::is_some) {
            selected.set(None);
        }
    });

    let on_estimate = Handler::new(move |()| {
        let fields = address.with_untracked(Address::estimation_fields);
        if fields.country_id.is_empty() {
            return;
        }
        data.with_untracked(|d| d.on_shipping_estimation_fields_change.emit(fields));
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let chosen = data
            .with_untracked(|d| offered_selection(&d.shipping_methods, selected.get_untracked()));
        let Some((carrier, method)) = chosen else {
            return;
        };
        let shipping_address = address.get_untracked();
        let info = AddressInformation {
            billing_address: shipping_address.clone(),
            shipping_address,
            shipping_carrier_code: carrier,
            shipping_method_code: method,
        };
        data.with_untracked(|d| d.save_address_information.emit(info));
    };

    let methods = move || {
        let d = data.get();
        if d.is_loading {
            return view! { <p class="loading">"Loading delivery options..."</p> }.into_view();
        }
        if d.shipping_methods.is_empty() {
            return view! {
                <p class="muted">"Enter your address to see delivery options"</p>
            }
            .into_view();
        }
        d.shipping_methods
            .into_iter()
            .map(|m| {
                let key = (m.carrier_code.clone(), m.method_code.clone());
                let checked_key = key.clone();
                let label = format!("{} - {}", m.carrier_title, m.method_title);
                view! {
                    <label class="CheckoutShipping-Method">
                        <input
                            type="radio"
                            name="shipping-method"
                            disabled=!m.available
                            prop:checked=move || selected.with(|s| s.as_ref() == Some(&checked_key))
                            on:change=move |_| selected.set(Some(key.clone()))
                        />
                        <span>{label}</span>
                        <span class="price">{format_price(m.amount, "")}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <form class="CheckoutShipping" on:submit=submit>
            <AddressForm address=address on_estimate=on_estimate />
            <h3>"Shipping method"</h3>
            <div class="CheckoutShipping-Methods">{methods}</div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || busy.get() || selected.with(Option::is_none)
            >
                "Proceed to billing"
            </button>
        </form>
    }
}

/// `selected` if it is still an available method in `methods`.
fn offered_selection(
    methods: &[ShippingMethod],
    selected: Option<(String, String)>,
) -> Option<(String, String)> {
    selected.filter(|(carrier, method)| {
        methods
            .iter()
            .any(|m| m.available && &m.carrier_code == carrier && &m.method_code == method)
    })
}

fn address_lines(address: &Address) -> Vec<String> {
    let mut lines = vec![address.full_name()];
    lines.extend(address.street.iter().cloned());
    lines.push(format!("{} {}", address.postcode, address.city).trim().to_string());
    if let Some(region) = &address.region {
        lines.push(region.clone());
    }
    lines.push(address.country_id.clone());
    lines.retain(|line| !line.is_empty());
    lines
}

#[component]
fn BillingStep(
    #[prop(into)] data: Signal<BillingStepView>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let config = use_context::<CheckoutConfig>().unwrap_or_default();
    let selected = create_rw_signal(None::<String>);
    let same_as_shipping = create_rw_signal(true);
    let billing_address = create_rw_signal(Address::default());
    let sdk = create_rw_signal(PaymentSdk::<JsPayPal>::NotLoaded);
    let polling = store_value(false);

    let paypal_selected = move || selected.with(|s| s.as_deref() == Some(PAYPAL_METHOD_CODE));

    // This step supplies the SDK handle to the PayPal widget; it starts
    // polling the first time PayPal is chosen.
    create_effect(move |_| {
        if !paypal_selected() || polling.get_value() || sdk.with_untracked(PaymentSdk::is_ready) {
            return;
        }
        polling.set_value(true);
        let (interval, attempts) = (config.sdk_poll_interval_ms, config.sdk_poll_attempts);
        spawn_local(async move {
            sdk.set(paypal::wait_for_sdk(interval, attempts).await);
            polling.set_value(false);
        });
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(method) = selected.get_untracked() else {
            return;
        };
        let billing_address = if same_as_shipping.get_untracked() {
            data.with_untracked(|d| d.shipping_address.clone())
        } else {
            billing_address.get_untracked()
        };
        let info = PaymentInformation {
            billing_address,
            payment_method: PaymentMethodSelection { method },
        };
        data.with_untracked(|d| d.save_payment_information.emit(info));
    };

    let methods = move || {
        let methods = data.with(|d| d.payment_methods.clone());
        if methods.is_empty() {
            return view! { <p class="muted">"No payment methods available"</p> }.into_view();
        }
        methods
            .into_iter()
            .map(|m| {
                let code = m.code.clone();
                let checked_code = m.code;
                view! {
                    <label class="CheckoutBilling-Method">
                        <input
                            type="radio"
                            name="payment-method"
                            prop:checked=move || selected.with(|s| s.as_deref() == Some(checked_code.as_str()))
                            on:change=move |_| selected.set(Some(code.clone()))
                        />
                        <span>{m.title}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <form class="CheckoutBilling" on:submit=submit>
            <div class="CheckoutBilling-ShippingAddress">
                <h3>"Shipping address"</h3>
                {move || {
                    data.with(|d| address_lines(&d.shipping_address))
                        .into_iter()
                        .map(|line| view! { <p>{line}</p> })
                        .collect_view()
                }}
            </div>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || same_as_shipping.get()
                    on:change=move |ev| same_as_shipping.set(event_target_checked(&ev))
                />
                "My billing and shipping address are the same"
            </label>
            <Show when=move || !same_as_shipping.get() fallback=|| ()>
                <AddressForm address=billing_address />
            </Show>
            <h3>"Payment method"</h3>
            <div class="CheckoutBilling-Methods">{methods}</div>
            <Show when=paypal_selected fallback=|| ()>
                <PayPal sdk=sdk />
            </Show>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || busy.get() || selected.with(Option::is_none)
            >
                "Place order"
            </button>
        </form>
    }
}

#[component]
fn DetailsStep(#[prop(into)] data: Signal<DetailsStepView>) -> impl IntoView {
    view! {
        <div class="Checkout-Success">
            <p>{move || data.with(DetailsStepView::order_line)}</p>
            <p>{move || data.with(|d| d.email_notice())}</p>
            <a class="Button Checkout-ContinueButton" href=move || data.with(|d| d.continue_href)>
                {move || data.with(|d| d.continue_label())}
            </a>
        </div>
    }
}

#[component]
fn Loader(#[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get() fallback=|| ()>
            <div class="Loader" role="status">
                <div class="Loader-Spinner"></div>
                <span>"Loading..."</span>
            </div>
        </Show>
    }
}

#[component]
fn OrderSummary(totals: CheckoutTotals) -> impl IntoView {
    let rows = totals
        .items
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td>{item.name.clone()}</td>
                    <td class="qty">{item.qty}</td>
                    <td class="price">{totals.format(item.row_total)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <aside class="CheckoutOrderSummary">
            <h3>"Order summary"</h3>
            <table class="CheckoutOrderSummary-Items">
                <tbody>{rows}</tbody>
            </table>
            <dl class="CheckoutOrderSummary-Totals">
                <dt>"Subtotal"</dt>
                <dd>{totals.format(totals.subtotal)}</dd>
                <dt>"Shipping"</dt>
                <dd>{totals.format(totals.shipping_amount)}</dd>
                <dt>"Tax"</dt>
                <dd>{totals.format(totals.tax_amount)}</dd>
                <dt class="grand-total">"Order total"</dt>
                <dd class="grand-total">{totals.format(totals.grand_total)}</dd>
            </dl>
        </aside>
    }
}
