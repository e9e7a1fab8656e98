use checkout::{
    Address, AddressInformation, CheckoutProps, CheckoutStep, CheckoutView, Handler,
    HeaderDisplay, HeaderState, HeaderSync, Navigator, PaymentInformation, PaymentMethod,
    PaymentMethodSelection, ShippingMethod, StepBody,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Recorder {
    headers: RefCell<Vec<HeaderState>>,
    paths: RefCell<Vec<String>>,
}

impl HeaderDisplay for Recorder {
    fn set_header_state(&self, state: HeaderState) {
        self.headers.borrow_mut().push(state);
    }
}

impl Navigator for Recorder {
    fn push(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn address() -> Address {
    Address {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        street: vec!["12 Analytical Row".to_string()],
        city: "London".to_string(),
        region: None,
        postcode: "N1 9GU".to_string(),
        country_id: "GB".to_string(),
        telephone: "+44 20 7946 0000".to_string(),
        email: Some("ada@example.com".to_string()),
    }
}

/// Walks the three steps the way a container would: the view emits through
/// its handlers, the container reacts by changing props, header sync runs
/// after every render.
#[test]
fn test_full_checkout_walk() {
    init_tracing();

    let recorder = Rc::new(Recorder::default());
    let header = HeaderSync::new(recorder.clone(), recorder.clone());

    let saved_address = Rc::new(RefCell::new(None::<AddressInformation>));
    let saved_payment = Rc::new(RefCell::new(None::<PaymentInformation>));

    let sink = saved_address.clone();
    let save_address = Handler::new(move |info| *sink.borrow_mut() = Some(info));
    let sink = saved_payment.clone();
    let save_payment = Handler::new(move |info| *sink.borrow_mut() = Some(info));

    let mut props = CheckoutProps {
        shipping_methods: vec![ShippingMethod {
            carrier_code: "flatrate".to_string(),
            method_code: "flatrate".to_string(),
            carrier_title: "Flat Rate".to_string(),
            method_title: "Fixed".to_string(),
            amount: 5.0,
            available: true,
        }],
        save_address_information: save_address,
        save_payment_information: save_payment,
        ..CheckoutProps::new(CheckoutStep::Shipping)
    };

    // Shipping: mount, then an unrelated prop change re-renders.
    let view = CheckoutView::render(&props);
    header.sync(view.step);
    props.is_delivery_options_loading = true;
    let view = CheckoutView::render(&props);
    header.sync(view.step);
    assert_eq!(recorder.headers.borrow().len(), 1);

    let StepBody::Shipping(shipping) = &view.body else {
        panic!("expected shipping body, got {:?}", view.body.step());
    };
    shipping.save_address_information.emit(AddressInformation {
        shipping_address: address(),
        billing_address: address(),
        shipping_carrier_code: "flatrate".to_string(),
        shipping_method_code: "flatrate".to_string(),
    });
    let info = saved_address.borrow_mut().take().unwrap();

    // Container answers with payment methods and moves on.
    props.shipping_address = info.shipping_address;
    props.payment_methods = Some(vec![PaymentMethod {
        code: "checkmo".to_string(),
        title: "Check / Money order".to_string(),
    }]);
    props.checkout_step = CheckoutStep::Billing;
    let view = CheckoutView::render(&props);
    header.sync(view.step);
    assert!(view.guest_form.is_billing);
    assert!(view.summary.is_some());

    let billing = view.body.billing().unwrap();
    assert_eq!(billing.shipping_address.full_name(), "Ada Lovelace");
    billing.save_payment_information.emit(PaymentInformation {
        billing_address: billing.shipping_address.clone(),
        payment_method: PaymentMethodSelection {
            method: billing.payment_methods[0].code.clone(),
        },
    });
    let payment = saved_payment.borrow_mut().take().unwrap();
    assert_eq!(payment.payment_method.method, "checkmo");

    // Order placed.
    props.order_id = "1000234".to_string();
    props.checkout_step = CheckoutStep::Details;
    let view = CheckoutView::render(&props);
    header.sync(view.step);
    assert!(view.summary.is_none());
    assert!(view.body.details().unwrap().order_line().contains("1000234"));

    let titles: Vec<String> = recorder
        .headers
        .borrow()
        .iter()
        .map(|h| h.title.clone())
        .collect();
    assert_eq!(
        titles,
        ["Shipping step", "Billing step", "Thank you for your purchase!"]
    );

    let back = recorder.headers.borrow()[2].on_back_click.clone();
    back.emit(());
    assert_eq!(*recorder.paths.borrow(), ["/"]);
}

#[test]
fn test_unknown_step_is_rejected_before_render() {
    let err = serde_json::from_str::<CheckoutStep>("\"CONFIRMATION_STEP\"").unwrap_err();
    assert!(err.to_string().contains("CONFIRMATION_STEP"));
}
