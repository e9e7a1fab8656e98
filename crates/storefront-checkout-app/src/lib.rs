use checkout::{CheckoutConfig, HeaderState};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

mod api;
mod container;
mod flow;
pub mod paypal;

use container::CheckoutPage;

/// Header state published by the mounted page. `None` shows the default header.
#[derive(Clone, Copy)]
pub struct HeaderContext(pub RwSignal<Option<HeaderState>>);

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(CheckoutConfig::from_build_env());
    provide_context(HeaderContext(create_rw_signal(None)));

    view! {
        <Html lang="en" />
        <Meta charset="utf-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Title text="Storefront" />
        <Stylesheet href="/style.css" />

        <Router>
            <main class="container">
                <Header />
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/checkout" view=CheckoutPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
                <Footer />
            </main>
        </Router>
    }
}

/// Site header. Pages such as checkout replace the logo with a title and a
/// back button by publishing a [`HeaderState`].
#[component]
fn Header() -> impl IntoView {
    let HeaderContext(state) = expect_context::<HeaderContext>();

    view! {
        <header class="header">
            <nav class="nav">
                {move || match state.get() {
                    Some(HeaderState { name, title, on_back_click }) => view! {
                        <div class="header-page" data-name=name>
                            <button
                                class="btn btn-secondary header-back"
                                on:click=move |_| on_back_click.emit(())
                            >
                                "Back"
                            </button>
                            <span class="header-title">{title}</span>
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <a href="/" class="logo">"Storefront"</a>
                        <div class="nav-links">
                            <a href="/checkout">"Checkout"</a>
                        </div>
                    }
                    .into_view(),
                }}
            </nav>
        </header>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Your cart"</h1>
            <p class="subtitle">"Review your items and continue to checkout."</p>
            <a href="/checkout" class="btn btn-primary">"Proceed to checkout"</a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Payments by PayPal (sandbox)"</p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"404 - Not Found"</h1>
            <p><a href="/">"Go home"</a></p>
        </div>
    }
}

/// Initialize the app
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(|| view! { <App /> });
}
