//! Keeps the shared page header in sync with the checkout step.
//!
//! The header itself lives outside the checkout view. The view only asks a
//! [`HeaderDisplay`] to show a new [`HeaderState`], and only when the step
//! actually changed.

use crate::constants::{CHECKOUT_HEADER, SITE_ROOT};
use crate::descriptor::descriptor;
use crate::props::Handler;
use crate::step::CheckoutStep;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderState {
    pub name: &'static str,
    pub title: String,
    pub on_back_click: Handler<()>,
}

/// Shared header display.
pub trait HeaderDisplay {
    fn set_header_state(&self, state: HeaderState);
}

/// Client-side history.
pub trait Navigator {
    fn push(&self, path: &str);
}

pub struct HeaderSync {
    display: Rc<dyn HeaderDisplay>,
    navigator: Rc<dyn Navigator>,
    last_step: Cell<Option<CheckoutStep>>,
}

impl HeaderSync {
    pub fn new(display: Rc<dyn HeaderDisplay>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            display,
            navigator,
            last_step: Cell::new(None),
        }
    }

    /// Push header state if `step` differs from the last pushed step.
    /// Returns whether a push happened.
    pub fn sync(&self, step: CheckoutStep) -> bool {
        if self.last_step.get() == Some(step) {
            return false;
        }
        self.last_step.set(Some(step));

        let navigator = Rc::clone(&self.navigator);
        let state = HeaderState {
            name: CHECKOUT_HEADER,
            title: descriptor(step).title.to_string(),
            on_back_click: Handler::new(move |()| navigator.push(SITE_ROOT)),
        };
        tracing::debug!(%step, title = %state.title, "updating checkout header");
        self.display.set_header_state(state);
        true
    }
}
