//! Elements that live for the whole session: sign-in, sign-out, app marker.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::rc::Rc;

use crate::backend::Backend;
use crate::dom::{Document, DomError, Element, el};

pub const SIGN_IN_LABEL: &str = "Sign In With Google";
pub const SIGN_OUT_LABEL: &str = "Sign Out";
pub const APP_MARKER_TEXT: &str = "App";

/// Built once at startup and re-attached on every auth transition.
pub struct AuthControls<E> {
    pub app_marker: E,
    pub sign_in: E,
    pub sign_out: E,
}

impl<E: Element> AuthControls<E> {
    /// # Errors
    ///
    /// Propagates host failures while building or wiring the buttons.
    pub fn build<D, B>(document: &D, backend: &Rc<B>) -> Result<Self, DomError>
    where
        D: Document<Element = E>,
        B: Backend,
    {
        let sign_in = el(document, "button", &[("type", "button")], Some(SIGN_IN_LABEL))?;
        let provider = backend.clone();
        sign_in.on_click(Box::new(move || provider.sign_in()))?;

        let sign_out = el(document, "button", &[("type", "button")], Some(SIGN_OUT_LABEL))?;
        let provider = backend.clone();
        sign_out.on_click(Box::new(move || provider.sign_out()))?;

        let app_marker = el(document, "div", &[], Some(APP_MARKER_TEXT))?;

        Ok(Self {
            app_marker,
            sign_in,
            sign_out,
        })
    }
}
