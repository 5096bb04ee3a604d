//! Browser DOM host backed by `web-sys`.
//!
//! Event listener closures are owned by the [`WebElement`] handles that
//! registered them and are released when the last handle drops. Callers that
//! detach an element should drop their handles along with it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement};

use super::{ClickHandler, Document, DomError, Element, FormFields, SubmitHandler};

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// An `HtmlElement` plus the Rust closures listening on it.
#[derive(Clone)]
pub struct WebElement {
    node: HtmlElement,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl WebElement {
    fn wrap(node: HtmlElement) -> Self {
        Self {
            node,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn node(&self) -> &HtmlElement {
        &self.node
    }

    fn listen(&self, event: &'static str, listener: Listener) -> Result<(), DomError> {
        self.node
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|e| DomError::Listener {
                event,
                message: js_message(&e),
            })?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

impl Element for WebElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.node
            .set_attribute(name, value)
            .map_err(|e| DomError::SetAttribute {
                name: name.to_owned(),
                message: js_message(&e),
            })
    }

    fn set_text(&self, text: &str) {
        self.node.set_inner_text(text);
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.node
            .append_child(&child.node)
            .map_err(|e| DomError::AppendChild(js_message(&e)))?;
        Ok(())
    }

    fn clear_children(&self) {
        while let Some(child) = self.node.first_element_child() {
            child.remove();
        }
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), DomError> {
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            handler();
        });
        self.listen("click", listener)
    }

    fn on_submit(&self, handler: SubmitHandler) -> Result<(), DomError> {
        let form: HtmlFormElement = self.node.clone().dyn_into().map_err(|_| DomError::Listener {
            event: "submit",
            message: "element is not a <form>".to_owned(),
        })?;
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            match form_fields(&form) {
                Ok(fields) => handler(&fields),
                Err(e) => log::warn!("submit ignored: {e}"),
            }
        });
        self.listen("submit", listener)
    }
}

/// Collect string entries of a form; file entries are skipped.
fn form_fields(form: &HtmlFormElement) -> Result<FormFields, DomError> {
    let data = web_sys::FormData::new_with_form(form).map_err(|e| DomError::FormData(js_message(&e)))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| DomError::FormData(js_message(&e)))?
        .ok_or_else(|| DomError::FormData("FormData is not iterable".to_owned()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let pair: js_sys::Array = entry.map_err(|e| DomError::FormData(js_message(&e)))?.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields.into_iter().collect())
}

/// The page's `document`.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// # Errors
    ///
    /// Returns [`DomError::NoDocument`] outside a window context.
    pub fn current() -> Result<Self, DomError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|document| Self { document })
            .ok_or(DomError::NoDocument)
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn create_element(&self, tag: &str) -> Result<WebElement, DomError> {
        let element = self.document.create_element(tag).map_err(|e| DomError::CreateElement {
            tag: tag.to_owned(),
            message: js_message(&e),
        })?;
        let node = element.dyn_into::<HtmlElement>().map_err(|_| DomError::CreateElement {
            tag: tag.to_owned(),
            message: "not an HTML element".to_owned(),
        })?;
        Ok(WebElement::wrap(node))
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_ref::<HtmlElement>().cloned())
            .map(WebElement::wrap)
    }
}

/// Best-effort message from a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
