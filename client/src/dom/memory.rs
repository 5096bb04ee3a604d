//! In-memory DOM host.
//!
//! A retained element tree with just enough behavior for the views: tags,
//! attributes, text, children, form control values, and click/submit
//! dispatch. Used by native tests and by any non-browser build.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::{ClickHandler, Document, DomError, Element, FormFields, SubmitHandler};

#[derive(Default)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    value: String,
    children: Vec<MemoryElement>,
    click_handlers: Vec<Rc<dyn Fn()>>,
    submit_handlers: Vec<Rc<dyn Fn(&FormFields)>>,
}

/// Shared handle to a node in the in-memory tree.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl std::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("text", &node.text)
            .field("children", &node.children.len())
            .finish()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_owned(),
            ..Node::default()
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    /// Current value of a form control.
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    /// Simulate the user typing into a form control.
    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_owned();
    }

    /// Depth-first search of descendants (excluding `self`).
    pub fn find(&self, predicate: &dyn Fn(&MemoryElement) -> bool) -> Option<MemoryElement> {
        for child in self.children() {
            if predicate(&child) {
                return Some(child);
            }
            if let Some(found) = child.find(predicate) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant carrying `name="<name>"`.
    pub fn find_named(&self, name: &str) -> Option<MemoryElement> {
        self.find(&|e| e.attribute("name").as_deref() == Some(name))
    }

    /// Dispatch a click to every registered handler.
    pub fn click(&self) {
        let handlers = self.0.borrow().click_handlers.clone();
        for handler in handlers {
            handler();
        }
    }

    /// Dispatch a submit carrying the values of every named descendant.
    pub fn submit(&self) {
        let fields = self.collect_fields();
        let handlers = self.0.borrow().submit_handlers.clone();
        for handler in handlers {
            handler(&fields);
        }
    }

    fn collect_fields(&self) -> FormFields {
        let mut entries = Vec::new();
        collect_named(self, &mut entries);
        entries.into_iter().collect()
    }
}

fn collect_named(element: &MemoryElement, out: &mut Vec<(String, String)>) {
    for child in element.children() {
        if let Some(name) = child.attribute("name") {
            out.push((name, child.value()));
        }
        collect_named(&child, out);
    }
}

impl Element for MemoryElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        if !is_valid_name(name) {
            return Err(DomError::SetAttribute {
                name: name.to_owned(),
                message: "invalid attribute name".to_owned(),
            });
        }
        let mut node = self.0.borrow_mut();
        if let Some(slot) = node.attributes.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value.to_owned();
        } else {
            node.attributes.push((name.to_owned(), value.to_owned()));
        }
        Ok(())
    }

    fn set_text(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.text = text.to_owned();
        node.children.clear();
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        if self == child {
            return Err(DomError::AppendChild("element cannot contain itself".to_owned()));
        }
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), DomError> {
        self.0.borrow_mut().click_handlers.push(Rc::from(handler));
        Ok(())
    }

    fn on_submit(&self, handler: SubmitHandler) -> Result<(), DomError> {
        self.0.borrow_mut().submit_handlers.push(Rc::from(handler));
        Ok(())
    }
}

/// Document whose `<body>` holds whatever the caller attaches.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    body: MemoryElement,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            body: MemoryElement::new("body"),
        }
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with an empty `<div id="{id}">` attached to the body.
    pub fn with_root(id: &str) -> Self {
        let document = Self::new();
        let root = MemoryElement::new("div");
        root.0
            .borrow_mut()
            .attributes
            .push(("id".to_owned(), id.to_owned()));
        document.body.0.borrow_mut().children.push(root);
        document
    }

    pub fn body(&self) -> &MemoryElement {
        &self.body
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        if !is_valid_name(tag) {
            return Err(DomError::CreateElement {
                tag: tag.to_owned(),
                message: "invalid character".to_owned(),
            });
        }
        Ok(MemoryElement::new(&tag.to_ascii_lowercase()))
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.body.find(&|e| e.attribute("id").as_deref() == Some(id))
    }
}

/// Names must start with a letter and avoid whitespace and markup delimiters.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '"' | '\'' | '='))
}
