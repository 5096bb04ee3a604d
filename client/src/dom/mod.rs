//! Element construction over a small host seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never talk to `web-sys` directly. They build through [`Document`] and
//! mutate through [`Element`], so the same view code runs against the browser
//! ([`web`], `hydrate` only) and against the in-memory tree ([`memory`]) that
//! the native tests inspect.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

use thiserror::Error;

/// Failures reported by a DOM host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no document available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingRoot(String),
    #[error("cannot create <{tag}>: {message}")]
    CreateElement { tag: String, message: String },
    #[error("cannot set attribute `{name}`: {message}")]
    SetAttribute { name: String, message: String },
    #[error("cannot append child: {0}")]
    AppendChild(String),
    #[error("cannot listen for `{event}`: {message}")]
    Listener { event: &'static str, message: String },
    #[error("cannot read form: {0}")]
    FormData(String),
}

/// Named values collected from a form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    /// First value submitted under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

pub type ClickHandler = Box<dyn Fn()>;
pub type SubmitHandler = Box<dyn Fn(&FormFields)>;

/// A host element handle. Clones refer to the same underlying node.
pub trait Element: Clone + 'static {
    /// Set an attribute, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::SetAttribute`] if the host rejects the name.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Replace the element's text content verbatim.
    fn set_text(&self, text: &str);

    /// Append `child` as the last child.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::AppendChild`] if the host refuses the insertion.
    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Remove every child element.
    fn clear_children(&self);

    /// Run `handler` on click. The host's default action is prevented.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] if the listener cannot be attached.
    fn on_click(&self, handler: ClickHandler) -> Result<(), DomError>;

    /// Run `handler` with the form's named fields on submit. The host's
    /// default submission is prevented.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] if the listener cannot be attached.
    fn on_submit(&self, handler: SubmitHandler) -> Result<(), DomError>;
}

/// A host capable of creating elements and locating existing ones.
pub trait Document: 'static {
    type Element: Element;

    /// Create a new, unattached element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::CreateElement`] for tag names the host rejects.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    /// Look up an attached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Build an element with `attributes` applied in order and `text` assigned
/// verbatim.
///
/// # Errors
///
/// Propagates host failures from creation or attribute assignment.
pub fn el<D: Document>(
    document: &D,
    tag: &str,
    attributes: &[(&str, &str)],
    text: Option<&str>,
) -> Result<D::Element, DomError> {
    let element = document.create_element(tag)?;
    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }
    if let Some(text) = text {
        element.set_text(text);
    }
    Ok(element)
}

/// `<label>` with text.
///
/// # Errors
///
/// Propagates host failures from [`el`].
pub fn label<D: Document>(document: &D, text: &str) -> Result<D::Element, DomError> {
    el(document, "label", &[], Some(text))
}
