//! Record creation form.
//!
//! No validation, no clearing after submit, no double-submit guard: every
//! submit hands the current field values to the callback.

#[cfg(test)]
#[path = "record_form_test.rs"]
mod record_form_test;

use crate::backend::Record;
use crate::dom::{Document, DomError, Element, FormFields, el, label};

pub const TITLE_FIELD: &str = "title";
pub const CONTENT_FIELD: &str = "content";

/// Absent fields read as empty strings.
pub fn record_from_fields(fields: &FormFields) -> Record {
    Record::new(
        fields.get(TITLE_FIELD).unwrap_or_default(),
        fields.get(CONTENT_FIELD).unwrap_or_default(),
    )
}

/// Build the form and call `on_submit` with the entered record on each submit.
///
/// # Errors
///
/// Propagates host failures while building or wiring the form.
pub fn record_form<D, F>(document: &D, on_submit: F) -> Result<D::Element, DomError>
where
    D: Document,
    F: Fn(Record) + 'static,
{
    let form = el(document, "form", &[("class", "record-form")], None)?;
    form.append_child(&label(document, "Title")?)?;
    form.append_child(&el(document, "input", &[("type", "text"), ("name", TITLE_FIELD)], None)?)?;
    form.append_child(&label(document, "Content")?)?;
    form.append_child(&el(document, "textarea", &[("name", CONTENT_FIELD)], None)?)?;
    form.append_child(&el(document, "button", &[("type", "submit")], Some("Save"))?)?;

    form.on_submit(Box::new(move |fields: &FormFields| {
        let record = record_from_fields(fields);
        log::debug!("submit record: title={:?} content={:?}", record.title, record.content);
        on_submit(record);
    }))?;

    Ok(form)
}
