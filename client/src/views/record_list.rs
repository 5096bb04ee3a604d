//! Flat list of record titles.

#[cfg(test)]
#[path = "record_list_test.rs"]
mod record_list_test;

use crate::backend::Records;
use crate::dom::{Document, DomError, Element, el};

/// List container; every render replaces all rows.
pub struct RecordList<E> {
    container: E,
}

impl<E: Element> RecordList<E> {
    /// # Errors
    ///
    /// Propagates host failures while creating the container.
    pub fn new<D: Document<Element = E>>(document: &D) -> Result<Self, DomError> {
        Ok(Self {
            container: el(document, "div", &[("class", "records")], None)?,
        })
    }

    pub fn element(&self) -> &E {
        &self.container
    }

    /// Replace all rows with one title-only row per record, in delivery order.
    ///
    /// # Errors
    ///
    /// Propagates host failures while building rows.
    pub fn render<D: Document<Element = E>>(&self, document: &D, records: &Records) -> Result<(), DomError> {
        self.container.clear_children();
        for (_, record) in records.iter() {
            let row = el(document, "div", &[("class", "records__item")], Some(&record.title))?;
            self.container.append_child(&row)?;
        }
        Ok(())
    }
}
