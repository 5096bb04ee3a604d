//! Views built through the DOM seam.

pub mod controls;
pub mod record_form;
pub mod record_list;

pub use controls::AuthControls;
pub use record_form::record_form;
pub use record_list::RecordList;
