//! Controller-owned state and the events broadcast about it.
//!
//! DESIGN
//! ======
//! There is no global state: the controller owns one [`app::AppState`] and
//! announces every change as an [`events::AppEvent`] on its bus.

pub mod app;
pub mod events;
