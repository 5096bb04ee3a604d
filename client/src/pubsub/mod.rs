//! Single-threaded publish/subscribe primitives.
//!
//! DESIGN
//! ======
//! Every fan-out iterates a snapshot of the listener list taken before the
//! first callback runs, so listeners may register or remove listeners (and
//! publish again) without tripping a `RefCell` borrow.

mod bus;
mod emitter;
mod observable;

pub use bus::{EventBus, ListenerId};
pub use emitter::Emitter;
pub use observable::{Observable, Subscriber};
