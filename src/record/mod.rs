//! Request record data model
//!
//! A [`RequestRecord`] accumulates method, path, status, size, timing, extras
//! and severity-tagged events for one request, then renders itself once.

pub mod duration;
pub mod event;
pub mod extras;
pub mod request;

pub use duration::PrettyDuration;
pub use event::{Event, Severity};
pub use extras::Extras;
pub use request::{FinalizeHook, RequestRecord};
