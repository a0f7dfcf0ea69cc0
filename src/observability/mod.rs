//! Observability for vehicledb
//!
//! Structured JSON logging only: one line per event, `event` and `severity`
//! first, remaining fields sorted by key.
//!
//! ```ignore
//! use vehicledb::observability::{Event, Logger};
//!
//! Logger::event(Event::DataLoaded, &[("vehicles", "100")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
