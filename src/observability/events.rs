//! Observable events
//!
//! Events are explicit and typed; each carries the severity it is logged at.

use std::fmt;

use super::logger::Severity;

/// Observable events in vehicledb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Vehicle data file loaded into the store
    DataLoaded,
    /// Data file could not be loaded (FATAL)
    DataLoadFailed,
    /// Listener bound, serving requests
    ServerStart,
    /// Graceful shutdown finished
    ServerStop,

    // Requests
    /// One HTTP request served
    HttpRequest,
    /// A handler hit an unexpected error
    HttpInternalError,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DataLoaded => "DATA_LOADED",
            Event::DataLoadFailed => "DATA_LOAD_FAILED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::HttpInternalError => "HTTP_INTERNAL_ERROR",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DataLoadFailed => Severity::Fatal,
            Event::HttpInternalError => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
