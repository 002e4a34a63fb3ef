//! Minimal backend for builds where any output is undesirable.
//!
//! Every entry point accepts and discards its arguments and reports the
//! fixed success. Assertions neither log nor escalate; their expressions
//! are still evaluated at the call site.

use crate::{
    level::{Severity, TraceLevel, TracingFlags},
    location::Location,
    message::LogMessage,
    status::Status,
};

/// Accepts and discards a log event.
pub fn emit<M: LogMessage>(_location: Location, _severity: Severity, _message: M) -> Status {
    Status::SUCCESS
}

/// Accepts and discards a trace event.
pub fn trace_event<M: LogMessage>(
    _location: Location,
    _level: TraceLevel,
    _flags: TracingFlags,
    _message: M,
) -> Status {
    Status::SUCCESS
}

/// Accepts and discards a non-fatal assertion failure.
pub fn assertion<M: LogMessage>(_location: Location, _message: M) -> Status {
    Status::SUCCESS
}

/// Accepts and discards a fatal assertion failure.
pub fn critical_assertion<M: LogMessage>(_location: Location, _message: M) -> Status {
    Status::SUCCESS
}
