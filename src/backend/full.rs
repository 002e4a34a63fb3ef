//! Full-framework backend: forwards to [`tracing`].
//!
//! Entry points render the message body through the same statically
//! dispatched machinery as the fallback, then hand the text to `tracing`
//! events carrying the call site and severity as fields. The debug sink is
//! not used; output belongs to whatever subscriber the embedder installed.

use alloc::string::String;

use crate::{
    escalate,
    level::{Severity, TraceLevel, TracingFlags},
    location::Location,
    message::LogMessage,
    render::CollectSink,
    status::Status,
};

/// Forwards one log event to `tracing` at the severity's bound level.
pub fn emit<M: LogMessage>(location: Location, severity: Severity, message: M) -> Status {
    forward(location, severity.level(), severity, message)
}

/// Trace-event entry point; the explicit level selects the `tracing` level.
pub fn trace_event<M: LogMessage>(
    location: Location,
    level: TraceLevel,
    _flags: TracingFlags,
    message: M,
) -> Status {
    forward(location, level, Severity::TraceEvents, message)
}

/// Logs the failed expression, then enters the non-fatal escalation.
pub fn assertion<M: LogMessage>(location: Location, message: M) -> Status {
    emit(location, Severity::Assertion, message);

    escalate::debug_break(TraceLevel::Error)
}

/// Logs the failed expression, then halts through the fatal escalation.
pub fn critical_assertion<M: LogMessage>(location: Location, message: M) -> Status {
    emit(location, Severity::CriticalAssertion, message);

    escalate::bugcheck(TraceLevel::Critical)
}

fn forward<M: LogMessage>(
    location: Location,
    level: TraceLevel,
    severity: Severity,
    message: M,
) -> Status {
    let collected = CollectSink::default();
    message.emit_body(&collected);

    let bytes = collected.into_bytes();
    let text = String::from_utf8_lossy(&bytes);

    match level {
        TraceLevel::None => {}
        TraceLevel::Critical | TraceLevel::Error => {
            tracing::error!(
                file = location.file(),
                line = location.line(),
                severity = severity.label(),
                "{}",
                text
            );
        }
        TraceLevel::Warning => {
            tracing::warn!(
                file = location.file(),
                line = location.line(),
                severity = severity.label(),
                "{}",
                text
            );
        }
        TraceLevel::Information => {
            tracing::info!(
                file = location.file(),
                line = location.line(),
                severity = severity.label(),
                "{}",
                text
            );
        }
        TraceLevel::Verbose => {
            tracing::trace!(
                file = location.file(),
                line = location.line(),
                severity = severity.label(),
                "{}",
                text
            );
        }
    }

    Status::SUCCESS
}
