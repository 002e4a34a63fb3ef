//! Default backend: renders through the registered debug sink.

use crate::{
    escalate,
    level::{Severity, TraceLevel, TracingFlags},
    location::Location,
    message::LogMessage,
    render, sink,
    status::Status,
};

/// Renders one log event into the registered debug sink.
///
/// Succeeds without output when no sink has been registered.
pub fn emit<M: LogMessage>(location: Location, severity: Severity, message: M) -> Status {
    match sink::registered() {
        Some(sink) => render::emit_to(sink, location, severity, message),
        None => Status::SUCCESS,
    }
}

/// Trace-event entry point.
///
/// The explicit level and flags are accepted for call-site compatibility;
/// the fallback renders unconditionally.
pub fn trace_event<M: LogMessage>(
    location: Location,
    _level: TraceLevel,
    _flags: TracingFlags,
    message: M,
) -> Status {
    emit(location, Severity::TraceEvents, message)
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
