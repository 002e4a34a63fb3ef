//! The call-site macro surface.
//!
//! Every logging macro has two arms: a narrow format-literal arm that
//! lowers to [`format_args!`], and a single-expression arm whose message is
//! dispatched on its static type — see [`LogMessage`](crate::LogMessage).
//! Wide messages take the second arm and carry no format arguments.

/// Captures the current call site as a [`Location`](crate::Location).
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::core::file!(), ::core::line!())
    };
}

/// Logs at CRITICAL ERROR severity.
#[macro_export]
macro_rules! ros_log_critical_error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::CriticalError,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::CriticalError, $message)
    };
}

/// Logs at ASSERTION severity, then enters the non-fatal escalation.
///
/// This is the logging form; for checking an expression use
/// [`ros_assert!`](crate::ros_assert!).
#[macro_export]
macro_rules! ros_log_assertion {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::assertion($crate::location!(), ::core::format_args!($fmt $(, $arg)*))
    };
    ($message:expr $(,)?) => {
        $crate::backend::assertion($crate::location!(), $message)
    };
}

/// Logs at ERROR severity.
///
/// ```
/// roslog::ros_log_error!("allocation failed, size {}", 4096);
/// roslog::ros_log_error!(widestring::u16str!("wide message"));
/// ```
#[macro_export]
macro_rules! ros_log_error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::Error,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::Error, $message)
    };
}

/// Logs at LOW MEMORY severity.
#[macro_export]
macro_rules! ros_log_low_memory {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::LowMemory,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::LowMemory, $message)
    };
}

/// Logs at WARNING severity.
#[macro_export]
macro_rules! ros_log_warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::Warning,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::Warning, $message)
    };
}

/// Logs at INFO severity.
#[macro_export]
macro_rules! ros_log_information {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::Information,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::Information, $message)
    };
}

/// Logs at TRACE severity.
#[macro_export]
macro_rules! ros_log_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::emit(
            $crate::location!(),
            $crate::Severity::Trace,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($message:expr $(,)?) => {
        $crate::backend::emit($crate::location!(), $crate::Severity::Trace, $message)
    };
}

/// Logs a trace event with an explicit level and category flags.
///
/// ```
/// use roslog::{TraceLevel, TracingFlags};
///
/// roslog::ros_trace_events!(
///     TraceLevel::Verbose,
///     TracingFlags::PRESENT,
///     "present at frame {}",
///     120,
/// );
/// ```
#[macro_export]
macro_rules! ros_trace_events {
    ($level:expr, $flags:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::backend::trace_event(
            $crate::location!(),
            $level,
            $flags,
            ::core::format_args!($fmt $(, $arg)*),
        )
    };
    ($level:expr, $flags:expr, $message:expr $(,)?) => {
        $crate::backend::trace_event($crate::location!(), $level, $flags, $message)
    };
}

/// Checks `exp`; on failure logs the expression text at ASSERTION severity
/// and enters the non-fatal escalation. Execution continues.
#[macro_export]
macro_rules! ros_assert {
    ($exp:expr $(,)?) => {
        if !($exp) {
            let _ = $crate::backend::assertion($crate::location!(), ::core::stringify!($exp));
        }
    };
}

/// Checks `exp`; on failure logs the expression text at CRITICAL ASSERTION
/// severity and halts through the fatal escalation.
#[macro_export]
macro_rules! ros_critical_assert {
    ($exp:expr $(,)?) => {
        if !($exp) {
            let _ =
                $crate::backend::critical_assertion($crate::location!(), ::core::stringify!($exp));
        }
    };
}
