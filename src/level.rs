//! Severity levels and tracing categories.

/// Trace verbosity levels, in the order the full framework defines them.
///
/// The fallback supplies these when no framework does; the values are part
/// of the escalation contract and must not be reordered.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceLevel {
    /// Tracing disabled.
    None = 0,
    /// Abnormal exit or termination events.
    Critical = 1,
    /// Severe error events.
    Error = 2,
    /// Warning events.
    Warning = 3,
    /// Non-error events such as entry and exit.
    Information = 4,
    /// Detailed trace events.
    Verbose = 5,
}

impl TraceLevel {
    /// Returns the raw level value.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// Tracing category bits, in control-GUID definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingFlags(u32);

impl TracingFlags {
    /// General driver events.
    pub const DEFAULT: Self = Self(1 << 0);
    /// Present-path events.
    pub const PRESENT: Self = Self(1 << 1);
    /// VidPn management events.
    pub const VIDPN: Self = Self(1 << 2);
    /// Debug and assertion events.
    pub const DEBUG: Self = Self(1 << 3);
    /// Bugcheck-bound events.
    pub const BUGCHECK: Self = Self(1 << 4);

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if all bits of `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for TracingFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Severity of a log emission.
///
/// Each severity carries the label printed in the message prefix and the
/// [`TraceLevel`] / [`TracingFlags`] binding the full framework files it
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An unrecoverable error; bugcheck-bound.
    CriticalError,
    /// A violated invariant reported by a non-fatal assertion.
    Assertion,
    /// A violated invariant reported by a fatal assertion.
    CriticalAssertion,
    /// A severe error.
    Error,
    /// An allocation failure.
    LowMemory,
    /// A warning.
    Warning,
    /// An informational event.
    Information,
    /// A verbose trace event.
    Trace,
    /// An explicit trace event carrying its own level and flags.
    TraceEvents,
}

impl Severity {
    /// The label printed in the message prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::CriticalError => "CRITICAL ERROR",
            Severity::Assertion => "ASSERTION",
            Severity::CriticalAssertion => "CRITICAL ASSERTION",
            Severity::Error => "ERROR",
            Severity::LowMemory => "LOW MEMORY",
            Severity::Warning => "WARNING",
            Severity::Information => "INFO",
            Severity::Trace => "TRACE",
            Severity::TraceEvents => "TRACE_EVENTS",
        }
    }

    /// The trace level this severity is filed under.
    pub const fn level(self) -> TraceLevel {
        match self {
            Severity::CriticalError | Severity::CriticalAssertion => TraceLevel::Critical,
            Severity::Assertion | Severity::Error | Severity::LowMemory => TraceLevel::Error,
            Severity::Warning => TraceLevel::Warning,
            Severity::Information => TraceLevel::Information,
            Severity::Trace | Severity::TraceEvents => TraceLevel::Verbose,
        }
    }

    /// The category flags this severity is filed under.
    pub const fn flags(self) -> TracingFlags {
        match self {
            Severity::CriticalError | Severity::CriticalAssertion => TracingFlags::BUGCHECK,
            Severity::Assertion => TracingFlags::DEBUG,
            _ => TracingFlags::DEFAULT,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Severity::CriticalError.label(), "CRITICAL ERROR");
        assert_eq!(Severity::LowMemory.label(), "LOW MEMORY");
        assert_eq!(Severity::Information.label(), "INFO");
        assert_eq!(Severity::TraceEvents.label(), "TRACE_EVENTS");
    }

    #[test]
    fn level_bindings() {
        assert_eq!(Severity::CriticalError.level(), TraceLevel::Critical);
        assert_eq!(Severity::Assertion.level(), TraceLevel::Error);
        assert_eq!(Severity::Trace.level(), TraceLevel::Verbose);
        assert_eq!(TraceLevel::Verbose.value(), 5);
    }

    #[test]
    fn flag_bits() {
        let flags = TracingFlags::DEFAULT | TracingFlags::DEBUG;

        assert!(flags.contains(TracingFlags::DEFAULT));
        assert!(flags.contains(TracingFlags::DEBUG));
        assert!(!flags.contains(TracingFlags::BUGCHECK));
        assert_eq!(Severity::Assertion.flags(), TracingFlags::DEBUG);
    }
}
