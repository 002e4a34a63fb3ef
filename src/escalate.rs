//! Assertion escalation primitives.
//!
//! Both primitives are external collaborators: one enters the debugger or
//! records a recoverable fault, the other halts the system. This crate only
//! forwards to them after logging an assertion failure.

use conquer_once::spin::OnceCell;

use crate::{level::TraceLevel, sink::AlreadyRegistered, status::Status};

/// Reacts to assertion violations.
pub trait Escalation {
    /// Enters the debugger or records a recoverable fault.
    ///
    /// Execution is expected to continue after this returns.
    fn debug_break(&self, level: TraceLevel) -> Status;

    /// Halts the system.
    ///
    /// Execution is not expected to continue.
    fn bugcheck(&self, level: TraceLevel) -> Status;
}

static ESCALATION: OnceCell<&'static (dyn Escalation + Sync)> = OnceCell::uninit();

/// Registers the escalation primitives.
///
/// Registration happens once for the lifetime of the process; escalations
/// before it succeed without effect.
pub fn set_escalation(
    escalation: &'static (dyn Escalation + Sync),
) -> Result<(), AlreadyRegistered> {
    ESCALATION
        .try_init_once(|| escalation)
        .map_err(|_| AlreadyRegistered)
}

/// Forwards to the registered non-fatal escalation.
pub fn debug_break(level: TraceLevel) -> Status {
    match ESCALATION.try_get() {
        Ok(escalation) => escalation.debug_break(level),
        Err(_) => Status::SUCCESS,
    }
}

/// Forwards to the registered fatal escalation.
pub fn bugcheck(level: TraceLevel) -> Status {
    match ESCALATION.try_get() {
        Ok(escalation) => escalation.bugcheck(level),
        Err(_) => Status::SUCCESS,
    }
}
