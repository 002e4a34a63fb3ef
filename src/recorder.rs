//! Framework control shims.
//!
//! Stand-ins for the tracing framework's initialization, teardown and
//! recorder configuration entry points. All of them are inert and report
//! the fixed success, so driver init and unload paths compile and run
//! unchanged whichever backend is selected.

use crate::status::Status;

/// Recorder configuration accepted by [`configure_recorder`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecorderConfigureParams {
    /// Verbosity filter; zeroed by [`Default`].
    pub level_filter: u32,
}

/// Inert stand-in for framework trace initialization.
#[inline]
pub fn init_tracing() -> Status {
    Status::SUCCESS
}

/// Inert stand-in for framework trace teardown.
#[inline]
pub fn cleanup_tracing() -> Status {
    Status::SUCCESS
}

/// Inert stand-in for recorder configuration.
#[inline]
pub fn configure_recorder(_params: &RecorderConfigureParams) -> Status {
    Status::SUCCESS
}
