//! Compile-time backend selection.
//!
//! Exactly one backend satisfies the macro surface per build: the full
//! framework (`tracing` feature), the minimal no-op (`silent` feature), or
//! the default fallback renderer. Selection is a property of the build, not
//! of runtime state, so a narrow call compiled against one backend carries
//! no residue of the others.

#[cfg(all(feature = "tracing", feature = "silent"))]
compile_error!("backend features `tracing` and `silent` are mutually exclusive");

#[cfg(feature = "tracing")]
mod full;
#[cfg(feature = "tracing")]
pub use full::{assertion, critical_assertion, emit, trace_event};

#[cfg(all(feature = "silent", not(feature = "tracing")))]
mod silent;
#[cfg(all(feature = "silent", not(feature = "tracing")))]
pub use silent::{assertion, critical_assertion, emit, trace_event};

#[cfg(not(any(feature = "tracing", feature = "silent")))]
mod fallback;
#[cfg(not(any(feature = "tracing", feature = "silent")))]
pub use fallback::{assertion, critical_assertion, emit, trace_event};
