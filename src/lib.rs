//! # roslog
//!
//! A logging façade for kernel-mode driver code.
//!
//! Call sites use one family of macros — [`ros_log_error!`],
//! [`ros_log_information!`], [`ros_assert!`] and friends — that tag every
//! emission with its source file and line, accept narrow or wide message
//! arguments without the caller knowing which, and compile against one of
//! three backends without being rewritten.
//!
//! The rendered bytes go to a [`DebugSink`] the embedding driver registers
//! once with [`set_debug_sink`]; assertion failures additionally branch into
//! an [`Escalation`] registered with [`set_escalation`]. Both seams are
//! external: this crate never halts the system or touches the platform
//! print primitive itself.
//!
//! ## Features
//!
//! - `tracing`: Replaces the fallback renderer with the
//!   [`tracing`](https://docs.rs/tracing/latest/tracing/) framework. Entry
//!   points forward rendered text with file, line and severity fields to
//!   `tracing` events; the debug sink is not used.
//! - `silent`: Minimal backend for builds where any output is undesirable.
//!   Every logging entry point accepts and discards its arguments and
//!   returns [`Status::SUCCESS`].
//!
//! `tracing` and `silent` are mutually exclusive; selecting both is a
//! compile-time error.
//!
//! Wide message conversion allocates its transient buffer through the
//! global allocator. The embedder must provide one that is valid in every
//! execution context logging is invoked from.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod backend;

mod convert;

mod escalate;
pub use escalate::{Escalation, bugcheck, debug_break, set_escalation};

mod level;
pub use level::{Severity, TraceLevel, TracingFlags};

mod location;
pub use location::Location;

mod macros;

mod message;
pub use message::LogMessage;

mod recorder;
pub use recorder::{RecorderConfigureParams, cleanup_tracing, configure_recorder, init_tracing};

mod render;
pub use render::emit_to;

mod sink;
pub use sink::{
    AlreadyRegistered, COMPONENT_IHV_VIDEO, ComponentId, DebugSink, OUTPUT_TRACE, OutputLevel,
    set_debug_sink,
};

mod status;
pub use status::Status;

#[doc(hidden)]
pub mod mock;


#[cfg(test)]
extern crate std;
