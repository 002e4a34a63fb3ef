//! Message types accepted by the logging entry points.
//!
//! The encoding of a message is part of its static type: narrow call sites
//! monomorphize to the narrow rendering and wide call sites to the wide
//! rendering. No runtime encoding tag exists, so the two paths cannot be
//! confused.

use core::fmt::{self, Write};

use widestring::{U16CStr, U16Str};

use crate::{
    convert,
    render::{MESSAGE_CAPACITY, Truncating, WIDE_CAPACITY},
    sink::{COMPONENT_IHV_VIDEO, DebugSink, OUTPUT_TRACE},
};

/// A log message body with a statically known encoding.
///
/// Implemented for [`fmt::Arguments`] and [`&str`](str) on the narrow path
/// and for [`&U16Str`](U16Str) and [`&U16CStr`](U16CStr) on the wide path.
pub trait LogMessage {
    /// Writes the rendered message body to `sink`.
    fn emit_body<S: DebugSink + ?Sized>(&self, sink: &S);
}

impl LogMessage for fmt::Arguments<'_> {
    fn emit_body<S: DebugSink + ?Sized>(&self, sink: &S) {
        let mut body = Truncating::<{ MESSAGE_CAPACITY }>::new();
        let _ = body.write_fmt(*self);

        sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, body.as_bytes());
    }
}

impl LogMessage for &str {
    fn emit_body<S: DebugSink + ?Sized>(&self, sink: &S) {
        sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, self.as_bytes());
    }
}

impl LogMessage for &U16Str {
    /// The wide body is bounded to 2048 units, converted, and emitted; the
    /// transient conversion buffer is released before returning. A body
    /// that cannot be converted is replaced by a fixed placeholder.
    fn emit_body<S: DebugSink + ?Sized>(&self, sink: &S) {
        let units = self.as_slice();
        let staged = &units[..units.len().min(WIDE_CAPACITY)];

        match convert::utf16_to_narrow(staged) {
            Ok(narrow) => sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, narrow.as_bytes()),
            Err(_) => sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, convert::CONVERSION_FAILED),
        }
    }
}

impl LogMessage for &U16CStr {
    fn emit_body<S: DebugSink + ?Sized>(&self, sink: &S) {
        self.as_ustr().emit_body(sink)
    }
}
