//! Rendering of log events into the debug output sink.

use core::fmt::{self, Write};

use crate::{
    level::Severity,
    location::Location,
    message::LogMessage,
    sink::{COMPONENT_IHV_VIDEO, DebugSink, OUTPUT_TRACE},
    status::Status,
};

/// Capacity of the composed location/severity prefix, in bytes.
pub(crate) const PREFIX_CAPACITY: usize = 384;

/// Capacity of a formatted narrow message body, in bytes.
pub(crate) const MESSAGE_CAPACITY: usize = 512;

/// Bound of the wide staging window, in UTF-16 units.
pub(crate) const WIDE_CAPACITY: usize = 2048;

/// A bounded writer that drops whatever does not fit.
///
/// Truncation lands on a character boundary so the staged bytes stay valid
/// UTF-8. Writing never errors.
#[derive(Debug)]
pub(crate) struct Truncating<const N: usize> {
    buf: heapless::Vec<u8, N>,
}

impl<const N: usize> Truncating<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl<const N: usize> fmt::Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.buf.len();
        let mut take = s.len().min(room);

        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }

        let _ = self.buf.extend_from_slice(&s.as_bytes()[..take]);

        Ok(())
    }
}

/// Renders one log event into `sink`.
///
/// The prefix carries the call site and the severity label, bounded to a
/// fixed capacity and silently truncated beyond it. The body is rendered
/// according to the message's encoding and followed by a line terminator.
/// Always returns [`Status::SUCCESS`].
pub fn emit_to<S, M>(sink: &S, location: Location, severity: Severity, message: M) -> Status
where
    S: DebugSink + ?Sized,
    M: LogMessage,
{
    let mut prefix = Truncating::<{ PREFIX_CAPACITY }>::new();
    let _ = write!(
        prefix,
        "[{} @ {}] {} : ",
        location.file(),
        location.line(),
        severity.label()
    );

    sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, prefix.as_bytes());
    message.emit_body(sink);
    sink.write(COMPONENT_IHV_VIDEO, OUTPUT_TRACE, b"\n");

    Status::SUCCESS
}

/// Collects rendered bytes where a backend consumes whole lines instead of
/// sink writes.
#[cfg(any(test, feature = "tracing"))]
#[derive(Debug, Default)]
pub(crate) struct CollectSink {
    buf: core::cell::RefCell<heapless::Vec<u8, { RENDERED_CAPACITY }>>,
}

/// Capacity of a collected rendering, in bytes.
#[cfg(any(test, feature = "tracing"))]
pub(crate) const RENDERED_CAPACITY: usize = 2048;

#[cfg(any(test, feature = "tracing"))]
impl CollectSink {
    pub(crate) fn into_bytes(self) -> heapless::Vec<u8, { RENDERED_CAPACITY }> {
        self.buf.into_inner()
    }
}

#[cfg(any(test, feature = "tracing"))]
impl DebugSink for CollectSink {
    fn write(
        &self,
        _component: crate::sink::ComponentId,
        _level: crate::sink::OutputLevel,
        bytes: &[u8],
    ) {
        let mut buf = self.buf.borrow_mut();
        let take = bytes.len().min(RENDERED_CAPACITY - buf.len());
        let _ = buf.extend_from_slice(&bytes[..take]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        let mut out = Truncating::<4>::new();
        let _ = write!(out, "\u{65E5}\u{672C}");

        assert_eq!(out.as_bytes(), "\u{65E5}".as_bytes());
    }

    #[test]
    fn drops_excess_without_error() {
        let mut out = Truncating::<8>::new();
        let _ = write!(out, "0123456789abcdef");
        let _ = write!(out, "more");

        assert_eq!(out.as_bytes(), b"01234567");
    }
}
