//! Wide-to-narrow conversion.

use alloc::string::String;
use core::char::decode_utf16;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Placeholder emitted in place of a wide body that cannot be converted.
pub(crate) const CONVERSION_FAILED: &[u8] = b"(failed to convert wide log)";

static OUTSTANDING: AtomicUsize = AtomicUsize::new(0);
static CONVERSIONS: AtomicUsize = AtomicUsize::new(0);

/// An owned narrow rendering of a wide message.
///
/// The backing allocation is released when the value is dropped, on the
/// success and failure paths alike.
#[derive(Debug)]
pub(crate) struct NarrowText {
    text: String,
}

impl NarrowText {
    fn with_capacity(capacity: usize) -> Self {
        OUTSTANDING.fetch_add(1, Ordering::Relaxed);
        CONVERSIONS.fetch_add(1, Ordering::Relaxed);

        Self {
            text: String::with_capacity(capacity),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl Drop for NarrowText {
    fn drop(&mut self) {
        OUTSTANDING.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Error returned when a wide message contains an unpaired surrogate.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ConvertError;

/// Converts UTF-16 units into an owned narrow buffer.
///
/// The partially filled buffer is released when conversion fails midway.
pub(crate) fn utf16_to_narrow(units: &[u16]) -> Result<NarrowText, ConvertError> {
    let mut narrow = NarrowText::with_capacity(units.len());

    for decoded in decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => narrow.text.push(ch),
            Err(_) => return Err(ConvertError),
        }
    }

    Ok(narrow)
}

/// Number of conversion buffers currently alive.
#[cfg(test)]
pub(crate) fn outstanding() -> usize {
    OUTSTANDING.load(Ordering::Relaxed)
}

/// Number of conversions attempted since process start.
#[cfg(test)]
pub(crate) fn conversions() -> usize {
    CONVERSIONS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::GUARD;

    #[test]
    fn converts_basic_text() {
        let _guard = GUARD.lock().unwrap();

        let units: heapless::Vec<u16, 32> = "wide text".encode_utf16().collect();
        let narrow = utf16_to_narrow(&units).expect("Must convert");

        assert_eq!(narrow.as_bytes(), b"wide text");
    }

    #[test]
    fn converts_outside_basic_plane() {
        let _guard = GUARD.lock().unwrap();

        let units: heapless::Vec<u16, 32> = "crab: \u{1F980}".encode_utf16().collect();
        let narrow = utf16_to_narrow(&units).expect("Must convert");

        assert_eq!(narrow.as_bytes(), "crab: \u{1F980}".as_bytes());
    }

    #[test]
    fn releases_buffer_on_failure() {
        let _guard = GUARD.lock().unwrap();

        let before = outstanding();
        let units = [0x0077, 0x0069, 0xD800];

        assert!(matches!(utf16_to_narrow(&units), Err(ConvertError)));
        assert_eq!(outstanding(), before);
    }
}
