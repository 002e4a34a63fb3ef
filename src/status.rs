//! The fixed status code returned by every entry point.

/// A status code retained for call-site compatibility.
///
/// Every logging entry point returns [`Status::SUCCESS`]; no other value is
/// ever produced by this crate. Escalation implementations may return their
/// own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(i32);

impl Status {
    /// The fixed success code.
    pub const SUCCESS: Self = Self(0);

    /// Creates a status from a raw code.
    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` for [`Status::SUCCESS`].
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}
