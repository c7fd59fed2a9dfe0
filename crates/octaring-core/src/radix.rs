//! Numeration base of a digit list.

use std::fmt::{self, Display};

use crate::error::{RadixError, RingListError};

/// A numeration base in the range 2-36.
///
/// Every [`RingDigitList`](crate::RingDigitList) carries one radix, fixed at
/// construction. A digit `d` is legal for the radix `r` when `0 <= d < r`.
///
/// # Examples
///
/// ```
/// use octaring_core::Radix;
///
/// let radix = Radix::OCTAL;
/// assert_eq!(radix.value(), 8);
/// assert!(radix.contains(7));
/// assert!(!radix.contains(8));
///
/// assert!(Radix::try_new(16).is_ok());
/// assert!(Radix::try_new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported base.
    pub const MIN: u8 = 2;

    /// Largest supported base.
    pub const MAX: u8 = 36;

    /// Base 8, the radix digit lists are built with by default.
    pub const OCTAL: Self = Self::new(8);

    /// Base 10, the alternate radix produced by [`change_scale`](crate::change_scale).
    pub const DECIMAL: Self = Self::new(10);

    /// Creates a radix.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 2-36.
    ///
    /// ```should_panic
    /// use octaring_core::Radix;
    ///
    /// let _ = Radix::new(37);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(
            value >= Self::MIN && value <= Self::MAX,
            "radix must be in the range 2-36"
        );
        Self(value)
    }

    /// Creates a radix, rejecting bases outside 2-36.
    ///
    /// # Errors
    ///
    /// Returns [`RadixError::OutOfRange`] if `value` is not in the range 2-36.
    pub const fn try_new(value: u8) -> Result<Self, RadixError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RadixError::OutOfRange { radix: value })
        }
    }

    /// Returns the numeric base.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if `digit` is a legal digit in this radix.
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        digit < self.0
    }

    /// Validates a digit against this radix.
    ///
    /// # Errors
    ///
    /// Returns [`RingListError::InvalidDigit`] if `digit >= self.value()`.
    pub const fn check(self, digit: u8) -> Result<u8, RingListError> {
        if self.contains(digit) {
            Ok(digit)
        } else {
            Err(RingListError::InvalidDigit { digit, radix: self })
        }
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::OCTAL
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Radix> for u8 {
    fn from(radix: Radix) -> u8 {
        radix.value()
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> u32 {
        u32::from(radix.value())
    }
}

impl TryFrom<u8> for Radix {
    type Error = RadixError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}
