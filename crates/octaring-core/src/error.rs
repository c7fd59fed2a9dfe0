//! Error types for digit lists, their cursors and decimal text I/O.

use std::{io, path::PathBuf};

use crate::Radix;

/// Errors returned by [`RingDigitList`](crate::RingDigitList) operations and cursors.
///
/// A failed call never leaves a partially spliced ring behind; the list is
/// always in its pre-call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RingListError {
    /// An index was outside the range accepted by the operation.
    #[display("index {index} out of range for list of size {size}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The list size at the time of the call.
        size: usize,
    },
    /// A digit value was not in `[0, radix)`.
    #[display("digit {digit} is not valid in radix {radix}")]
    InvalidDigit {
        /// The rejected digit.
        digit: u8,
        /// The radix of the list.
        radix: Radix,
    },
    /// The operands of a binary operation do not share a radix.
    #[display("operands have different radices: {left} and {right}")]
    RadixMismatch {
        /// Radix of the left operand.
        left: Radix,
        /// Radix of the right operand.
        right: Radix,
    },
    /// A cursor was used after the list was mutated through another handle.
    #[display("list was modified during traversal (cursor generation {expected}, list generation {actual})")]
    ConcurrentModification {
        /// Generation captured by the cursor.
        expected: u64,
        /// Current generation of the list.
        actual: u64,
    },
    /// A cursor was used with a list other than the one that created it.
    #[display("cursor belongs to a different list")]
    ForeignCursor,
    /// A cursor was advanced past either end of the list.
    #[display("no element in that direction")]
    NoSuchElement,
    /// A cursor was asked to replace or remove an element before producing one.
    #[display("cursor has no current element")]
    NoCurrentElement,
}

/// Errors returned when parsing decimal text into a digit list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDecimalError {
    /// The text was empty.
    #[display("decimal number is empty")]
    Empty,
    /// The text was a negative integer literal.
    #[display("decimal number must not be negative: {input:?}")]
    Negative {
        /// The rejected text.
        input: String,
    },
    /// The text was not a base-10 integer literal.
    #[display("invalid decimal number: {input:?}")]
    Malformed {
        /// The rejected text.
        input: String,
    },
}

/// Errors returned when constructing a [`Radix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RadixError {
    /// The base was outside 2-36.
    #[display("radix {radix} is not in the range 2-36")]
    OutOfRange {
        /// The rejected base.
        radix: u8,
    },
}

/// Errors returned when loading or saving a decimal number file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DecimalFileError {
    /// Reading or writing the file failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// The file did not contain a number on its first line.
    #[display("no number found in {}", path.display())]
    MissingNumber {
        /// The file that was read.
        path: PathBuf,
    },
    /// The first line of the file was not a valid decimal number.
    #[display("{_0}")]
    Parse(#[from] ParseDecimalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RingListError::OutOfRange { index: 5, size: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for list of size 3");

        let err = RingListError::InvalidDigit {
            digit: 8,
            radix: Radix::OCTAL,
        };
        assert_eq!(err.to_string(), "digit 8 is not valid in radix 8");

        let err = ParseDecimalError::Negative {
            input: "-12".to_owned(),
        };
        assert_eq!(err.to_string(), "decimal number must not be negative: \"-12\"");

        let err = DecimalFileError::MissingNumber {
            path: PathBuf::from("number.txt"),
        };
        assert_eq!(err.to_string(), "no number found in number.txt");
    }

    #[test]
    fn test_file_error_from_parse_error() {
        let err = DecimalFileError::from(ParseDecimalError::Empty);
        assert!(matches!(err, DecimalFileError::Parse(ParseDecimalError::Empty)));
    }
}
