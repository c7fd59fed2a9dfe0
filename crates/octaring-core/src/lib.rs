//! Numbers stored as circular singly-linked lists of digits.
//!
//! This crate provides [`RingDigitList`], a ring of single digits in one fixed
//! radix (octal by default), along with the numeric operations built on top of
//! it. The digit sequence is read most significant first, starting at the head.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`radix`]: the numeration base [`Radix`] and digit range checks
//!    - [`ring_list`]: the ring itself, with indexed access, insertion,
//!      removal, sorting and rotation
//!    - [`cursor`]: generation-stamped cursors that detect mutation during traversal
//!
//! 2. **Numeric operations** ([`arith`])
//!    - [`from_decimal`] / [`to_decimal_string`]: decimal text in and out
//!    - [`change_scale`]: re-express a value in another radix
//!    - [`add_with_carry`]: columnar addition with carry propagation
//!
//! 3. **Decimal text I/O** ([`decimal_file`]): one-number text files
//!
//! # Examples
//!
//! ```
//! use octaring_core::{RingDigitList, add_with_carry, to_decimal_string};
//!
//! let a: RingDigitList = "83".parse()?;
//! let b: RingDigitList = "7".parse()?;
//! assert_eq!(a.to_string(), "123");
//!
//! let sum = add_with_carry(&a, &b)?;
//! assert_eq!(sum.to_string(), "132");
//! assert_eq!(to_decimal_string(&sum), "90");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod arith;
pub mod cursor;
pub mod decimal_file;
pub mod error;
pub mod radix;
pub mod ring_list;

// Re-export commonly used types
pub use self::{
    arith::{add_with_carry, change_scale, change_scale_to, from_decimal, to_decimal_string},
    cursor::Cursor,
    error::{DecimalFileError, ParseDecimalError, RadixError, RingListError},
    radix::Radix,
    ring_list::{Iter, RingDigitList},
};
