//! Base conversion and columnar addition on digit lists.
//!
//! These helpers only use the public contract of [`RingDigitList`] and always
//! return freshly built lists; their inputs are never mutated.
//!
//! # Examples
//!
//! ```
//! use octaring_core::{Radix, RingDigitList, add_with_carry, change_scale, to_decimal_string};
//!
//! let a = RingDigitList::from_decimal_digits(Radix::OCTAL, "83")?;
//! assert_eq!(a.to_vec(), [1, 2, 3]);
//!
//! let b = RingDigitList::from_digits(Radix::OCTAL, [7])?;
//! let sum = add_with_carry(&a, &b)?;
//! assert_eq!(sum.to_vec(), [1, 3, 2]);
//! assert_eq!(to_decimal_string(&sum), "90");
//!
//! let decimal = change_scale(&sum);
//! assert_eq!(decimal.to_vec(), [9, 0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero as _;

use crate::{ParseDecimalError, Radix, RingDigitList, RingListError};

impl RingDigitList {
    /// Parses a non-negative base-10 integer literal into a list of the given radix.
    ///
    /// See [`from_decimal`] for the accepted syntax.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseDecimalError`] if `text` is empty, negative or malformed.
    pub fn from_decimal_digits(radix: Radix, text: &str) -> Result<Self, ParseDecimalError> {
        from_decimal(radix, text)
    }
}

/// Parses a decimal literal into an octal list.
impl FromStr for RingDigitList {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_decimal(Radix::OCTAL, s)
    }
}

/// Parses a non-negative base-10 integer literal into a list of the given radix.
///
/// The literal is a run of ASCII digits with an optional sign. Leading zeros are
/// dropped; zero becomes a single `0` digit. Surrounding whitespace is not
/// accepted.
///
/// # Errors
///
/// Returns [`ParseDecimalError::Empty`] for empty text,
/// [`ParseDecimalError::Negative`] for a negative value, and
/// [`ParseDecimalError::Malformed`] for anything else that is not a literal.
///
/// # Examples
///
/// ```
/// use octaring_core::{ParseDecimalError, Radix, from_decimal};
///
/// assert_eq!(from_decimal(Radix::OCTAL, "0")?.to_vec(), [0]);
/// assert_eq!(from_decimal(Radix::OCTAL, "0064")?.to_vec(), [1, 0, 0]);
/// assert!(matches!(
///     from_decimal(Radix::OCTAL, "-1"),
///     Err(ParseDecimalError::Negative { .. })
/// ));
/// # Ok::<(), ParseDecimalError>(())
/// ```
pub fn from_decimal(radix: Radix, text: &str) -> Result<RingDigitList, ParseDecimalError> {
    if text.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    let malformed = || ParseDecimalError::Malformed {
        input: text.to_owned(),
    };
    let (negative, digits) = match text.as_bytes() {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        bytes => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }
    let value = BigUint::parse_bytes(digits, 10).ok_or_else(malformed)?;
    if negative && !value.is_zero() {
        return Err(ParseDecimalError::Negative {
            input: text.to_owned(),
        });
    }
    Ok(from_value(radix, &value))
}

/// Returns the value of the list as a base-10 string.
///
/// Digits are folded head first as `acc = acc * radix + digit` into an
/// arbitrary-precision accumulator. An empty list yields `"0"`.
#[must_use]
pub fn to_decimal_string(list: &RingDigitList) -> String {
    value_of(list).to_str_radix(10)
}

/// Re-expresses the value of the list in base 10.
///
/// Equivalent to [`change_scale_to`] with [`Radix::DECIMAL`].
#[must_use]
pub fn change_scale(list: &RingDigitList) -> RingDigitList {
    change_scale_to(list, Radix::DECIMAL)
}

/// Re-expresses the value of the list in another radix.
///
/// The result always has at least one digit; an empty input converts to `0`.
///
/// # Examples
///
/// ```
/// use octaring_core::{Radix, RingDigitList, change_scale_to};
///
/// let octal = RingDigitList::from_digits(Radix::OCTAL, [3, 7, 7])?;
/// let hex = change_scale_to(&octal, Radix::new(16));
/// assert_eq!(hex.to_string(), "ff");
/// # Ok::<(), octaring_core::RingListError>(())
/// ```
#[must_use]
pub fn change_scale_to(list: &RingDigitList, radix: Radix) -> RingDigitList {
    let value = value_of(list);
    log::trace!(
        "changing scale of {} digits from radix {} to radix {radix}",
        list.len(),
        list.radix()
    );
    from_value(radix, &value)
}

/// Adds two lists of the same radix by right-to-left columnar addition.
///
/// At each column the digits of both operands (zero once an operand is
/// exhausted) and the running carry are summed; `sum % radix` is prepended to
/// the result and `sum / radix` carried into the next column. The loop runs
/// while either operand has digits left or the carry is non-zero, so adding two
/// empty lists yields an empty list.
///
/// # Errors
///
/// Returns [`RingListError::RadixMismatch`] if the operands have different radices.
pub fn add_with_carry(
    a: &RingDigitList,
    b: &RingDigitList,
) -> Result<RingDigitList, RingListError> {
    if a.radix() != b.radix() {
        return Err(RingListError::RadixMismatch {
            left: a.radix(),
            right: b.radix(),
        });
    }
    let radix = a.radix();
    let base = radix.value();
    let (left, right) = (a.to_vec(), b.to_vec());
    let mut left = left.iter().rev();
    let mut right = right.iter().rev();

    let mut result = RingDigitList::new(radix);
    let mut carry = 0;
    loop {
        let (x, y) = (left.next(), right.next());
        if x.is_none() && y.is_none() && carry == 0 {
            break;
        }
        // at most 2 * 35 + 1, well inside u8
        let sum = x.copied().unwrap_or(0) + y.copied().unwrap_or(0) + carry;
        carry = sum / base;
        result.insert(0, sum % base)?;
    }
    log::trace!(
        "added {} and {} digits into {} digits (radix {radix})",
        a.len(),
        b.len(),
        result.len()
    );
    Ok(result)
}

fn value_of(list: &RingDigitList) -> BigUint {
    let radix = BigUint::from(u32::from(list.radix()));
    list.iter()
        .fold(BigUint::zero(), |acc, digit| acc * &radix + digit)
}

fn from_value(radix: Radix, value: &BigUint) -> RingDigitList {
    // `to_radix_be` yields `[0]` for zero
    RingDigitList::from_valid_digits(radix, value.to_radix_be(u32::from(radix)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn octal(digits: &[u8]) -> RingDigitList {
        RingDigitList::from_digits(Radix::OCTAL, digits.iter().copied()).unwrap()
    }

    #[test]
    fn test_from_decimal_examples() {
        assert_eq!(from_decimal(Radix::OCTAL, "83").unwrap().to_vec(), [1, 2, 3]);
        assert_eq!(from_decimal(Radix::OCTAL, "8").unwrap().to_vec(), [1, 0]);
        assert_eq!(from_decimal(Radix::OCTAL, "0").unwrap().to_vec(), [0]);
        assert_eq!(from_decimal(Radix::OCTAL, "000").unwrap().to_vec(), [0]);
        assert_eq!(from_decimal(Radix::OCTAL, "+9").unwrap().to_vec(), [1, 1]);
        assert_eq!(from_decimal(Radix::OCTAL, "-0").unwrap().to_vec(), [0]);
        assert_eq!(
            from_decimal(Radix::DECIMAL, "1200").unwrap().to_vec(),
            [1, 2, 0, 0]
        );
    }

    #[test]
    fn test_from_decimal_rejects_bad_input() {
        assert_eq!(from_decimal(Radix::OCTAL, ""), Err(ParseDecimalError::Empty));
        assert_eq!(
            from_decimal(Radix::OCTAL, "-15"),
            Err(ParseDecimalError::Negative {
                input: "-15".to_owned()
            })
        );
        for input in ["-", "+", "12a", " 12", "1_000", "0x10", "1.5"] {
            assert_eq!(
                from_decimal(Radix::OCTAL, input),
                Err(ParseDecimalError::Malformed {
                    input: input.to_owned()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_from_str_uses_octal() {
        let list: RingDigitList = "64".parse().unwrap();
        assert_eq!(list.radix(), Radix::OCTAL);
        assert_eq!(list.to_vec(), [1, 0, 0]);
        assert!(list.is_ring_closed());
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(to_decimal_string(&octal(&[1, 2, 3])), "83");
        assert_eq!(to_decimal_string(&octal(&[0])), "0");
        assert_eq!(to_decimal_string(&octal(&[0, 0, 7])), "7");
        assert_eq!(to_decimal_string(&RingDigitList::new(Radix::OCTAL)), "0");
    }

    #[test]
    fn test_large_value_round_trip() {
        let text = "340282366920938463463374607431768211457"; // 2^128 + 1
        let list = from_decimal(Radix::OCTAL, text).unwrap();
        assert_eq!(list.len(), 43);
        assert_eq!(list.get(0), Ok(4));
        assert_eq!(to_decimal_string(&list), text);
    }

    #[test]
    fn test_change_scale() {
        let list = octal(&[1, 2, 3]);
        let decimal = change_scale(&list);
        assert_eq!(decimal.radix(), Radix::DECIMAL);
        assert_eq!(decimal.to_vec(), [8, 3]);
        assert_eq!(list.to_vec(), [1, 2, 3]);

        let empty = change_scale(&RingDigitList::new(Radix::OCTAL));
        assert_eq!(empty.to_vec(), [0]);

        let binary = change_scale_to(&list, Radix::new(2));
        assert_eq!(binary.to_string(), "1010011");
    }

    #[test]
    fn test_add_with_carry_examples() {
        let a = octal(&[1, 2, 3]);
        let b = octal(&[7]);
        let sum = add_with_carry(&a, &b).unwrap();
        assert_eq!(sum.to_vec(), [1, 3, 2]);
        assert!(sum.is_ring_closed());
        // one public insertion per produced digit
        assert_eq!(sum.generation(), 3);
        assert_eq!(to_decimal_string(&sum), "90");
        assert_eq!(a.to_vec(), [1, 2, 3]);
        assert_eq!(b.to_vec(), [7]);

        // carry ripples past both operands
        let sum = add_with_carry(&octal(&[7, 7]), &octal(&[1])).unwrap();
        assert_eq!(sum.to_vec(), [1, 0, 0]);

        // operand order does not matter
        let sum = add_with_carry(&octal(&[1]), &octal(&[7, 7])).unwrap();
        assert_eq!(sum.to_vec(), [1, 0, 0]);

        let empty = RingDigitList::new(Radix::OCTAL);
        assert!(add_with_carry(&empty, &empty).unwrap().is_empty());
        assert_eq!(add_with_carry(&empty, &a).unwrap(), a);
    }

    #[test]
    fn test_add_with_carry_rejects_radix_mismatch() {
        let a = octal(&[1]);
        let b = RingDigitList::from_digits(Radix::DECIMAL, [1]).unwrap();
        assert_eq!(
            add_with_carry(&a, &b),
            Err(RingListError::RadixMismatch {
                left: Radix::OCTAL,
                right: Radix::DECIMAL
            })
        );
    }

    fn radix_strategy() -> impl Strategy<Value = Radix> {
        (Radix::MIN..=Radix::MAX).prop_map(Radix::new)
    }

    proptest! {
        #[test]
        fn prop_decimal_round_trip(value in any::<u128>(), radix in radix_strategy()) {
            let text = value.to_string();
            let list = from_decimal(radix, &text).unwrap();
            prop_assert!(list.is_ring_closed());
            prop_assert!(list.iter().all(|d| radix.contains(d)));
            prop_assert_eq!(to_decimal_string(&list), text);
        }

        #[test]
        fn prop_addition_matches_bigint(
            a in proptest::collection::vec(0u8..8, 0..40),
            b in proptest::collection::vec(0u8..8, 0..40),
        ) {
            let (la, lb) = (octal(&a), octal(&b));
            let sum = add_with_carry(&la, &lb).unwrap();
            let expected = value_of(&la) + value_of(&lb);
            prop_assert_eq!(to_decimal_string(&sum), expected.to_string());
            prop_assert!(sum.len() >= a.len().max(b.len()));
        }

        #[test]
        fn prop_change_scale_matches_decimal_text(value in any::<u64>()) {
            let list = from_decimal(Radix::OCTAL, &value.to_string()).unwrap();
            prop_assert_eq!(change_scale(&list).to_string(), value.to_string());
        }
    }
}
