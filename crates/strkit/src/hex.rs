//! `0x`-prefixed hexadecimal parsing.
//!
//! Malformed input parses as `0`; there is no way to tell it apart from a
//! literal zero. Over-long input wraps in the result width, which keeps the
//! low-order digits.

use crate::cstr::c_str;

/// Parse a `0x`/`0X` hexadecimal C string into a `u32`.
///
/// Returns `0` for input shorter than three bytes, a missing prefix, or any
/// byte after the prefix that is not a hex digit.
///
/// ```rust
/// assert_eq!(strkit::parse_hex32("0x1A"), 26);
/// assert_eq!(strkit::parse_hex32("1A"), 0);
/// assert_eq!(strkit::parse_hex32("0xZZ"), 0);
/// ```
#[must_use]
pub fn parse_hex32(num: impl AsRef<[u8]>) -> u32 {
    accumulate(num.as_ref(), 0u32, |acc, digit, place| {
        (
            acc.wrapping_add(u32::from(digit).wrapping_mul(place)),
            place.wrapping_mul(16),
        )
    })
}

/// Parse a `0x`/`0X` hexadecimal C string into a `u64`.
///
/// Same rules as [`parse_hex32`].
///
/// ```rust
/// assert_eq!(strkit::parse_hex64("0xFFFFFFFFFFFFFFFF"), u64::MAX);
/// ```
#[must_use]
pub fn parse_hex64(num: impl AsRef<[u8]>) -> u64 {
    accumulate(num.as_ref(), 0u64, |acc, digit, place| {
        (
            acc.wrapping_add(u64::from(digit).wrapping_mul(place)),
            place.wrapping_mul(16),
        )
    })
}

/// Walk the digits from least to most significant, folding with `step`.
///
/// `step` gets the running value, the digit and its place value and returns
/// the next running value and place value.
fn accumulate<T, F>(num: &[u8], zero: T, step: F) -> T
where
    T: Copy + From<u8>,
    F: Fn(T, u8, T) -> (T, T),
{
    let num = c_str(num);
    let digits = match num {
        [b'0', b'x' | b'X', digits @ ..] if !digits.is_empty() => digits,
        _ => return zero,
    };

    let mut acc = zero;
    let mut place = T::from(1);
    for &b in digits.iter().rev() {
        let Some(digit) = hex_digit(b) else {
            return zero;
        };
        (acc, place) = step(acc, digit, place);
    }
    acc
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x0", 0)]
    #[case("0x1a", 26)]
    #[case("0XfF", 255)]
    #[case("0xDEADBEEF", 0xDEAD_BEEF)]
    #[case("0x", 0)]
    #[case("0", 0)]
    #[case("", 0)]
    #[case("x1A", 0)]
    #[case("0x1G", 0)]
    #[case("0x-1", 0)]
    #[case("0x 1", 0)]
    fn parses_32(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_hex32(input), expected);
    }

    #[test]
    fn overlong_input_keeps_low_digits() {
        assert_eq!(parse_hex32("0x123456789"), 0x2345_6789);
        assert_eq!(parse_hex32("0xFFFFFFFFFFFFFFFF"), u32::MAX);
        assert_eq!(parse_hex64("0x1FFFFFFFFFFFFFFFF"), u64::MAX);
    }

    #[test]
    fn invalid_digit_anywhere_discards_everything() {
        assert_eq!(parse_hex64("0xZFFFFFFFF"), 0);
        assert_eq!(parse_hex64("0xFFFFFFFFZ"), 0);
    }

    #[test]
    fn stops_at_terminator() {
        assert_eq!(parse_hex32(b"0x10\0zz"), 16);
        assert_eq!(parse_hex32(b"0x\0"), 0);
    }
}
