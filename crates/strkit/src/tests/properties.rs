use alloc::{format, string::String, vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    GrowableString, c_len, clean_display_name, copy_bounded, copy_bounded_fits, parse_hex32,
    parse_hex64, sanitized_apostrophes, to_lower, to_upper,
};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: a bounded copy stays inside its buffer, terminates it, and
/// reports a fit exactly when the source is shorter than the buffer.
#[test]
fn bounded_copy_stays_in_bounds() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: Vec<u8>, size: u8) -> bool {
        let size = usize::from(size).max(1);
        let mut buf = vec![0xaa_u8; size + 8];
        let (dest, guard) = buf.split_at_mut(size);

        let written = copy_bounded(dest, Some(source.as_slice())).len();
        let terminated = dest[size - 1] == 0 && dest[written] == 0;
        let prefix = dest[..written] == source[..written];
        let untouched = guard.iter().all(|&b| b == 0xaa);

        let fits = copy_bounded_fits(dest, Some(source.as_slice()));
        terminated && prefix && untouched && fits == (c_len(&source) < size)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

/// Property: hex rendered by `format!` parses back, in either letter case.
#[test]
fn hex_parses_rendered_values() {
    fn prop(n: u64, upper_prefix: bool) -> bool {
        let prefix = if upper_prefix { "0X" } else { "0x" };
        #[allow(clippy::cast_possible_truncation)]
        let low = n as u32;
        parse_hex64(format!("{prefix}{n:x}")) == n
            && parse_hex64(format!("{prefix}{n:X}")) == n
            && parse_hex32(format!("{prefix}{n:x}")) == low
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(u64, bool) -> bool);
}

#[quickcheck]
fn case_conversion_preserves_length(s: String) -> bool {
    let upper = to_upper(Some(s.as_bytes())).unwrap_or_default();
    let lower = to_lower(Some(upper.as_slice())).unwrap_or_default();
    let expected = c_len(s.as_bytes());
    upper.len() == expected && lower.len() == expected && !lower.iter().any(u8::is_ascii_uppercase)
}

#[quickcheck]
fn display_names_hold_only_letters_spaces_and_backticks(s: String) -> bool {
    clean_display_name(&s)
        .iter()
        .all(|&b| b.is_ascii_alphabetic() || b == b' ' || b == b'`')
}

#[quickcheck]
fn apostrophe_sanitizing_is_idempotent(s: String) -> bool {
    let once = sanitized_apostrophes(&s);
    !once.contains(&b'\'') && sanitized_apostrophes(&once) == once
}

/// Property: appending never loses what was appended before.
#[test]
fn appends_accumulate() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(parts: Vec<String>) -> bool {
        let mut buf = GrowableString::new();
        let mut expected = String::new();
        for part in &parts {
            if buf.append(format_args!("{part}")).is_err() {
                return false;
            }
            expected.push_str(part);
            if buf.as_str() != expected || buf.capacity() <= buf.len() {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<String>) -> bool);
}
