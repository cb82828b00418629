//! Boolean parsing of configuration-style tokens.

use crate::cstr::c_str;

/// Recognised words, checked in order.
const WORDS: &[(&str, bool)] = &[
    ("true", true),
    ("false", false),
    ("yes", true),
    ("no", false),
    ("on", true),
    ("off", false),
    ("enable", true),
    ("disable", false),
    ("enabled", true),
    ("disabled", false),
    ("y", true),
    ("n", false),
];

/// Interpret a configuration-style token as a boolean.
///
/// The words `true`/`false`, `yes`/`no`, `on`/`off`, `enable`/`disable`,
/// `enabled`/`disabled` and `y`/`n` match ASCII case-insensitively. Anything
/// else is read as a leading decimal integer, `atoi` style, and is `true`
/// when nonzero; unparseable text reads as zero.
///
/// ```rust
/// assert!(strkit::parse_bool("YES"));
/// assert!(!strkit::parse_bool("Off"));
/// assert!(strkit::parse_bool("42"));
/// assert!(!strkit::parse_bool("abc"));
/// ```
#[must_use]
pub fn parse_bool(token: impl AsRef<[u8]>) -> bool {
    let token = c_str(token.as_ref());
    WORDS
        .iter()
        .find(|(word, _)| token.eq_ignore_ascii_case(word.as_bytes()))
        .map_or_else(|| leading_int_is_nonzero(token), |&(_, value)| value)
}

/// Whether the `atoi` reading of `s` is nonzero.
///
/// Skips leading C `isspace` bytes (ASCII whitespace plus vertical tab) and
/// an optional sign, then looks for a nonzero digit before the first
/// non-digit byte. Overflow cannot turn a nonzero value into zero here, so the
/// digits need not be accumulated.
fn leading_int_is_nonzero(s: &[u8]) -> bool {
    let start = s
        .iter()
        .position(|&b| !(b.is_ascii_whitespace() || b == b'\x0b'))
        .unwrap_or(s.len());
    let s = &s[start..];
    let s = match s {
        [b'+' | b'-', rest @ ..] => rest,
        _ => s,
    };
    s.iter()
        .take_while(|b| b.is_ascii_digit())
        .any(|&b| b != b'0')
}
