//! Display-name cleanup.

use bstr::{BStr, BString};

use crate::cstr::{c_str, write_terminated};

/// Map one byte of a raw name to its display form, or drop it.
///
/// `_` becomes a space; ASCII letters and the backtick are kept; digits,
/// punctuation and non-ASCII bytes are dropped.
fn display_byte(b: u8) -> Option<u8> {
    match b {
        b'_' => Some(b' '),
        b'`' => Some(b),
        _ if b.is_ascii_alphabetic() => Some(b),
        _ => None,
    }
}

/// Write the display form of the C string `input` into `output`, NUL
/// terminated.
///
/// `output` needs `input.len() + 1` bytes to never truncate; a shorter buffer
/// keeps as much as fits.
///
/// ```rust
/// let mut out = [0u8; 16];
/// assert_eq!(strkit::clean_display_name_into(b"Big_Bad_Orc#1", &mut out), "Big Bad Orc");
/// ```
pub fn clean_display_name_into<'o>(input: &[u8], output: &'o mut [u8]) -> &'o BStr {
    write_terminated(output, c_str(input).iter().copied().filter_map(display_byte))
}

/// Display form of the C string `input`.
///
/// ```rust
/// assert_eq!(strkit::clean_display_name("a_`Gnoll`_pup00"), "a `Gnoll` pup");
/// ```
#[must_use]
pub fn clean_display_name(input: impl AsRef<[u8]>) -> BString {
    c_str(input.as_ref())
        .iter()
        .copied()
        .filter_map(display_byte)
        .collect::<alloc::vec::Vec<u8>>()
        .into()
}

/// Replace every apostrophe in `s` with an underscore, in place.
///
/// ```rust
/// let mut name = strkit::BString::from("O'Brien");
/// strkit::sanitize_apostrophes(&mut name);
/// assert_eq!(name, "O_Brien");
/// ```
pub fn sanitize_apostrophes(s: &mut [u8]) {
    for b in s.iter_mut().filter(|b| **b == b'\'') {
        *b = b'_';
    }
}

/// Copy of the C string `s` with every apostrophe replaced by an underscore.
#[must_use]
pub fn sanitized_apostrophes(s: impl AsRef<[u8]>) -> BString {
    let mut copy = BString::from(c_str(s.as_ref()));
    sanitize_apostrophes(&mut copy);
    copy
}
