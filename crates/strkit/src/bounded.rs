//! Bounded, always-terminated copies into fixed buffers.

use bstr::BStr;

use crate::cstr::c_len;

/// Copy the C string `source` into `dest`, `strncpy` style, but always NUL
/// terminated.
///
/// At most `dest.len() - 1` bytes are copied, the rest of `dest` is zero
/// filled and `dest[dest.len() - 1]` is always `0`. A `None` source writes an
/// empty string; a zero-length `dest` is left untouched.
///
/// Returns the string now held by `dest`, without its terminator.
///
/// ```rust
/// let mut dest = [0xffu8; 4];
/// assert_eq!(strkit::copy_bounded(&mut dest, Some(b"orcish".as_slice())), "orc");
/// assert_eq!(dest, *b"orc\0");
/// ```
pub fn copy_bounded<'a>(dest: &'a mut [u8], source: Option<&[u8]>) -> &'a BStr {
    let Some(source) = source else {
        if let Some(first) = dest.first_mut() {
            *first = 0;
        }
        return BStr::new(b"");
    };
    let Some(last) = dest.len().checked_sub(1) else {
        return BStr::new(b"");
    };

    let copied = c_len(source).min(last);
    dest[..copied].copy_from_slice(&source[..copied]);
    dest[copied..].fill(0);
    BStr::new(&dest[..copied])
}

/// Like [`copy_bounded`], reporting whether `source` fit without truncation.
///
/// Returns `true` iff the C string length of `source` is less than
/// `dest.len()`. A `None` source or zero-length `dest` reports `false`.
///
/// ```rust
/// let mut dest = [0u8; 4];
/// assert!(strkit::copy_bounded_fits(&mut dest, Some(b"orc".as_slice())));
/// assert!(!strkit::copy_bounded_fits(&mut dest, Some(b"orcs".as_slice())));
/// ```
pub fn copy_bounded_fits(dest: &mut [u8], source: Option<&[u8]>) -> bool {
    let Some(src) = source else {
        copy_bounded(dest, None);
        return false;
    };
    if dest.is_empty() {
        return false;
    }
    let copied = copy_bounded(dest, Some(src)).len();
    src.get(copied).is_none_or(|&b| b == 0)
}
