//! NUL-terminated byte string helpers shared by the copy and transform
//! routines.
//!
//! A C string here is any `&[u8]`: its logical end is the first `0x00` byte,
//! or the end of the slice when it holds no NUL.

use bstr::BStr;

/// Length of the C string in `s`, not counting the terminator.
///
/// ```rust
/// assert_eq!(strkit::c_len(b"abc\0def"), 3);
/// assert_eq!(strkit::c_len(b"abc"), 3);
/// ```
#[must_use]
pub fn c_len(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// The C string in `s`, without its terminator.
pub(crate) fn c_str(s: &[u8]) -> &[u8] {
    &s[..c_len(s)]
}

/// Write `bytes` into `dest` as a C string, truncating to `dest.len() - 1`.
///
/// Bytes past the terminator are left as they were. Returns the written
/// string; an empty `dest` receives nothing.
pub(crate) fn write_terminated<I>(dest: &mut [u8], bytes: I) -> &BStr
where
    I: IntoIterator<Item = u8>,
{
    let Some(room) = dest.len().checked_sub(1) else {
        return BStr::new(b"");
    };
    let mut written = 0;
    for (slot, b) in dest[..room].iter_mut().zip(bytes) {
        *slot = b;
        written += 1;
    }
    dest[written] = 0;
    BStr::new(&dest[..written])
}
