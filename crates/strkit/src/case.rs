//! ASCII case conversion of C strings.

use bstr::{BStr, BString};

use crate::cstr::{c_str, write_terminated};

/// Size of a [`CaseScratch`] buffer, terminator included.
pub const SCRATCH_LEN: usize = 128;

/// Write the upper-cased C string `source` into `target`, NUL terminated.
///
/// Only ASCII letters change. A `None` source writes an empty string. The
/// result is truncated to `target.len() - 1` bytes if `target` is too small.
///
/// ```rust
/// let mut target = [0u8; 8];
/// assert_eq!(strkit::to_upper_into(Some(b"orc #2".as_slice()), &mut target), "ORC #2");
/// ```
pub fn to_upper_into<'t>(source: Option<&[u8]>, target: &'t mut [u8]) -> &'t BStr {
    convert_into(source, target, u8::to_ascii_uppercase)
}

/// Write the lower-cased C string `source` into `target`, NUL terminated.
///
/// See [`to_upper_into`].
pub fn to_lower_into<'t>(source: Option<&[u8]>, target: &'t mut [u8]) -> &'t BStr {
    convert_into(source, target, u8::to_ascii_lowercase)
}

/// Upper-cased copy of the C string `source`; `None` for a missing source.
#[must_use]
pub fn to_upper(source: Option<&[u8]>) -> Option<BString> {
    source.map(|s| BString::from(c_str(s).to_ascii_uppercase()))
}

/// Lower-cased copy of the C string `source`; `None` for a missing source.
#[must_use]
pub fn to_lower(source: Option<&[u8]>) -> Option<BString> {
    source.map(|s| BString::from(c_str(s).to_ascii_lowercase()))
}

fn convert_into<'t>(source: Option<&[u8]>, target: &'t mut [u8], map: fn(&u8) -> u8) -> &'t BStr {
    let source = source.map(c_str).unwrap_or_default();
    write_terminated(target, source.iter().map(map))
}

/// A reusable fixed-size buffer for case conversion without allocating.
///
/// Each call overwrites the previous result. The returned string borrows the
/// scratch, so a result has to be copied out before the scratch is used
/// again. Results longer than `SCRATCH_LEN - 1` bytes are truncated.
///
/// ```rust
/// let mut scratch = strkit::CaseScratch::new();
/// let upper = scratch.upper(b"gnoll").to_owned();
/// assert_eq!(scratch.lower(b"GNOLL"), "gnoll");
/// assert_eq!(upper, "GNOLL");
/// ```
#[derive(Debug, Clone)]
pub struct CaseScratch {
    buf: [u8; SCRATCH_LEN],
}

impl Default for CaseScratch {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseScratch {
    /// A zeroed scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: [0; SCRATCH_LEN],
        }
    }

    /// Upper-case `source` into the scratch.
    pub fn upper(&mut self, source: &[u8]) -> &BStr {
        to_upper_into(Some(source), &mut self.buf)
    }

    /// Lower-case `source` into the scratch.
    pub fn lower(&mut self, source: &[u8]) -> &BStr {
        to_lower_into(Some(source), &mut self.buf)
    }
}
