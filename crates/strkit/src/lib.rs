//! Allocation-aware primitives for C-style byte strings.
//!
//! The crate covers bounded NUL-terminated copies, ASCII case conversion,
//! formatting into growable strings, `0x` hexadecimal and boolean token
//! parsing, and a pair of name-cleaning transforms. Functions that write into
//! caller-supplied `&mut [u8]` buffers never allocate and always leave the
//! buffer NUL terminated; functions returning [`BString`] or writing into a
//! [`String`](alloc::string::String) own their allocation.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod boolean;
mod bounded;
mod case;
mod cstr;
mod error;
mod format;
mod hex;
mod names;
mod options;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use boolean::parse_bool;
pub use bounded::{copy_bounded, copy_bounded_fits};
pub use case::{CaseScratch, SCRATCH_LEN, to_lower, to_lower_into, to_upper, to_upper_into};
pub use cstr::c_len;
pub use error::FormatError;
pub use format::{
    GrowableString, build_any_length_string, build_any_length_string_with, format_into, format_into_with,
};
pub use hex::{parse_hex32, parse_hex64};
pub use names::{clean_display_name, clean_display_name_into, sanitize_apostrophes, sanitized_apostrophes};
pub use options::GrowthOptions;

/// Append formatted text to a [`String`](alloc::string::String).
///
/// Expands to [`format_into`] with `format_args!`.
///
/// ```rust
/// let mut out = String::new();
/// strkit::format_into!(&mut out, "{}-{}", 5, "x").unwrap();
/// assert_eq!(out, "5-x");
/// ```
#[macro_export]
macro_rules! format_into {
    ($out:expr, $($arg:tt)*) => {
        $crate::format_into($out, ::core::format_args!($($arg)*))
    };
}

/// Replace the contents of a [`String`](alloc::string::String) with freshly
/// formatted text, growing the new buffer by doubling.
///
/// ```rust
/// let mut out = String::from("stale");
/// let len = strkit::build_any_length_string!(&mut out, "{:>5}", 7).unwrap();
/// assert_eq!((len, out.as_str()), (5, "    7"));
/// ```
#[macro_export]
macro_rules! build_any_length_string {
    ($out:expr, $($arg:tt)*) => {
        $crate::build_any_length_string($out, ::core::format_args!($($arg)*))
    };
}

/// Append formatted text to a [`GrowableString`].
///
/// ```rust
/// let mut buf = strkit::GrowableString::new();
/// strkit::append_any_length_string!(buf, "hp={}", 12).unwrap();
/// strkit::append_any_length_string!(buf, " mp={}", 3).unwrap();
/// assert_eq!(buf.as_str(), "hp=12 mp=3");
/// ```
#[macro_export]
macro_rules! append_any_length_string {
    ($buf:expr, $($arg:tt)*) => {
        $buf.append(::core::format_args!($($arg)*))
    };
}
