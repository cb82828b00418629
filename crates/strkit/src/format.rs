//! Formatting into growable strings.
//!
//! All entry points format in a single pass straight into their
//! destination, so there is no probe-and-retry and no way for the second pass
//! to disagree with the first. On failure the destination is rolled back to
//! what it held before the call.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{error::FormatError, options::GrowthOptions};

/// [`format_into_with`] using [`GrowthOptions::default`], which sets no
/// capacity limit.
///
/// # Errors
///
/// [`FormatError::Formatter`] if a formatting trait implementation fails.
///
/// ```rust
/// let mut out = String::from("a");
/// let n = strkit::format_into(&mut out, format_args!("{}{}", 'b', 3)).unwrap();
/// assert_eq!((n, out.as_str()), (2, "ab3"));
/// ```
pub fn format_into(output: &mut String, args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
    format_into_with(output, args, &GrowthOptions::default())
}

/// Append formatted text to `output`, using its spare capacity first.
///
/// Every chunk the formatter emits is checked against
/// [`GrowthOptions::max_capacity`] before it is copied, so a rejected append
/// never grows `output` past the limit. Returns the number of bytes appended.
/// On error `output` keeps exactly its previous contents.
///
/// # Errors
///
/// [`FormatError::Formatter`] if a formatting trait implementation fails,
/// [`FormatError::CapacityExceeded`] if the text and a terminator would not
/// fit in [`GrowthOptions::max_capacity`].
pub fn format_into_with(
    output: &mut String,
    args: fmt::Arguments<'_>,
    options: &GrowthOptions,
) -> Result<usize, FormatError> {
    let write_point = output.len();
    let mut writer = LimitedWriter {
        text: output,
        options,
        limit: None,
    };
    if writer.write_fmt(args).is_err() {
        let err = writer.limit.take().unwrap_or_else(|| FormatError::formatter(args));
        output.truncate(write_point);
        tracing::debug!(%err, template = args.as_str(), "format_into failed");
        return Err(err);
    }
    Ok(output.len() - write_point)
}

/// Writer that appends to a borrowed string while honouring the capacity
/// limit.
struct LimitedWriter<'t, 'o> {
    text: &'t mut String,
    options: &'o GrowthOptions,
    limit: Option<FormatError>,
}

impl Write for LimitedWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let needed = self.text.len().saturating_add(s.len()).saturating_add(1);
        if let Err(err) = self.options.check(needed) {
            self.limit = Some(err);
            return Err(fmt::Error);
        }
        self.text.push_str(s);
        Ok(())
    }
}

/// [`build_any_length_string_with`] using [`GrowthOptions::default`].
///
/// # Errors
///
/// See [`build_any_length_string_with`].
pub fn build_any_length_string(out: &mut String, args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
    build_any_length_string_with(out, args, &GrowthOptions::default())
}

/// Replace `out` with a fresh buffer holding the formatted text.
///
/// The new buffer starts at [`GrowthOptions::initial_capacity`] and doubles
/// until the text and a terminator fit. The previous buffer is dropped only
/// once formatting has succeeded. Returns the formatted length.
///
/// # Errors
///
/// [`FormatError::Formatter`] if a formatting trait implementation fails,
/// [`FormatError::CapacityExceeded`] if the text would not fit in
/// [`GrowthOptions::max_capacity`]. `out` is unchanged in both cases.
pub fn build_any_length_string_with(
    out: &mut String,
    args: fmt::Arguments<'_>,
    options: &GrowthOptions,
) -> Result<usize, FormatError> {
    let initial = options.initial_capacity.min(options.max_capacity.unwrap_or(usize::MAX));
    let mut writer = DoublingWriter {
        text: String::with_capacity(initial),
        options,
        limit: None,
    };
    if writer.write_fmt(args).is_err() {
        let err = writer.limit.unwrap_or_else(|| FormatError::formatter(args));
        tracing::debug!(%err, "build_any_length_string failed");
        return Err(err);
    }
    let len = writer.text.len();
    *out = writer.text;
    Ok(len)
}

/// Writer that grows its buffer by doubling from the initial capacity.
struct DoublingWriter<'o> {
    text: String,
    options: &'o GrowthOptions,
    limit: Option<FormatError>,
}

impl Write for DoublingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let needed = self.text.len().saturating_add(s.len()).saturating_add(1);
        if needed > self.text.capacity() {
            if let Err(err) = self.options.check(needed) {
                self.limit = Some(err);
                return Err(fmt::Error);
            }
            let capacity = self
                .options
                .doubled_capacity(needed)
                .min(self.options.max_capacity.unwrap_or(usize::MAX));
            tracing::trace!(from = self.text.capacity(), to = capacity, "doubling buffer");
            self.text.reserve_exact(capacity - self.text.len());
        }
        self.text.push_str(s);
        Ok(())
    }
}

/// A string with an explicitly tracked capacity that only ever grows.
///
/// The tracked capacity counts one byte for a terminator, so a buffer of
/// capacity `n` holds at most `n - 1` bytes of text. When an append does not
/// fit, capacity grows by the overflow plus [`GrowthOptions::slack`].
///
/// ```rust
/// use strkit::GrowableString;
///
/// let mut buf = GrowableString::new();
/// assert_eq!(buf.append(format_args!("{}", "x".repeat(300))), Ok(300));
/// assert_eq!(buf.capacity(), 301 + 25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrowableString {
    text: String,
    capacity: usize,
    options: GrowthOptions,
}

impl GrowableString {
    /// An empty buffer with no capacity and default [`GrowthOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer with no capacity and the given options.
    #[must_use]
    pub fn with_options(options: GrowthOptions) -> Self {
        Self {
            text: String::new(),
            capacity: 0,
            options,
        }
    }

    /// Append formatted text, growing the buffer if it does not fit.
    ///
    /// Returns the new total length. On error the buffer is unchanged.
    ///
    /// # Errors
    ///
    /// [`FormatError::Formatter`] if a formatting trait implementation fails,
    /// [`FormatError::CapacityExceeded`] if the grown buffer would be larger
    /// than [`GrowthOptions::max_capacity`]. The limit is checked before each
    /// formatted chunk is copied in.
    pub fn append(&mut self, args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
        let write_point = self.text.len();
        format_into_with(&mut self.text, args, &self.options)?;
        if let Err(err) = self.reserve_for_len() {
            self.text.truncate(write_point);
            return Err(err);
        }
        Ok(self.text.len())
    }

    fn reserve_for_len(&mut self) -> Result<(), FormatError> {
        let limit = self.options.max_capacity.unwrap_or(usize::MAX);
        let needed = self.text.len() + 1;
        self.options.check(needed)?;

        let mut capacity = self.capacity;
        if capacity == 0 {
            capacity = self.options.append_capacity.min(limit);
        }
        if needed > capacity {
            let overflow = needed - capacity;
            capacity = capacity
                .saturating_add(overflow)
                .saturating_add(self.options.slack)
                .min(limit);
        }
        if capacity != self.capacity {
            tracing::trace!(from = self.capacity, to = capacity, "growing append buffer");
            self.capacity = capacity;
        }
        // `capacity` always covers `needed`, so this never underflows. A
        // saturated capacity is tracked but cannot be backed by an allocation.
        if self.text.try_reserve(self.capacity - self.text.len()).is_err() {
            tracing::trace!(capacity = self.capacity, "tracked capacity left unreserved");
        }
        Ok(())
    }

    /// Tracked capacity, terminator included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for GrowableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for GrowableString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
