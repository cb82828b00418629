use thiserror::Error;

/// Failure while formatting into a growable string.
///
/// The destination is always rolled back to its previous contents before
/// one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `Display` or `Debug` implementation reported [`core::fmt::Error`].
    #[error("formatter reported an error with template {template:?}")]
    Formatter {
        /// The format string, when it has no arguments to interpolate.
        template: Option<&'static str>,
    },
    /// Growing the buffer would exceed the configured capacity limit.
    #[error("buffer capacity of {requested} bytes exceeds the limit of {limit}")]
    CapacityExceeded {
        /// Capacity the operation needed, terminator included.
        requested: usize,
        /// [`GrowthOptions::max_capacity`](crate::GrowthOptions::max_capacity).
        limit: usize,
    },
}

impl FormatError {
    pub(crate) fn formatter(args: core::fmt::Arguments<'_>) -> Self {
        FormatError::Formatter {
            template: args.as_str(),
        }
    }
}
