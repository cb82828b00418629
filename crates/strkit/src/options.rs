use crate::error::FormatError;

/// Capacity policy for the growable formatting helpers.
///
/// # Default
///
/// The defaults reproduce the classic fixed constants: 128 bytes as the
/// first guess for a freshly built string, 256 bytes for an empty append
/// buffer, 25 bytes of slack on every append growth and no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthOptions {
    /// First capacity tried by
    /// [`build_any_length_string`](crate::build_any_length_string); doubled
    /// until the formatted text and its terminator fit.
    ///
    /// # Default
    ///
    /// `128`
    pub initial_capacity: usize,

    /// Capacity a [`GrowableString`](crate::GrowableString) takes on its
    /// first append when it has none.
    ///
    /// # Default
    ///
    /// `256`
    pub append_capacity: usize,

    /// Extra bytes added on top of the overflow whenever a
    /// [`GrowableString`](crate::GrowableString) has to grow.
    ///
    /// # Default
    ///
    /// `25`
    pub slack: usize,

    /// Upper bound on any capacity, terminator included.
    ///
    /// # Default
    ///
    /// `None`
    pub max_capacity: Option<usize>,
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 128,
            append_capacity: 256,
            slack: 25,
            max_capacity: None,
        }
    }
}

impl GrowthOptions {
    /// Reject `requested` if it is above [`max_capacity`](Self::max_capacity).
    pub(crate) fn check(&self, requested: usize) -> Result<(), FormatError> {
        match self.max_capacity {
            Some(limit) if requested > limit => {
                tracing::debug!(requested, limit, "capacity limit exceeded");
                Err(FormatError::CapacityExceeded { requested, limit })
            }
            _ => Ok(()),
        }
    }

    /// Smallest power-of-two multiple of
    /// [`initial_capacity`](Self::initial_capacity) that holds `needed`.
    pub(crate) fn doubled_capacity(&self, needed: usize) -> usize {
        let mut capacity = self.initial_capacity.max(1);
        while capacity < needed {
            capacity = capacity.saturating_mul(2);
        }
        capacity
    }
}
