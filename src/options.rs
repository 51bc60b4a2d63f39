//! Table configuration options.

use crate::card::DEFAULT_POOL_SIZE;

/// Configuration options for an initiative table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use initdeal::TableOptions;
///
/// let options = TableOptions::default()
///     .with_pool_size(12)
///     .with_trim_names(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of distinct cards in the pool (cards are `1..=pool_size`).
    ///
    /// Rosters longer than the pool reuse the same shuffled pool cyclically.
    pub pool_size: u8,
    /// Whether names are trimmed of surrounding whitespace when added.
    pub trim_names: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            trim_names: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of cards in the pool.
    ///
    /// # Example
    ///
    /// ```
    /// use initdeal::TableOptions;
    ///
    /// let options = TableOptions::default().with_pool_size(6);
    /// assert_eq!(options.pool_size, 6);
    /// ```
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u8) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets whether names are trimmed when added.
    ///
    /// # Example
    ///
    /// ```
    /// use initdeal::TableOptions;
    ///
    /// let options = TableOptions::default().with_trim_names(false);
    /// assert_eq!(options.trim_names, false);
    /// ```
    #[must_use]
    pub const fn with_trim_names(mut self, trim: bool) -> Self {
        self.trim_names = trim;
        self
    }
}
