//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when swapping the current card for a higher one.
///
/// The display strings are meant to be shown to the table as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SwapError {
    /// The requested card is not an integer.
    #[error("Please enter a valid number.")]
    NotANumber,
    /// The requested card is not higher than the current card.
    #[error("Number must be higher than the current card.")]
    NotHigher,
    /// Nobody at the table holds the requested card.
    #[error("Number not found in the table.")]
    NotFound,
}

/// Errors that can occur while editing a roster list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RosterError {
    /// Name is empty after trimming.
    #[error("name is empty")]
    EmptyName,
    /// No entry at the given index.
    #[error("no entry at index {index} (list has {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the list.
        len: usize,
    },
    /// Entry is already at the edge of its list.
    #[error("entry cannot move further in that direction")]
    CannotMove,
}
