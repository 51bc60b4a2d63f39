//! Initiative card pool.

extern crate alloc;

use alloc::vec::Vec;

/// Number of distinct initiative cards in a default pool (values 1 through 10).
pub const DEFAULT_POOL_SIZE: u8 = 10;

/// Builds an unshuffled pool of initiative cards, `1..=size`.
///
/// A size of zero is treated as one so that a deal always has a card to hand
/// out.
///
/// # Example
///
/// ```
/// use initdeal::card_pool;
///
/// assert_eq!(card_pool(4), vec![1, 2, 3, 4]);
/// assert_eq!(card_pool(0), vec![1]);
/// ```
#[must_use]
pub fn card_pool(size: u8) -> Vec<u8> {
    (1..=size.max(1)).collect()
}
