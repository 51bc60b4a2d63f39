use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::card_pool;

use super::{Assignment, Table};

/// Deals one card to each of `count` participants from a single shuffle of
/// the pool `1..=pool_size`.
///
/// Position `i` receives `pool[i % pool_size]`, so rosters longer than the
/// pool see the same shuffled cycle repeat. The current turn starts at the
/// lowest card, choosing the lowest position when that card appears more
/// than once. Dealing to nobody yields an empty assignment.
///
/// # Example
///
/// ```
/// use initdeal::deal_cards;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let dealt = deal_cards(3, 10, &mut rng);
/// assert_eq!(dealt.cards().len(), 3);
/// assert!(dealt.current().is_some());
/// ```
pub fn deal_cards<R: Rng + ?Sized>(count: usize, pool_size: u8, rng: &mut R) -> Assignment {
    if count == 0 {
        return Assignment::empty();
    }

    let mut pool = card_pool(pool_size);
    pool.shuffle(rng);

    let cards: Vec<u8> = pool.iter().copied().cycle().take(count).collect();
    Assignment::from_cards(cards)
}

/// Returns the first position holding the lowest card.
pub(crate) fn lowest_card_index(cards: &[u8]) -> Option<usize> {
    let lowest = cards.iter().copied().min()?;
    cards.iter().position(|&card| card == lowest)
}

impl Table {
    /// Deals a fresh card to everyone on the roster, friends first.
    ///
    /// Any previous deal is replaced. The last swap error, if any, is kept
    /// until the next swap attempt.
    /// Returns the position whose turn it now is, or `None` when the roster
    /// is empty.
    pub fn deal(&mut self) -> Option<usize> {
        let dealt = deal_cards(self.roster.len(), self.options.pool_size, &mut self.rng);

        tracing::debug!(
            participants = dealt.cards().len(),
            current = ?dealt.current(),
            "dealt initiative cards"
        );

        self.assignment = dealt;
        self.assignment.current()
    }
}
