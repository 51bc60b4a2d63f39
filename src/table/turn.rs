use alloc::vec::Vec;

use super::Table;

/// Moves the turn to the next card in ascending order.
///
/// The current card is located by value in a sorted copy of `cards`; the
/// card at the following sorted position becomes current, resolved back to
/// the first position in `cards` holding that value. When several
/// participants share a value this lookup always lands on the first of them,
/// so the turn can stay put on a duplicate.
///
/// Returns `current` unchanged when nothing is dealt, no turn is set, the
/// index does not point into `cards`, or the current card is already the
/// highest, even when another position holds the same highest card. There
/// is no wraparound.
///
/// # Example
///
/// ```
/// use initdeal::advance;
///
/// assert_eq!(advance(&[3, 7, 1], Some(2)), Some(0));
/// assert_eq!(advance(&[3, 7, 1], Some(0)), Some(1));
/// assert_eq!(advance(&[3, 7, 1], Some(1)), Some(1));
/// assert_eq!(advance(&[10, 3, 10], Some(2)), Some(2));
/// ```
#[must_use]
pub fn advance(cards: &[u8], current: Option<usize>) -> Option<usize> {
    let Some(held) = current.and_then(|index| cards.get(index).copied()) else {
        return current;
    };
    if cards.iter().all(|&card| card <= held) {
        return current;
    }

    let mut sorted: Vec<u8> = cards.to_vec();
    sorted.sort_unstable();

    let rank = sorted.iter().position(|&card| card == held);
    let next = rank.and_then(|rank| sorted.get(rank + 1)).copied();

    match next {
        Some(value) => cards.iter().position(|&card| card == value).or(current),
        None => current,
    }
}

impl Table {
    /// Passes the turn to the holder of the next-higher card.
    ///
    /// Returns the position whose turn it now is. Does nothing when no deal
    /// exists or the current card is the highest.
    pub fn next_turn(&mut self) -> Option<usize> {
        let before = self.assignment.current;
        let after = advance(&self.assignment.cards, before);

        if after == before {
            tracing::trace!(current = ?before, "turn unchanged");
        } else {
            tracing::debug!(from = ?before, to = ?after, "advanced turn");
        }

        self.assignment.current = after;
        after
    }

    /// Returns `true` if the current card is the highest on the table.
    #[must_use]
    pub fn is_last_turn(&self) -> bool {
        self.assignment
            .current_card()
            .is_some_and(|held| self.assignment.cards.iter().all(|&card| card <= held))
    }
}
