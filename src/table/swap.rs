use alloc::vec::Vec;

use crate::error::SwapError;

use super::Table;

/// Parses a typed card number.
///
/// Surrounding whitespace is ignored, an optional sign is accepted, and the
/// longest run of leading digits is used, so `"7th"` and `"7.5"` both read
/// as 7. Returns `None` when no digit follows the sign. Values beyond the
/// range of `i64` saturate.
///
/// # Example
///
/// ```
/// use initdeal::parse_card_number;
///
/// assert_eq!(parse_card_number(" 8 "), Some(8));
/// assert_eq!(parse_card_number("-3"), Some(-3));
/// assert_eq!(parse_card_number("7.5"), Some(7));
/// assert_eq!(parse_card_number("x7"), None);
/// ```
#[must_use]
pub fn parse_card_number(input: &str) -> Option<i64> {
    let text = input.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let mut digits = unsigned.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    let magnitude = digits.fold(0_i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Exchanges the current card with a higher card held elsewhere.
///
/// Checks run in order and the first failure is returned:
///
/// 1. Without a dealt card at `current` the swap is skipped and the input
///    returned unchanged.
/// 2. `input` must parse with [`parse_card_number`].
/// 3. The requested card must be strictly higher than the current card.
/// 4. Someone must hold the requested card; the first holder is used.
///
/// On success the current position takes the requested card, its previous
/// holder takes the old current card, and the turn moves to that holder.
///
/// # Errors
///
/// Returns [`SwapError`] when any of checks 2 to 4 fails.
///
/// # Example
///
/// ```
/// use initdeal::{SwapError, swap_cards};
///
/// let (cards, current) = swap_cards(&[3, 7, 1], Some(0), "7").unwrap();
/// assert_eq!(cards, vec![7, 3, 1]);
/// assert_eq!(current, Some(1));
///
/// assert_eq!(swap_cards(&[3, 7, 1], Some(0), "2"), Err(SwapError::NotHigher));
/// ```
pub fn swap_cards(
    cards: &[u8],
    current: Option<usize>,
    input: &str,
) -> Result<(Vec<u8>, Option<usize>), SwapError> {
    let Some((index, held)) = current.and_then(|index| Some((index, *cards.get(index)?))) else {
        return Ok((cards.to_vec(), current));
    };

    let requested = parse_card_number(input).ok_or(SwapError::NotANumber)?;
    if requested <= i64::from(held) {
        return Err(SwapError::NotHigher);
    }

    let target = u8::try_from(requested)
        .ok()
        .and_then(|value| cards.iter().position(|&card| card == value))
        .ok_or(SwapError::NotFound)?;

    let mut swapped = cards.to_vec();
    swapped.swap(index, target);
    Ok((swapped, Some(target)))
}

impl Table {
    /// Swaps the current card for the typed higher card.
    ///
    /// Any previous swap error is cleared first. On failure the error is also
    /// kept on the table (see [`Table::swap_error`]) and the cards are left as
    /// they were. Returns the position whose turn it now is.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError`] if the input is not a number, is not higher than
    /// the current card, or is not on the table.
    pub fn swap(&mut self, input: &str) -> Result<Option<usize>, SwapError> {
        self.swap_error = None;

        match swap_cards(&self.assignment.cards, self.assignment.current, input) {
            Ok((cards, current)) => {
                if current != self.assignment.current {
                    tracing::debug!(from = ?self.assignment.current, to = ?current, "swapped cards");
                }
                self.assignment.cards = cards;
                self.assignment.current = current;
                Ok(current)
            }
            Err(err) => {
                tracing::debug!(input, error = %err, "swap rejected");
                self.swap_error = Some(err);
                Err(err)
            }
        }
    }

    /// Returns the error from the last swap attempt, if it failed.
    #[must_use]
    pub const fn swap_error(&self) -> Option<SwapError> {
        self.swap_error
    }
}
