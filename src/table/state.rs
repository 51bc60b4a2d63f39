//! Table actions and dealt state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::roster::Side;

use super::deal::lowest_card_index;

/// A single user input the table can react to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add a name to the end of a side.
    AddName {
        /// Side to add to.
        side: Side,
        /// Name as typed.
        name: String,
    },
    /// Remove the name at an index.
    RemoveName {
        /// Side to remove from.
        side: Side,
        /// Index within that side.
        index: usize,
    },
    /// Move a name one place up.
    MoveUp {
        /// Side of the name.
        side: Side,
        /// Index within that side.
        index: usize,
    },
    /// Move a name one place down.
    MoveDown {
        /// Side of the name.
        side: Side,
        /// Index within that side.
        index: usize,
    },
    /// Empty a side.
    Clear(Side),
    /// Deal fresh cards to the whole roster.
    Deal,
    /// Pass the turn to the next-higher card.
    Next,
    /// Swap the current card for the typed higher card.
    Swap(String),
    /// Drop the dealt cards and any swap error, keeping the roster.
    Reset,
}

/// Dealt cards and the position whose turn it is.
///
/// Positions index the roster as it was when the cards were dealt, friends
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub(super) cards: Vec<u8>,
    pub(super) current: Option<usize>,
}

impl Assignment {
    /// Creates an assignment with nothing dealt.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: Vec::new(),
            current: None,
        }
    }

    /// Creates an assignment from dealt cards, starting at the lowest card.
    #[must_use]
    pub fn from_cards(cards: Vec<u8>) -> Self {
        let current = lowest_card_index(&cards);
        Self { cards, current }
    }

    /// Creates an assignment with an explicit current position.
    ///
    /// A position that does not point at a card is dropped.
    #[must_use]
    pub fn with_current(cards: Vec<u8>, current: Option<usize>) -> Self {
        let current = current.filter(|&index| index < cards.len());
        Self { cards, current }
    }

    /// The dealt cards in roster order.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Position whose turn it is.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Card held by the current position.
    #[must_use]
    pub fn current_card(&self) -> Option<u8> {
        self.current.and_then(|index| self.cards.get(index).copied())
    }

    /// Returns `true` if any cards are dealt.
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        !self.cards.is_empty()
    }
}
