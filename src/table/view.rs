//! Render model for the initiative table.

use alloc::vec::Vec;

use crate::roster::Side;

use super::Table;

/// One dealt position as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    /// Roster name at this position, if the roster still reaches it.
    pub name: Option<&'a str>,
    /// Dealt card.
    pub card: u8,
    /// Whether this position holds the turn.
    pub is_current: bool,
    /// Side this position falls on in the current roster.
    pub side: Option<Side>,
}

/// Snapshot of the table for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// One column per dealt card.
    pub columns: Vec<Column<'a>>,
    /// Index of the last friend column when both sides are present; the
    /// divider between friends and foes is drawn after it.
    pub divider_after: Option<usize>,
}

impl Table {
    /// Builds the render model: names, cards and the current marker.
    ///
    /// Columns follow the dealt cards. Names are looked up by position in
    /// the roster as it is now, so edits made after a deal show up as shifted
    /// or missing names.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        let current = self.assignment.current();
        let columns = self
            .assignment
            .cards()
            .iter()
            .enumerate()
            .map(|(position, &card)| Column {
                name: self.roster.name(position),
                card,
                is_current: current == Some(position),
                side: self.roster.side_of(position),
            })
            .collect::<Vec<_>>();

        let friends = self.roster.friend_count();
        let divider_after = (friends > 0 && self.roster.foe_count() > 0 && friends <= columns.len())
            .then(|| friends - 1);

        TableView {
            columns,
            divider_after,
        }
    }

    /// Returns `true` if there is anyone to deal to.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.roster.is_empty()
    }

    /// Returns `true` if a turn is set and at least two cards are dealt.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.assignment.current().is_some() && self.assignment.cards().len() >= 2
    }

    /// Returns `true` if a turn is set and a swap target has been typed.
    #[must_use]
    pub fn can_swap(&self, input: &str) -> bool {
        self.assignment.current().is_some() && !input.is_empty()
    }
}
