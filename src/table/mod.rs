//! Initiative table engine and session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::SwapError;
use crate::options::TableOptions;
use crate::roster::Roster;

mod deal;
mod edit;
pub mod state;
mod swap;
mod turn;
pub mod view;

pub use deal::deal_cards;
pub use state::{Action, Assignment};
pub use swap::{parse_card_number, swap_cards};
pub use turn::advance;
pub use view::{Column, TableView};

/// An initiative table: the roster, the dealt cards, and whose turn it is.
///
/// The table owns its random source, so a given seed and sequence of actions
/// always produces the same cards. Use [`TableOptions`] to configure the card
/// pool.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Friends and foes.
    roster: Roster,
    /// Cards from the last deal.
    assignment: Assignment,
    /// Error from the last swap attempt.
    swap_error: Option<SwapError>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates an empty table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use initdeal::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert!(table.roster().is_empty());
    /// assert!(table.cards().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an empty table that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            roster: Roster::new(),
            assignment: Assignment::empty(),
            swap_error: None,
            rng,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the cards from the last deal.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Replaces the dealt cards, e.g. to restore a table dealt elsewhere.
    pub fn set_assignment(&mut self, assignment: Assignment) {
        self.assignment = assignment;
    }

    /// Dealt cards in roster order.
    #[must_use]
    pub fn cards(&self) -> &[u8] {
        self.assignment.cards()
    }

    /// Position whose turn it is.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.assignment.current()
    }

    /// Card held by the current position.
    #[must_use]
    pub fn current_card(&self) -> Option<u8> {
        self.assignment.current_card()
    }

    /// Name at the current position, if the roster still reaches it.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.assignment
            .current()
            .and_then(|index| self.roster.name(index))
    }

    /// Drops the dealt cards and any swap error. The roster is kept.
    pub fn reset(&mut self) {
        self.assignment = Assignment::empty();
        self.swap_error = None;
        tracing::debug!("reset table");
    }

    /// Applies one action and returns the resulting table.
    ///
    /// Rejected roster edits leave the table unchanged; a rejected swap is
    /// recorded in [`Table::swap_error`].
    ///
    /// # Example
    ///
    /// ```
    /// use initdeal::{Action, Side, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 1)
    ///     .apply(Action::AddName { side: Side::Friends, name: "Aria".into() })
    ///     .apply(Action::Deal);
    /// assert_eq!(table.current_index(), Some(0));
    /// ```
    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        self.dispatch(action);
        self
    }

    /// Applies one action in place.
    pub fn dispatch(&mut self, action: Action) {
        let edit = match action {
            Action::AddName { side, name } => self.add_name(side, &name),
            Action::RemoveName { side, index } => self.remove_name(side, index).map(|_| ()),
            Action::MoveUp { side, index } => self.move_up(side, index),
            Action::MoveDown { side, index } => self.move_down(side, index),
            Action::Clear(side) => {
                self.clear_side(side);
                Ok(())
            }
            Action::Deal => {
                self.deal();
                Ok(())
            }
            Action::Next => {
                self.next_turn();
                Ok(())
            }
            Action::Swap(input) => {
                // Error is stored on the table.
                let _ = self.swap(&input);
                Ok(())
            }
            Action::Reset => {
                self.reset();
                Ok(())
            }
        };

        if let Err(err) = edit {
            tracing::debug!(error = %err, "roster edit rejected");
        }
    }
}
