use alloc::string::String;

use crate::error::RosterError;
use crate::roster::Side;

use super::Table;

// Roster edits never touch the dealt cards while anyone is left. A deal made
// before an edit keeps pointing at the old positions until the next deal; an
// edit that empties the roster drops the deal.
impl Table {
    fn reset_if_empty(&mut self) {
        if self.roster.is_empty() && self.assignment.is_dealt() {
            self.reset();
        }
    }

    /// Adds a name to the end of one side.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] if the name is blank.
    pub fn add_name(&mut self, side: Side, name: &str) -> Result<(), RosterError> {
        self.roster.add(side, name, self.options.trim_names)?;
        tracing::trace!(side = side.as_str(), name, "added name");
        Ok(())
    }

    /// Removes and returns the name at `index` on one side.
    ///
    /// Removing the last name on the table drops the dealt cards.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IndexOutOfRange`] if there is no such entry.
    pub fn remove_name(&mut self, side: Side, index: usize) -> Result<String, RosterError> {
        let name = self.roster.remove(side, index)?;
        tracing::trace!(side = side.as_str(), index, "removed name");
        self.reset_if_empty();
        Ok(name)
    }

    /// Moves the name at `index` one place up on its side.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or already first.
    pub fn move_up(&mut self, side: Side, index: usize) -> Result<(), RosterError> {
        self.roster.move_up(side, index)?;
        tracing::trace!(side = side.as_str(), index, "moved name up");
        Ok(())
    }

    /// Moves the name at `index` one place down on its side.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or already last.
    pub fn move_down(&mut self, side: Side, index: usize) -> Result<(), RosterError> {
        self.roster.move_down(side, index)?;
        tracing::trace!(side = side.as_str(), index, "moved name down");
        Ok(())
    }

    /// Removes every name on one side.
    ///
    /// If the other side is empty too, the dealt cards are dropped.
    pub fn clear_side(&mut self, side: Side) {
        self.roster.clear(side);
        tracing::trace!(side = side.as_str(), "cleared side");
        self.reset_if_empty();
    }
}
