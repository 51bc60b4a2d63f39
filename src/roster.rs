//! Friend and foe name lists.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::RosterError;

/// Which list a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The party and its allies.
    Friends,
    /// Everyone the party is fighting.
    Foes,
}

impl Side {
    /// Returns a lowercase label for the side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Friends => "friends",
            Self::Foes => "foes",
        }
    }
}

/// Two ordered name lists. Deal order is all friends followed by all foes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    friends: Vec<String>,
    foes: Vec<String>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            friends: Vec::new(),
            foes: Vec::new(),
        }
    }

    /// Returns the names on one side, in order.
    #[must_use]
    pub fn side(&self, side: Side) -> &[String] {
        match side {
            Side::Friends => &self.friends,
            Side::Foes => &self.foes,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Friends => &mut self.friends,
            Side::Foes => &mut self.foes,
        }
    }

    /// Number of friends.
    #[must_use]
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// Number of foes.
    #[must_use]
    pub fn foe_count(&self) -> usize {
        self.foes.len()
    }

    /// Combined number of names on both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len() + self.foes.len()
    }

    /// Returns `true` if both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all names, friends first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.friends.iter().chain(self.foes.iter()).map(String::as_str)
    }

    /// Returns the name at a combined roster position.
    #[must_use]
    pub fn name(&self, position: usize) -> Option<&str> {
        self.names().nth(position)
    }

    /// Returns the side a combined roster position falls on.
    ///
    /// Positions past the end are `None`.
    #[must_use]
    pub fn side_of(&self, position: usize) -> Option<Side> {
        if position < self.friends.len() {
            Some(Side::Friends)
        } else if position < self.len() {
            Some(Side::Foes)
        } else {
            None
        }
    }

    /// Appends a name to one side.
    ///
    /// When `trim` is set, surrounding whitespace is removed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] if the name is blank.
    pub fn add(&mut self, side: Side, name: &str, trim: bool) -> Result<(), RosterError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }

        let stored = if trim { trimmed } else { name };
        self.side_mut(side).push(stored.to_string());
        Ok(())
    }

    /// Removes the entry at `index` from one side and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IndexOutOfRange`] if there is no such entry.
    pub fn remove(&mut self, side: Side, index: usize) -> Result<String, RosterError> {
        let list = self.side_mut(side);
        if index >= list.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        Ok(list.remove(index))
    }

    /// Moves the entry at `index` one place toward the front of its side.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or already first.
    pub fn move_up(&mut self, side: Side, index: usize) -> Result<(), RosterError> {
        let list = self.side_mut(side);
        if index >= list.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        if index == 0 {
            return Err(RosterError::CannotMove);
        }
        list.swap(index - 1, index);
        Ok(())
    }

    /// Moves the entry at `index` one place toward the back of its side.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or already last.
    pub fn move_down(&mut self, side: Side, index: usize) -> Result<(), RosterError> {
        let list = self.side_mut(side);
        if index >= list.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        if index + 1 == list.len() {
            return Err(RosterError::CannotMove);
        }
        list.swap(index, index + 1);
        Ok(())
    }

    /// Empties one side.
    pub fn clear(&mut self, side: Side) {
        self.side_mut(side).clear();
    }
}
