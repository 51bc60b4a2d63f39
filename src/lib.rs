//! An initiative card dealer and turn tracker with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that keeps a roster of friends and
//! foes, deals each of them a shuffled initiative card, tracks whose turn is
//! current as play climbs through the cards in ascending order, and lets the
//! current participant swap their card for a higher one already on the table.
//!
//! # Example
//!
//! ```
//! use initdeal::{Side, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.add_name(Side::Friends, "Aria").unwrap();
//! table.add_name(Side::Foes, "Goblin").unwrap();
//!
//! let current = table.deal();
//! assert!(current.is_some());
//! assert_eq!(table.cards().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod roster;
pub mod table;

// Re-export main types
pub use card::{DEFAULT_POOL_SIZE, card_pool};
pub use error::{RosterError, SwapError};
pub use options::TableOptions;
pub use roster::{Roster, Side};
pub use table::{
    Action, Assignment, Column, Table, TableView, advance, deal_cards, parse_card_number,
    swap_cards,
};
