//! Order key assignment for items kept in ordered groups.
//!
//! Items in a group (a board column) carry a numeric order key. Placing an
//! item between two neighbours only computes one new key; the rest of the
//! group keeps its keys. When no key fits between the neighbours any more the
//! assigner reports [`RenumberRequired`] and the caller compacts the group with
//! [`renumber`] before retrying.
//!
//! Everything in this module is pure and synchronous. Serialising concurrent
//! reorders of one group is the caller's job.

mod assign;
mod error;
mod item;
mod key;
mod renumber;

pub use assign::{assign, DEFAULT_GAP};
pub use error::{Exhaustion, KeySpaceExhausted, RenumberRequired};
pub use item::{assign_in, compare, move_to_group, sort_group, Orderable, Placement};
pub use key::OrderKey;
pub use renumber::{is_strictly_increasing, renumber, renumber_items};
