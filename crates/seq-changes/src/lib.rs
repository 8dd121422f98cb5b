//! seq-changes - classify positional edit scripts into richer changes.
//!
//! A longest-common-subsequence diff describes how one ordered sequence turns
//! into another using only removals (at old offsets) and insertions (at new
//! offsets). A move-inference pass may additionally pair a removal with an
//! insertion of an equal element. This crate turns such a script into a list
//! of [`Change`]s that also tells moves and in-place updates apart from plain
//! inserts and removes, using each element's [`Identifiable::id`].
//!
//! Computing the diff and inferring moves are left to the caller.
//!
//! # Example
//!
//! ```
//! use seq_changes::{apply, Change, Difference, Identifiable, RawOp};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Todo {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! impl Identifiable for Todo {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let milk = Todo { id: 1, title: "milk" };
//! let eggs = Todo { id: 2, title: "eggs" };
//! let eggs_x12 = Todo { id: 2, title: "eggs x12" };
//!
//! // [milk, eggs] -> [eggs x12, milk]
//! let old = vec![milk.clone(), eggs.clone()];
//! let diff = Difference::validated(
//!     vec![RawOp::remove(1, eggs.clone())],
//!     vec![RawOp::insert(0, eggs_x12.clone())],
//! )
//! .unwrap();
//!
//! let changes = diff.into_changes();
//! assert_eq!(
//!     changes,
//!     vec![
//!         Change::Update { offset: 1, old_element: eggs, new_element: eggs_x12.clone() },
//!         Change::Move { from: 1, to: 0, element: eggs_x12.clone() },
//!     ]
//! );
//! assert_eq!(apply(&old, &changes).unwrap(), vec![eggs_x12, milk]);
//! ```

pub mod apply;
pub mod change;
pub mod classify;
pub mod element;
pub mod error;
pub mod raw;

pub use apply::apply;
pub use change::Change;
pub use classify::classify;
pub use element::{ChangeElement, Identifiable};
pub use error::{ApplyError, Bucket, DifferenceError};
pub use raw::{Difference, RawOp};
