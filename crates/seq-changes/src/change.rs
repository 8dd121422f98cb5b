//! Classified changes: inserts, removes, moves and in-place updates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of a classified change list.
///
/// Offsets are copied from the raw edit script: `Remove`, `Update` and
/// `Move::from` index the old sequence, `Insert` and `Move::to` the new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Change<T> {
    Insert {
        offset: usize,
        element: T,
    },
    Remove {
        offset: usize,
        element: T,
    },
    /// `element` is the value found at `to`, which is the updated value when
    /// the move follows an [`Change::Update`] of the same item.
    Move {
        from: usize,
        to: usize,
        element: T,
    },
    Update {
        offset: usize,
        old_element: T,
        new_element: T,
    },
}

impl<T> Change<T> {
    pub fn op_name(&self) -> &'static str {
        match self {
            Change::Insert { .. } => "insert",
            Change::Remove { .. } => "remove",
            Change::Move { .. } => "move",
            Change::Update { .. } => "update",
        }
    }

    /// The element this change concerns, in its newest known form.
    pub fn element(&self) -> &T {
        match self {
            Change::Insert { element, .. }
            | Change::Remove { element, .. }
            | Change::Move { element, .. } => element,
            Change::Update { new_element, .. } => new_element,
        }
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, Change::Remove { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Change::Move { .. })
    }
}
