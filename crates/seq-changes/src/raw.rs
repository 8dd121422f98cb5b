//! Raw positional edit scripts, as produced by an LCS diff plus move inference.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::change::Change;
use crate::classify::classify;
use crate::element::ChangeElement;
use crate::error::{Bucket, DifferenceError};

/// A single insert or remove from a positional diff.
///
/// `Remove::offset` indexes the old sequence and `Insert::offset` the new one.
/// The `paired_*` fields are set by move inference: a paired removal carries
/// the offset of its insertion and the insertion carries the offset back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum RawOp<T> {
    Remove {
        offset: usize,
        element: T,
        paired_insert: Option<usize>,
    },
    Insert {
        offset: usize,
        element: T,
        paired_remove: Option<usize>,
    },
}

impl<T> RawOp<T> {
    pub fn remove(offset: usize, element: T) -> Self {
        RawOp::Remove {
            offset,
            element,
            paired_insert: None,
        }
    }

    pub fn insert(offset: usize, element: T) -> Self {
        RawOp::Insert {
            offset,
            element,
            paired_remove: None,
        }
    }

    /// Removal at `from` that upstream matched to the insertion at `to`.
    pub fn moved_from(from: usize, to: usize, element: T) -> Self {
        RawOp::Remove {
            offset: from,
            element,
            paired_insert: Some(to),
        }
    }

    /// Insertion at `to` that upstream matched to the removal at `from`.
    pub fn moved_to(to: usize, from: usize, element: T) -> Self {
        RawOp::Insert {
            offset: to,
            element,
            paired_remove: Some(from),
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            RawOp::Remove { offset, .. } | RawOp::Insert { offset, .. } => *offset,
        }
    }

    pub fn element(&self) -> &T {
        match self {
            RawOp::Remove { element, .. } | RawOp::Insert { element, .. } => element,
        }
    }

    /// Offset of the counterpart op, if this op is one side of a move.
    pub fn paired(&self) -> Option<usize> {
        match self {
            RawOp::Remove { paired_insert, .. } => *paired_insert,
            RawOp::Insert { paired_remove, .. } => *paired_remove,
        }
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, RawOp::Remove { .. })
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, RawOp::Insert { .. })
    }
}

/// A raw edit script split into its removals and insertions.
///
/// Removals are in ascending old-sequence offset order, insertions in
/// ascending new-sequence offset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference<T> {
    removals: Vec<RawOp<T>>,
    insertions: Vec<RawOp<T>>,
}

impl<T> Difference<T> {
    /// Wrap ops from a trusted upstream diff without checking them.
    pub fn new(removals: Vec<RawOp<T>>, insertions: Vec<RawOp<T>>) -> Self {
        Self {
            removals,
            insertions,
        }
    }

    pub fn removals(&self) -> &[RawOp<T>] {
        &self.removals
    }

    pub fn insertions(&self) -> &[RawOp<T>] {
        &self.insertions
    }

    pub fn len(&self) -> usize {
        self.removals.len() + self.insertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }

    pub fn into_parts(self) -> (Vec<RawOp<T>>, Vec<RawOp<T>>) {
        (self.removals, self.insertions)
    }
}

impl<T: ChangeElement> Difference<T> {
    /// Wrap ops after checking bucket kinds, offset order, identity
    /// uniqueness and move pairings.
    pub fn validated(
        removals: Vec<RawOp<T>>,
        insertions: Vec<RawOp<T>>,
    ) -> Result<Self, DifferenceError> {
        check_bucket(&removals, Bucket::Removals)?;
        check_bucket(&insertions, Bucket::Insertions)?;
        check_identities(&removals, Bucket::Removals)?;
        check_identities(&insertions, Bucket::Insertions)?;

        let removal_pairs: HashMap<usize, Option<usize>> =
            removals.iter().map(|op| (op.offset(), op.paired())).collect();
        let insertion_pairs: HashMap<usize, Option<usize>> =
            insertions.iter().map(|op| (op.offset(), op.paired())).collect();
        check_pairings(&removals, &insertion_pairs, Bucket::Removals)?;
        check_pairings(&insertions, &removal_pairs, Bucket::Insertions)?;

        Ok(Self::new(removals, insertions))
    }

    /// Classify this script into inserts, removes, moves and updates.
    ///
    /// See [`classify`] for ordering and pairing rules.
    pub fn into_changes(self) -> Vec<Change<T>> {
        classify(self.removals, self.insertions)
    }
}

fn check_bucket<T>(ops: &[RawOp<T>], bucket: Bucket) -> Result<(), DifferenceError> {
    let mut prev: Option<usize> = None;
    for op in ops {
        let offset = op.offset();
        let right_kind = match bucket {
            Bucket::Removals => op.is_remove(),
            Bucket::Insertions => op.is_insert(),
        };
        if !right_kind {
            return Err(DifferenceError::MisplacedOp { bucket, offset });
        }
        if prev.is_some_and(|p| p >= offset) {
            return Err(DifferenceError::UnorderedOffsets { bucket, offset });
        }
        prev = Some(offset);
    }
    Ok(())
}

fn check_identities<T: ChangeElement>(
    ops: &[RawOp<T>],
    bucket: Bucket,
) -> Result<(), DifferenceError> {
    let mut seen: HashSet<T::Id> = HashSet::with_capacity(ops.len());
    for op in ops {
        if !seen.insert(op.element().id()) {
            return Err(DifferenceError::DuplicateIdentity {
                bucket,
                offset: op.offset(),
            });
        }
    }
    Ok(())
}

fn check_pairings<T>(
    ops: &[RawOp<T>],
    counterparts: &HashMap<usize, Option<usize>>,
    bucket: Bucket,
) -> Result<(), DifferenceError> {
    for op in ops {
        let Some(paired) = op.paired() else { continue };
        let offset = op.offset();
        if counterparts.get(&paired) != Some(&Some(offset)) {
            return Err(DifferenceError::UnmatchedPairing {
                bucket,
                offset,
                paired,
            });
        }
    }
    Ok(())
}
