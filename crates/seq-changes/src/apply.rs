//! Replay of a classified change list against the old sequence.

use std::collections::HashSet;

use crate::change::Change;
use crate::element::ChangeElement;
use crate::error::ApplyError;

struct Removal<'a, T> {
    offset: usize,
    element: &'a T,
    /// Moves carry the value found at the destination, which may be an
    /// updated version of the one being removed.
    by_identity: bool,
}

/// Rebuild the new sequence from `old` and a change list produced by
/// [`classify`](crate::classify).
///
/// Each change is mapped back to the raw removal and insertion it stands for.
/// An `Update` whose offset is also the source of a `Move` is the content half
/// of an update-and-move pair and only contributes a consistency check; any
/// other `Update` replaces the element at its offset. All removals are then
/// applied against old offsets, highest first, followed by all insertions
/// against new offsets, lowest first.
///
/// # Errors
///
/// Fails when an offset is out of bounds, when the element found at a removed
/// offset is not the one the change records, or when two changes remove from
/// or insert at the same offset.
pub fn apply<T: ChangeElement>(old: &[T], changes: &[Change<T>]) -> Result<Vec<T>, ApplyError> {
    let move_sources: HashSet<usize> = changes
        .iter()
        .filter_map(|change| match change {
            Change::Move { from, .. } => Some(*from),
            _ => None,
        })
        .collect();

    let mut removals: Vec<Removal<'_, T>> = Vec::new();
    let mut insertions: Vec<(usize, &T)> = Vec::new();
    for change in changes {
        match change {
            Change::Insert { offset, element } => insertions.push((*offset, element)),
            Change::Remove { offset, element } => removals.push(Removal {
                offset: *offset,
                element,
                by_identity: false,
            }),
            Change::Move { from, to, element } => {
                removals.push(Removal {
                    offset: *from,
                    element,
                    by_identity: true,
                });
                insertions.push((*to, element));
            }
            Change::Update {
                offset,
                old_element,
                ..
            } if move_sources.contains(offset) => {
                check_element(old, *offset, old_element, false)?;
            }
            Change::Update {
                offset,
                old_element,
                new_element,
            } => {
                removals.push(Removal {
                    offset: *offset,
                    element: old_element,
                    by_identity: false,
                });
                insertions.push((*offset, new_element));
            }
        }
    }

    removals.sort_by(|a, b| b.offset.cmp(&a.offset));
    insertions.sort_by_key(|(offset, _)| *offset);

    let mut seq = old.to_vec();
    let mut last: Option<usize> = None;
    for removal in &removals {
        if last == Some(removal.offset) {
            return Err(ApplyError::DuplicateOffset {
                offset: removal.offset,
            });
        }
        last = Some(removal.offset);
        check_element(old, removal.offset, removal.element, removal.by_identity)?;
        seq.remove(removal.offset);
    }

    let mut last: Option<usize> = None;
    for (offset, element) in insertions {
        if last == Some(offset) {
            return Err(ApplyError::DuplicateOffset { offset });
        }
        last = Some(offset);
        if offset > seq.len() {
            return Err(ApplyError::OffsetOutOfBounds {
                offset,
                len: seq.len(),
            });
        }
        seq.insert(offset, element.clone());
    }

    tracing::debug!(
        old_len = old.len(),
        new_len = seq.len(),
        changes = changes.len(),
        "applied change list"
    );
    Ok(seq)
}

fn check_element<T: ChangeElement>(
    old: &[T],
    offset: usize,
    expected: &T,
    by_identity: bool,
) -> Result<(), ApplyError> {
    let found = old.get(offset).ok_or(ApplyError::OffsetOutOfBounds {
        offset,
        len: old.len(),
    })?;
    let matches = if by_identity {
        found.id() == expected.id()
    } else {
        found == expected
    };
    if matches {
        Ok(())
    } else {
        Err(ApplyError::ElementMismatch { offset })
    }
}
