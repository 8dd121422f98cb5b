//! Reclassification of a raw insert/remove script into richer changes.

use indexmap::IndexMap;

use crate::change::Change;
use crate::element::ChangeElement;
use crate::raw::RawOp;

/// A removal not yet matched to an insertion by identity.
struct Pending<T> {
    offset: usize,
    element: T,
}

/// Turn the removals and insertions of a raw diff into a change list.
///
/// `removals` must hold only [`RawOp::Remove`] in ascending old offset order
/// and `insertions` only [`RawOp::Insert`] in ascending new offset order.
/// Move pairings are taken as given; paired ops are never compared.
///
/// The result starts with the removals that matched no insertion, highest
/// offset first, so they can be applied one by one without shifting the
/// remaining offsets. Then come the moves, updates and inserts in the order
/// they were found. An item whose identity was both removed and inserted at
/// different offsets yields an `Update` at its old offset immediately followed
/// by a `Move` carrying the new value.
///
/// # Panics
///
/// Panics if an insert is found among `removals`, a remove among
/// `insertions`, or two unpaired removals share an identity.
///
/// # Examples
///
/// ```
/// use seq_changes::{classify, Change, Identifiable, RawOp};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Item(char);
///
/// impl Identifiable for Item {
///     type Id = char;
///
///     fn id(&self) -> char {
///         self.0
///     }
/// }
///
/// // [a, b, c] -> [b, c, a], with a's removal and insertion paired upstream.
/// let removals = vec![RawOp::moved_from(0, 2, Item('a'))];
/// let insertions = vec![RawOp::moved_to(2, 0, Item('a'))];
/// assert_eq!(
///     classify(removals, insertions),
///     vec![Change::Move { from: 0, to: 2, element: Item('a') }],
/// );
/// ```
pub fn classify<T: ChangeElement>(
    removals: Vec<RawOp<T>>,
    insertions: Vec<RawOp<T>>,
) -> Vec<Change<T>> {
    let removal_count = removals.len();
    let insertion_count = insertions.len();

    let mut changes: Vec<Change<T>> = Vec::with_capacity(removal_count + insertion_count);
    let mut pending: IndexMap<T::Id, Pending<T>> = IndexMap::new();

    // Highest old offset first.
    for op in removals.into_iter().rev() {
        let (offset, element, paired_insert) = match op {
            RawOp::Remove {
                offset,
                element,
                paired_insert,
            } => (offset, element, paired_insert),
            RawOp::Insert { offset, .. } => {
                panic!("insert op at new offset {offset} found among removals")
            }
        };
        match paired_insert {
            Some(to) => {
                tracing::trace!(from = offset, to, "paired move");
                changes.push(Change::Move {
                    from: offset,
                    to,
                    element,
                });
            }
            None => {
                if pending.insert(element.id(), Pending { offset, element }).is_some() {
                    panic!("identity removed at old offset {offset} is already pending removal");
                }
            }
        }
    }

    for op in insertions {
        let (offset, element, paired_remove) = match op {
            RawOp::Insert {
                offset,
                element,
                paired_remove,
            } => (offset, element, paired_remove),
            RawOp::Remove { offset, .. } => {
                panic!("remove op at old offset {offset} found among insertions")
            }
        };
        if paired_remove.is_some() {
            continue;
        }
        match pending.shift_remove(&element.id()) {
            None => changes.push(Change::Insert { offset, element }),
            Some(prev) if prev.offset != offset => {
                tracing::trace!(from = prev.offset, to = offset, "update and move");
                changes.push(Change::Update {
                    offset: prev.offset,
                    old_element: prev.element,
                    new_element: element.clone(),
                });
                changes.push(Change::Move {
                    from: prev.offset,
                    to: offset,
                    element,
                });
            }
            Some(prev) => {
                tracing::trace!(offset, "update in place");
                changes.push(Change::Update {
                    offset,
                    old_element: prev.element,
                    new_element: element,
                });
            }
        }
    }

    let mut result: Vec<Change<T>> = pending
        .into_values()
        .map(|Pending { offset, element }| Change::Remove { offset, element })
        .collect();
    result.append(&mut changes);

    tracing::debug!(
        removals = removal_count,
        insertions = insertion_count,
        changes = result.len(),
        "classified raw diff"
    );
    result
}
