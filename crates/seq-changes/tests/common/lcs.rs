//! Stand-in for the upstream collaborators: a plain LCS diff and a
//! move-inference pass that pairs removals and insertions of equal elements
//! when each element occurs once on both sides.

use std::collections::HashMap;
use std::hash::Hash;

use seq_changes::RawOp;

pub type RawScript<T> = (Vec<RawOp<T>>, Vec<RawOp<T>>);

/// Removals (ascending old offsets) and insertions (ascending new offsets)
/// turning `old` into `new`.
pub fn difference<T: PartialEq + Clone>(old: &[T], new: &[T]) -> RawScript<T> {
    let (n, m) = (old.len(), new.len());

    // lcs[i][j] = length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut removals = Vec::new();
    let mut insertions = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            removals.push(RawOp::remove(i, old[i].clone()));
            i += 1;
        } else {
            insertions.push(RawOp::insert(j, new[j].clone()));
            j += 1;
        }
    }
    removals.extend((i..n).map(|i| RawOp::remove(i, old[i].clone())));
    insertions.extend((j..m).map(|j| RawOp::insert(j, new[j].clone())));
    (removals, insertions)
}

/// Pair each removal with the insertion of an equal element, provided the
/// element is removed once and inserted once.
pub fn inferring_moves<T: Eq + Hash + Clone>(
    removals: Vec<RawOp<T>>,
    insertions: Vec<RawOp<T>>,
) -> RawScript<T> {
    let removed = unique_offsets(&removals);
    let inserted = unique_offsets(&insertions);

    let removals = removals
        .into_iter()
        .map(|op| match inserted.get(op.element()) {
            Some(&to) if removed.contains_key(op.element()) => {
                RawOp::moved_from(op.offset(), to, op.element().clone())
            }
            _ => op,
        })
        .collect();
    let insertions = insertions
        .into_iter()
        .map(|op| match removed.get(op.element()) {
            Some(&from) if inserted.contains_key(op.element()) => {
                RawOp::moved_to(op.offset(), from, op.element().clone())
            }
            _ => op,
        })
        .collect();
    (removals, insertions)
}

fn unique_offsets<T: Eq + Hash + Clone>(ops: &[RawOp<T>]) -> HashMap<T, usize> {
    let mut seen: HashMap<T, Option<usize>> = HashMap::new();
    for op in ops {
        seen.entry(op.element().clone())
            .and_modify(|offset| *offset = None)
            .or_insert(Some(op.offset()));
    }
    seen.into_iter()
        .filter_map(|(element, offset)| offset.map(|offset| (element, offset)))
        .collect()
}
