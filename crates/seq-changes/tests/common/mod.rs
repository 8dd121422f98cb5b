#![allow(dead_code)]

pub mod lcs;

use seq_changes::{Change, Difference, Identifiable};

/// Test element: `id` is the identity, `rev` the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: char,
    pub rev: u8,
}

impl Identifiable for Item {
    type Id = char;

    fn id(&self) -> char {
        self.id
    }
}

pub fn item(id: char) -> Item {
    Item { id, rev: 0 }
}

pub fn edited(id: char) -> Item {
    Item { id, rev: 1 }
}

pub fn items(ids: &str) -> Vec<Item> {
    ids.chars().map(item).collect()
}

/// Diff `old` against `new`, pair moves, and classify the result.
pub fn changes_between(old: &[Item], new: &[Item]) -> Vec<Change<Item>> {
    raw_difference(old, new).into_changes()
}

pub fn raw_difference(old: &[Item], new: &[Item]) -> Difference<Item> {
    let (removals, insertions) = lcs::difference(old, new);
    let (removals, insertions) = lcs::inferring_moves(removals, insertions);
    Difference::new(removals, insertions)
}
