//! Element bounds shared by raw edit scripts and classified changes.

use std::hash::Hash;

/// A value with a stable identity that is distinct from its content.
///
/// Two values with the same `id` are the same logical item, even when they
/// compare unequal because the content changed between sequences.
///
/// # Examples
///
/// ```
/// use seq_changes::Identifiable;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Row {
///     key: u32,
///     text: String,
/// }
///
/// impl Identifiable for Row {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.key
///     }
/// }
///
/// let before = Row { key: 7, text: "draft".into() };
/// let after = Row { key: 7, text: "final".into() };
/// assert_ne!(before, after);
/// assert_eq!(before.id(), after.id());
/// ```
pub trait Identifiable {
    type Id: Eq + Hash + Clone;

    fn id(&self) -> Self::Id;
}

/// Everything the classifier needs from a sequence element.
pub trait ChangeElement: Identifiable + Eq + Hash + Clone {}

impl<T> ChangeElement for T where T: Identifiable + Eq + Hash + Clone {}
