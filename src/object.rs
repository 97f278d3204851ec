//! Shallow merge helpers over string-keyed records.
//!
//! A [`Record`] is an insertion-ordered map from string keys to values, so
//! "every property, in order" has a well-defined meaning and the traversal
//! functions in [`crate::fold`] visit entries deterministically.

use indexmap::IndexMap;

/// An ordered mapping from string keys to values.
///
/// Backed by [`IndexMap`], which iterates in insertion order.
pub type Record<V> = IndexMap<String, V>;

/// Copies every entry of every source onto `target`, left to right.
///
/// Later sources overwrite earlier ones and the original `target`. Returns
/// `target` for chaining. Overwriting an existing key keeps its original
/// position in the record; new keys append in source order.
///
/// # Examples
///
/// ```rust
/// use underkit::{extend, Record};
///
/// let mut base = Record::from([("a".to_string(), 1)]);
/// extend(&mut base, &[
///     Record::from([("b".to_string(), 2)]),
///     Record::from([("a".to_string(), 3)]),
/// ]);
/// assert_eq!(base.get("a"), Some(&3));
/// assert_eq!(base.get("b"), Some(&2));
/// ```
pub fn extend<'a, V: Clone>(target: &'a mut Record<V>, sources: &[Record<V>]) -> &'a mut Record<V> {
   for source in sources {
      for (key, value) in source {
         target.insert(key.clone(), value.clone());
      }
   }
   target
}

/// Fills in missing entries on `target` from the sources, left to right.
///
/// Like [`extend`], but a key already present on `target` is never
/// overwritten; among the sources, the first to supply a missing key wins.
/// Returns `target` for chaining.
///
/// # Examples
///
/// ```rust
/// use underkit::{defaults, Record};
///
/// let mut opts = Record::from([("depth".to_string(), 1)]);
/// defaults(&mut opts, &[
///     Record::from([("depth".to_string(), 9), ("width".to_string(), 4)]),
/// ]);
/// assert_eq!(opts.get("depth"), Some(&1));
/// assert_eq!(opts.get("width"), Some(&4));
/// ```
pub fn defaults<'a, V: Clone>(
   target: &'a mut Record<V>,
   sources: &[Record<V>],
) -> &'a mut Record<V> {
   for source in sources {
      for (key, value) in source {
         if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
         }
      }
   }
   target
}
