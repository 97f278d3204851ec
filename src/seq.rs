//! Sequence operations over borrowed slices.
//!
//! Every function here takes its input by shared reference and returns a
//! freshly allocated `Vec`, so caller data is never mutated or consumed.
//! Element order is preserved wherever the operation does not explicitly
//! reorder (sorting, shuffling), and equality-based operations (`index_of`,
//! `uniq`, `intersection`, `difference`) compare with `PartialEq`.
//!
//! Operations that would be variadic in a dynamically typed library
//! (`zip`, `intersection`) take an explicit slice of input slices instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::object::Record;

/// Returns the first element of `seq`, or `None` when empty.
///
/// # Examples
///
/// ```rust
/// use underkit::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
#[must_use]
pub fn first<T>(seq: &[T]) -> Option<&T> {
   seq.first()
}

/// Returns the last element of `seq`, or `None` when empty.
#[inline]
#[must_use]
pub fn last<T>(seq: &[T]) -> Option<&T> {
   seq.last()
}

/// Returns the first `n` elements of `seq` in order.
///
/// `n` is clamped to the sequence length, so asking for more elements than
/// exist returns a copy of the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underkit::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 9), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn first_n<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
   seq[..n.min(seq.len())].to_vec()
}

/// Returns the last `n` elements of `seq` in order.
///
/// `n` is clamped to the sequence length, matching [`first_n`].
#[must_use]
pub fn last_n<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
   seq[seq.len() - n.min(seq.len())..].to_vec()
}

/// Returns the position of the first element equal to `target`, or `None`
/// when no element matches.
///
/// # Examples
///
/// ```rust
/// use underkit::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &99), None);
/// ```
#[inline]
#[must_use]
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
   seq.iter().position(|item| item == target)
}

/// Returns the elements of `seq` for which `predicate` is true, in order.
#[must_use]
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
   T: Clone,
   P: FnMut(&T) -> bool,
{
   seq.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Returns the elements of `seq` for which `predicate` is false, in order.
///
/// The complement of [`filter`]: every element lands in exactly one of the
/// two results for a given predicate.
#[must_use]
pub fn reject<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
   T: Clone,
   P: FnMut(&T) -> bool,
{
   filter(seq, |item| !predicate(item))
}

/// Returns `seq` with duplicates removed, keeping the first occurrence of
/// each value and preserving order.
///
/// Comparison uses `PartialEq` only, so element types need neither `Ord`
/// nor `Hash`. The operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use underkit::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn uniq<T: Clone + PartialEq>(seq: &[T]) -> Vec<T> {
   let mut out: Vec<T> = Vec::new();
   for item in seq {
      if !out.contains(item) {
         out.push(item.clone());
      }
   }
   out
}

/// Applies `f` to every element in order, returning the results.
///
/// The output length always equals the input length.
#[must_use]
pub fn map<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
   F: FnMut(&T) -> U,
{
   seq.iter().map(f).collect()
}

/// Looks up `property` on every record, returning one entry per record.
///
/// A record without the property yields `None` at its position rather than
/// aborting the traversal.
///
/// # Examples
///
/// ```rust
/// use underkit::{pluck, Record};
///
/// let people = [
///     Record::from([("age".to_string(), 30)]),
///     Record::from([("name".to_string(), 0)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(&30), None]);
/// ```
#[must_use]
pub fn pluck<'a, V>(records: &'a [Record<V>], property: &str) -> Vec<Option<&'a V>> {
   records.iter().map(|record| record.get(property)).collect()
}

/// Method-by-name dispatch used by [`invoke`].
///
/// Implementors expose some of their methods under string names so callers
/// can select one at runtime. `call_named` returns `None` for an unknown
/// name, which [`invoke`] passes through per element.
pub trait NamedMethods {
   /// Argument bundle every named method receives.
   type Args;
   /// Result type every named method produces.
   type Output;

   /// Calls the method named `name` with `args`, or returns `None` when no
   /// such method exists.
   fn call_named(&self, name: &str, args: &Self::Args) -> Option<Self::Output>;
}

/// What [`invoke`] should call on each element: a method selected by name,
/// or a free function receiving the element.
pub enum Callee<'a, T: NamedMethods> {
   /// Dispatch through [`NamedMethods::call_named`] with this name.
   Method(&'a str),
   /// Call this function with the element as receiver.
   Func(&'a dyn Fn(&T, &T::Args) -> T::Output),
}

/// Calls `callee` on every element with `args`, returning one result per
/// element in order.
///
/// A [`Callee::Method`] name absent on an element yields `None` at that
/// position; the rest of the traversal proceeds. A [`Callee::Func`] always
/// produces a value.
///
/// # Examples
///
/// ```rust
/// use underkit::{invoke, Callee, NamedMethods};
///
/// struct Counter(i64);
///
/// impl NamedMethods for Counter {
///     type Args = i64;
///     type Output = i64;
///
///     fn call_named(&self, name: &str, args: &i64) -> Option<i64> {
///         match name {
///             "add" => Some(self.0 + args),
///             "mul" => Some(self.0 * args),
///             _ => None,
///         }
///     }
/// }
///
/// let counters = [Counter(1), Counter(2)];
/// assert_eq!(invoke(&counters, Callee::Method("add"), &10), vec![Some(11), Some(12)]);
/// assert_eq!(invoke(&counters, Callee::Method("nope"), &10), vec![None, None]);
/// ```
#[must_use]
pub fn invoke<T: NamedMethods>(
   seq: &[T],
   callee: Callee<'_, T>,
   args: &T::Args,
) -> Vec<Option<T::Output>> {
   seq.iter()
      .map(|item| match &callee {
         Callee::Method(name) => item.call_named(name, args),
         Callee::Func(f) => Some(f(item, args)),
      })
      .collect()
}

/// Returns the elements of `seq` in uniformly random order.
///
/// The input is copied, never mutated. Uses the thread-local generator; see
/// [`shuffle_with`] to supply a seeded one.
#[must_use]
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
   shuffle_with(seq, &mut rand::thread_rng())
}

/// Returns the elements of `seq` in uniformly random order drawn from `rng`.
///
/// Fisher–Yates via [`SliceRandom::shuffle`], so every permutation is
/// equally likely. Deterministic for a seeded `rng`, which makes this the
/// testable entry point.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use underkit::shuffle_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle_with(&[1, 2, 3, 4], &mut rng);
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]); // same elements, some order
/// ```
#[must_use]
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
   T: Clone,
   R: Rng + ?Sized,
{
   let mut out = seq.to_vec();
   out.shuffle(rng);
   out
}

/// Returns `seq` sorted ascending by the key `criterion` derives per element.
///
/// The sort is stable: elements with equal keys keep their relative order.
///
/// # Examples
///
/// ```rust
/// use underkit::sort_by;
///
/// let words = ["hello", "hi", "hey"];
/// assert_eq!(sort_by(&words, |w| w.len()), vec!["hi", "hey", "hello"]);
/// ```
#[must_use]
pub fn sort_by<T, K, F>(seq: &[T], mut criterion: F) -> Vec<T>
where
   T: Clone,
   K: Ord,
   F: FnMut(&T) -> K,
{
   let mut out = seq.to_vec();
   out.sort_by_key(|item| criterion(item));
   out
}

/// Returns `records` sorted ascending by the value under `property`.
///
/// Records missing the property sort before all records that have it. The
/// sort is stable.
#[must_use]
pub fn sort_by_prop<V: Ord + Clone>(records: &[Record<V>], property: &str) -> Vec<Record<V>> {
   let mut out = records.to_vec();
   out.sort_by(|a, b| a.get(property).cmp(&b.get(property)));
   out
}

/// Zips any number of sequences positionally.
///
/// Row `i` of the result holds element `i` of every input, in input order.
/// The result is as long as the longest input; shorter inputs contribute
/// `None` past their end rather than being silently dropped.
///
/// # Examples
///
/// ```rust
/// use underkit::zip;
///
/// let rows = zip(&[&["a", "b", "c"][..], &["x", "y"][..]]);
/// assert_eq!(rows, vec![
///     vec![Some("a"), Some("x")],
///     vec![Some("b"), Some("y")],
///     vec![Some("c"), None],
/// ]);
/// ```
#[must_use]
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
   let rows = seqs.iter().map(|seq| seq.len()).max().unwrap_or(0);
   (0..rows)
      .map(|i| seqs.iter().map(|seq| seq.get(i).cloned()).collect())
      .collect()
}

/// An arbitrarily nested sequence, the input shape for [`flatten`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
   /// A single value.
   Item(T),
   /// A sequence of further nestings.
   List(Vec<Nested<T>>),
}

/// Flattens arbitrarily nested sequences into one flat sequence.
///
/// Elements appear in depth-first order, which matches the left-to-right
/// reading order of the nested input. The input is not mutated.
///
/// # Examples
///
/// ```rust
/// use underkit::flatten;
/// use underkit::Nested::{Item, List};
///
/// let nested = [Item(1), List(vec![Item(2), List(vec![Item(3)])]), Item(4)];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
   let mut out = Vec::new();
   flatten_into(nested, &mut out);
   out
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], out: &mut Vec<T>) {
   for node in nested {
      match node {
         Nested::Item(value) => out.push(value.clone()),
         Nested::List(children) => flatten_into(children, out),
      }
   }
}

/// Returns the values present in every input sequence.
///
/// Order follows the first input; duplicates within the first input appear
/// once in the result.
///
/// # Examples
///
/// ```rust
/// use underkit::intersection;
///
/// let common = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..], &[3, 2][..]]);
/// assert_eq!(common, vec![2, 3]);
/// ```
#[must_use]
pub fn intersection<T: Clone + PartialEq>(seqs: &[&[T]]) -> Vec<T> {
   let Some((head, rest)) = seqs.split_first() else {
      return Vec::new();
   };
   let mut out: Vec<T> = Vec::new();
   for item in *head {
      if out.contains(item) {
         continue;
      }
      if rest.iter().all(|seq| seq.contains(item)) {
         out.push(item.clone());
      }
   }
   out
}

/// Returns the values of `first` absent from every sequence in `others`,
/// preserving `first`'s order.
///
/// # Examples
///
/// ```rust
/// use underkit::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2][..], &[4, 5][..]]), vec![1, 3]);
/// ```
#[must_use]
pub fn difference<T: Clone + PartialEq>(first: &[T], others: &[&[T]]) -> Vec<T> {
   first
      .iter()
      .filter(|item| others.iter().all(|seq| !seq.contains(item)))
      .cloned()
      .collect()
}
