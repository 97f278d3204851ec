//! Whole-collection traversal.
//!
//! Unlike the slice-only operations in [`crate::seq`], everything here is
//! generic over `IntoIterator`, so the same functions traverse slices,
//! `Vec`s, record value views (`record.values()`), or full record entry
//! views (`&record`, yielding `(key, value)` pairs). Iteration always
//! follows the collection's own order.

use std::borrow::Borrow;

/// Invokes `f` on every item of `collection`, in order, for side effects.
///
/// For a record, iterate the record itself to receive `(key, value)` pairs:
///
/// ```rust
/// use underkit::{each, Record};
///
/// let scores = Record::from([("a".to_string(), 1), ("b".to_string(), 2)]);
/// let mut seen = Vec::new();
/// each(&scores, |(key, value)| seen.push(format!("{key}={value}")));
/// assert_eq!(seen, vec!["a=1", "b=2"]);
/// ```
pub fn each<I, F>(collection: I, f: F)
where
   I: IntoIterator,
   F: FnMut(I::Item),
{
   collection.into_iter().for_each(f);
}

/// Folds `collection` left to right with `f`, starting from `initial`.
///
/// An omitted initial value (`None`) starts the fold from the accumulator
/// type's zero value (`A::default()`), so summing numbers needs no explicit
/// seed. This is a deliberate contract: the default is the zero value, not
/// the collection's first element.
///
/// # Examples
///
/// ```rust
/// use underkit::reduce;
///
/// assert_eq!(reduce([1, 2, 3, 4], |acc: i32, n| acc + n, None), 10);
/// assert_eq!(reduce([1, 2, 3], |acc, n| acc * n, Some(1)), 6);
/// ```
#[must_use]
pub fn reduce<I, A, F>(collection: I, mut f: F, initial: Option<A>) -> A
where
   I: IntoIterator,
   A: Default,
   F: FnMut(A, I::Item) -> A,
{
   let mut acc = initial.unwrap_or_default();
   for item in collection {
      acc = f(acc, item);
   }
   acc
}

/// Returns whether any item of `collection` equals `target`.
///
/// # Examples
///
/// ```rust
/// use underkit::{contains, Record};
///
/// assert!(contains(&[1, 2, 3], &2));
///
/// let rec = Record::from([("k".to_string(), 9)]);
/// assert!(contains(rec.values(), &9));
/// ```
#[must_use]
pub fn contains<I, T>(collection: I, target: &T) -> bool
where
   I: IntoIterator,
   I::Item: Borrow<T>,
   T: PartialEq,
{
   collection.into_iter().any(|item| item.borrow() == target)
}

/// Returns whether `predicate` holds for every item of `collection`.
///
/// Vacuously true on empty input; stops at the first failing item.
#[must_use]
pub fn every<I, P>(collection: I, predicate: P) -> bool
where
   I: IntoIterator,
   P: FnMut(I::Item) -> bool,
{
   collection.into_iter().all(predicate)
}

/// Returns whether `predicate` holds for at least one item of `collection`.
///
/// False on empty input; stops at the first passing item. When there is no
/// meaningful predicate, use [`some_truthy`] to test items directly.
#[must_use]
pub fn some<I, P>(collection: I, predicate: P) -> bool
where
   I: IntoIterator,
   P: FnMut(I::Item) -> bool,
{
   collection.into_iter().any(predicate)
}

/// Returns whether at least one item of `collection` is truthy.
///
/// The predicate-less form of [`some`]: each item is tested with
/// [`Truthy::is_truthy`] instead of a caller-supplied function.
///
/// # Examples
///
/// ```rust
/// use underkit::some_truthy;
///
/// assert!(some_truthy(&[0, 0, 3]));
/// assert!(!some_truthy(&["", ""]));
/// ```
#[must_use]
pub fn some_truthy<I>(collection: I) -> bool
where
   I: IntoIterator,
   I::Item: Truthy,
{
   collection.into_iter().any(|item| item.is_truthy())
}

/// Identity truthiness, the default test for [`some_truthy`].
///
/// Mirrors the conventions of dynamically typed utility belts: zero, NaN,
/// empty strings, and absent options are falsy; everything else is truthy.
pub trait Truthy {
   /// Returns whether the value counts as "present" under identity testing.
   fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
   #[inline]
   fn is_truthy(&self) -> bool {
      *self
   }
}

impl Truthy for str {
   #[inline]
   fn is_truthy(&self) -> bool {
      !self.is_empty()
   }
}

impl Truthy for String {
   #[inline]
   fn is_truthy(&self) -> bool {
      !self.is_empty()
   }
}

impl<T> Truthy for Option<T> {
   #[inline]
   fn is_truthy(&self) -> bool {
      self.is_some()
   }
}

impl<T: Truthy + ?Sized> Truthy for &T {
   #[inline]
   fn is_truthy(&self) -> bool {
      (**self).is_truthy()
   }
}

macro_rules! impl_truthy_int {
   ($($ty:ty),*) => {
      $(impl Truthy for $ty {
         #[inline]
         fn is_truthy(&self) -> bool {
            *self != 0
         }
      })*
   };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
   ($($ty:ty),*) => {
      $(impl Truthy for $ty {
         #[inline]
         fn is_truthy(&self) -> bool {
            *self != 0.0 && !self.is_nan()
         }
      })*
   };
}

impl_truthy_float!(f32, f64);
