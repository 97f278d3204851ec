//! A small kit of collection, record, and function-wrapping utilities.
//!
//! This crate collects the classic "utility belt" operations as independent,
//! allocation-light functions over slices and ordered string-keyed records:
//!
//! - **Sequences** ([`seq`]): slicing, searching, filtering, mapping,
//!   de-duplication, shuffling, sorting, zipping, flattening, and set
//!   operations. Inputs are borrowed slices; outputs are fresh `Vec`s, so
//!   nothing ever mutates caller data.
//! - **Folds** ([`fold`]): whole-collection traversal (`each`, `reduce`,
//!   `contains`, `every`, `some`) generic over any `IntoIterator`, so slices
//!   and record value views work alike.
//! - **Records** ([`object`]): shallow merge helpers (`extend`, `defaults`)
//!   over insertion-ordered string-keyed maps.
//! - **Call control** ([`func`]): `once` and `memoize` wrappers that privately
//!   own their cached state, and fire-and-forget `delay` scheduling through a
//!   pluggable [`Scheduler`].
//!
//! Every operation is a leaf: none depends on another, none touches global
//! state, and none fails for well-typed input. Out-of-range counts are
//! clamped, missing properties surface as `None` per element, and iteration
//! always follows the collection's natural order.
//!
//! # Examples
//!
//! ## Sequence pipeline
//!
//! ```rust
//! use underkit::{filter, map, uniq};
//!
//! let nums = [1, 2, 2, 3, 4, 4, 5];
//! let evens = filter(&nums, |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 2, 4, 4]);
//! assert_eq!(uniq(&evens), vec![2, 4]);
//! assert_eq!(map(&nums, |n| n * 10)[..3], [10, 20, 20]);
//! ```
//!
//! ## Memoizing an expensive function
//!
//! ```rust
//! use underkit::memoize;
//!
//! let mut factorial = memoize(|n: &u64| (1..=*n).product::<u64>());
//!
//! assert_eq!(factorial.call(10), 3628800);
//! assert_eq!(factorial.call(10), 3628800); // served from the cache
//! assert_eq!(factorial.cached_len(), 1);
//! ```
//!
//! # Feature flags
//!
//! - `async-tokio` (default): enables [`TokioScheduler`], a [`Scheduler`]
//!   backed by the tokio runtime, for use with [`delay`].

/// Whole-collection traversal: `each`, `reduce`, membership and quantifiers.
pub mod fold;

/// Call-control wrappers: `once`, `memoize`, and deferred `delay` scheduling.
pub mod func;

/// Record merge helpers over insertion-ordered string-keyed maps.
pub mod object;

/// Sequence slicing, transformation, ordering, and set operations.
pub mod seq;

pub use fold::{contains, each, every, reduce, some, some_truthy, Truthy};
#[cfg(feature = "async-tokio")]
pub use func::TokioScheduler;
pub use func::{delay, memoize, once, Memoized, OnceFn, Scheduler, Task};
pub use object::{defaults, extend, Record};
pub use seq::{
   difference, filter, first, first_n, flatten, index_of, intersection, invoke, last, last_n, map,
   pluck, reject, shuffle, shuffle_with, sort_by, sort_by_prop, uniq, zip, Callee, NamedMethods,
   Nested,
};
