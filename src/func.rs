//! Call-control wrappers: run-once caching, memoization, and deferred
//! scheduling.
//!
//! [`OnceFn`] and [`Memoized`] are callable values that privately own a
//! small cache; there is no global registry and no eviction. Both hand out
//! clones of cached results, so the wrapped function's output type decides
//! how cheap repeated calls are.
//!
//! [`delay`] defers a task through the [`Scheduler`] trait rather than
//! calling into any particular event loop; [`TokioScheduler`] (behind the
//! `async-tokio` feature) implements it on the tokio runtime.

use std::hash::Hash;
use std::time::Duration;

use rustc_hash::FxHashMap;

/// A wrapper that runs its function at most once and replays the result.
///
/// Created by [`once`]. The first [`call`](OnceFn::call) runs the wrapped
/// function and caches its return value; every later call returns a clone
/// of the cached value without running the function again.
pub struct OnceFn<F, T> {
   func: F,
   value: Option<T>,
}

/// Wraps `func` so it runs at most once.
///
/// # Examples
///
/// ```rust
/// use underkit::once;
///
/// let mut runs = 0;
/// let mut init = once(|| {
///     runs += 1;
///     "ready"
/// });
///
/// assert_eq!(init.call(), "ready");
/// assert_eq!(init.call(), "ready");
/// drop(init);
/// assert_eq!(runs, 1);
/// ```
#[must_use]
pub fn once<F, T>(func: F) -> OnceFn<F, T>
where
   F: FnMut() -> T,
   T: Clone,
{
   OnceFn { func, value: None }
}

impl<F, T> OnceFn<F, T>
where
   F: FnMut() -> T,
   T: Clone,
{
   /// Runs the wrapped function on the first call; replays the cached
   /// result on every later call.
   pub fn call(&mut self) -> T {
      let Self { func, value } = self;
      value.get_or_insert_with(|| func()).clone()
   }

   /// Returns whether the wrapped function has run.
   #[inline]
   #[must_use]
   pub fn called(&self) -> bool {
      self.value.is_some()
   }

   /// Returns the cached result, or `None` before the first call.
   #[inline]
   #[must_use]
   pub fn value(&self) -> Option<&T> {
      self.value.as_ref()
   }
}

/// A wrapper caching a single-argument function's results per argument.
///
/// Created by [`memoize`]. The cache grows monotonically: one entry per
/// distinct argument, no eviction, owned exclusively by the wrapper.
pub struct Memoized<F, K, V> {
   func: F,
   cache: FxHashMap<K, V>,
}

/// Wraps `func` so each distinct argument is computed at most once.
///
/// The wrapped function receives its argument by reference, so argument
/// types only need `Eq + Hash` to serve as cache keys.
///
/// # Examples
///
/// ```rust
/// use underkit::memoize;
///
/// let mut calls = 0;
/// let mut double = memoize(|n: &i32| {
///     calls += 1;
///     n * 2
/// });
///
/// assert_eq!(double.call(21), 42);
/// assert_eq!(double.call(21), 42); // cached, no second run
/// assert_eq!(double.call(5), 10);
/// drop(double);
/// assert_eq!(calls, 2);
/// ```
#[must_use]
pub fn memoize<F, K, V>(func: F) -> Memoized<F, K, V>
where
   F: FnMut(&K) -> V,
   K: Eq + Hash,
   V: Clone,
{
   Memoized {
      func,
      cache: FxHashMap::default(),
   }
}

impl<F, K, V> Memoized<F, K, V>
where
   F: FnMut(&K) -> V,
   K: Eq + Hash,
   V: Clone,
{
   /// Returns the cached result for `arg`, computing and caching it on the
   /// first call with this argument.
   pub fn call(&mut self, arg: K) -> V {
      if let Some(cached) = self.cache.get(&arg) {
         return cached.clone();
      }
      let value = (self.func)(&arg);
      self.cache.insert(arg, value.clone());
      value
   }

   /// Returns the number of distinct arguments cached so far.
   #[inline]
   #[must_use]
   pub fn cached_len(&self) -> usize {
      self.cache.len()
   }

   /// Returns whether a result for `arg` is already cached.
   #[inline]
   #[must_use]
   pub fn is_cached(&self, arg: &K) -> bool {
      self.cache.contains_key(arg)
   }
}

/// A deferred unit of work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Deferred-task scheduling, the seam between [`delay`] and an event loop.
///
/// Implementations run the task at least `wait` after `schedule` returns.
/// Scheduling is fire-and-forget: there is no cancellation and no result
/// channel, and a panic inside the task surfaces through whatever error
/// channel the host loop provides.
pub trait Scheduler {
   /// Queues `task` to run once at least `wait` has elapsed.
   fn schedule(&self, task: Task, wait: Duration);
}

/// Schedules `func` to run at least `wait` from now, returning immediately.
///
/// Arguments for the deferred call are captured by the closure. The caller
/// never blocks and never observes the task's result.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underkit::{delay, Scheduler, Task};
///
/// /// Runs tasks immediately; stands in for a real event loop.
/// struct Inline;
///
/// impl Scheduler for Inline {
///     fn schedule(&self, task: Task, _wait: Duration) {
///         task();
///     }
/// }
///
/// delay(&Inline, || println!("later"), Duration::from_millis(500));
/// ```
pub fn delay<S, F>(scheduler: &S, func: F, wait: Duration)
where
   S: Scheduler + ?Sized,
   F: FnOnce() + Send + 'static,
{
   scheduler.schedule(Box::new(func), wait);
}

/// A [`Scheduler`] backed by the tokio runtime.
///
/// Spawns each task onto the current runtime and sleeps out the wait with
/// the tokio timer, so paused-clock test runtimes control when tasks fire.
///
/// # Panics
///
/// [`schedule`](Scheduler::schedule) panics when called outside a tokio
/// runtime, as [`tokio::spawn`] does.
#[cfg(feature = "async-tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

#[cfg(feature = "async-tokio")]
impl Scheduler for TokioScheduler {
   fn schedule(&self, task: Task, wait: Duration) {
      tokio::spawn(async move {
         tokio::time::sleep(wait).await;
         task();
      });
   }
}
