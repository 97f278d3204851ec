use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use underkit::{delay, memoize, once, Scheduler, Task};

#[test]
fn test_once_runs_underlying_function_exactly_once() {
   let runs = AtomicUsize::new(0);
   let mut wrapped = once(|| {
      runs.fetch_add(1, Ordering::SeqCst);
      42
   });

   assert!(!wrapped.called());
   assert_eq!(wrapped.call(), 42);
   assert_eq!(wrapped.call(), 42);
   assert_eq!(wrapped.call(), 42);
   assert!(wrapped.called());
   assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_once_value_peeks_without_running() {
   let mut wrapped = once(|| "ready".to_string());
   assert_eq!(wrapped.value(), None);
   wrapped.call();
   assert_eq!(wrapped.value(), Some(&"ready".to_string()));
}

#[test]
fn test_memoize_one_run_per_distinct_argument() {
   let runs = AtomicUsize::new(0);
   let mut squared = memoize(|n: &i64| {
      runs.fetch_add(1, Ordering::SeqCst);
      n * n
   });

   assert_eq!(squared.call(3), 9);
   assert_eq!(squared.call(3), 9);
   assert_eq!(runs.load(Ordering::SeqCst), 1);

   assert_eq!(squared.call(4), 16);
   assert_eq!(runs.load(Ordering::SeqCst), 2);
   assert_eq!(squared.cached_len(), 2);
   assert!(squared.is_cached(&3));
   assert!(!squared.is_cached(&5));
}

#[test]
fn test_memoize_caches_arguments_independently() {
   let mut negate = memoize(|n: &i32| -n);
   assert_eq!(negate.call(1), -1);
   assert_eq!(negate.call(2), -2);
   assert_eq!(negate.call(1), -1);
   assert_eq!(negate.cached_len(), 2);
}

#[test]
fn test_memoize_with_string_keys() {
   let mut lengths = memoize(|s: &String| s.len());
   assert_eq!(lengths.call("hello".to_string()), 5);
   assert_eq!(lengths.call("hello".to_string()), 5);
   assert_eq!(lengths.cached_len(), 1);
}

/// Queues tasks instead of running them, so tests control when they fire.
#[derive(Default)]
struct ManualScheduler {
   queue: RefCell<Vec<(Task, Duration)>>,
}

impl ManualScheduler {
   fn run_all(&self) -> usize {
      let drained: Vec<_> = self.queue.borrow_mut().drain(..).collect();
      let count = drained.len();
      for (task, _) in drained {
         task();
      }
      count
   }
}

impl Scheduler for ManualScheduler {
   fn schedule(&self, task: Task, wait: Duration) {
      self.queue.borrow_mut().push((task, wait));
   }
}

#[test]
fn test_delay_returns_before_task_runs() {
   let scheduler = ManualScheduler::default();
   let fired = Arc::new(AtomicBool::new(false));

   let flag = fired.clone();
   delay(
      &scheduler,
      move || flag.store(true, Ordering::SeqCst),
      Duration::from_millis(250),
   );

   // Scheduled but not run: delay is fire-and-forget, never blocking.
   assert!(!fired.load(Ordering::SeqCst));
   assert_eq!(scheduler.run_all(), 1);
   assert!(fired.load(Ordering::SeqCst));
}

#[test]
fn test_delay_passes_wait_through_to_scheduler() {
   let scheduler = ManualScheduler::default();
   delay(&scheduler, || {}, Duration::from_millis(125));
   let queue = scheduler.queue.borrow();
   assert_eq!(queue.len(), 1);
   assert_eq!(queue[0].1, Duration::from_millis(125));
}

#[test]
fn test_delay_captures_call_arguments() {
   let scheduler = ManualScheduler::default();
   let seen = Arc::new(AtomicUsize::new(0));

   let sink = seen.clone();
   let (a, b) = (30, 12);
   delay(
      &scheduler,
      move || sink.store(a + b, Ordering::SeqCst),
      Duration::ZERO,
   );

   scheduler.run_all();
   assert_eq!(seen.load(Ordering::SeqCst), 42);
}

#[cfg(feature = "async-tokio")]
mod tokio_scheduler {
   use super::*;
   use underkit::TokioScheduler;

   #[tokio::test(start_paused = true)]
   async fn test_fires_after_wait_elapses() {
      let fired = Arc::new(AtomicBool::new(false));

      let flag = fired.clone();
      delay(
         &TokioScheduler,
         move || flag.store(true, Ordering::SeqCst),
         Duration::from_millis(500),
      );

      // Not yet: the paused clock has only advanced to just before the deadline.
      tokio::time::sleep(Duration::from_millis(499)).await;
      assert!(!fired.load(Ordering::SeqCst));

      tokio::time::sleep(Duration::from_millis(10)).await;
      assert!(fired.load(Ordering::SeqCst));
   }

   #[tokio::test(start_paused = true)]
   async fn test_scheduled_tasks_all_fire() {
      let count = Arc::new(AtomicUsize::new(0));

      for wait_ms in [10u64, 20, 30] {
         let counter = count.clone();
         delay(
            &TokioScheduler,
            move || {
               counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(wait_ms),
         );
      }

      tokio::time::sleep(Duration::from_millis(50)).await;
      assert_eq!(count.load(Ordering::SeqCst), 3);
   }

   #[tokio::test(start_paused = true)]
   async fn test_results_are_not_observable() {
      // The deferred call produces a value nobody receives; completion is
      // only visible through side channels the caller sets up.
      let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

      delay(
         &TokioScheduler,
         move || {
            let _ = tx.send("done");
         },
         Duration::from_millis(5),
      );

      assert!(rx.try_recv().is_err()); // nothing before the wait elapses
      tokio::time::sleep(Duration::from_millis(6)).await;
      assert_eq!(rx.try_recv().ok(), Some("done"));
   }
}
