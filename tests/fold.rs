use std::cell::Cell;

use underkit::{contains, each, every, reduce, some, some_truthy, Record, Truthy};

fn scores() -> Record<i64> {
   Record::from([
      ("alpha".to_string(), 1),
      ("beta".to_string(), 0),
      ("gamma".to_string(), 3),
   ])
}

#[test]
fn test_each_visits_slice_in_order() {
   let mut seen = Vec::new();
   each(&[10, 20, 30], |n| seen.push(*n));
   assert_eq!(seen, vec![10, 20, 30]);
}

#[test]
fn test_each_visits_record_entries_in_insertion_order() {
   let mut keys = Vec::new();
   each(&scores(), |(key, _)| keys.push(key.clone()));
   assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_reduce_defaults_to_zero() {
   assert_eq!(reduce([1, 2, 3, 4], |acc: i32, n| acc + n, None), 10);
}

#[test]
fn test_reduce_with_explicit_initial() {
   assert_eq!(reduce([1, 2, 3], |acc, n| acc * n, Some(10)), 60);
}

#[test]
fn test_reduce_empty_returns_initial() {
   let empty: [i32; 0] = [];
   assert_eq!(reduce(empty, |acc: i32, n| acc + n, None), 0);
   assert_eq!(reduce(empty, |acc, n| acc + n, Some(7)), 7);
}

#[test]
fn test_reduce_over_record_values() {
   assert_eq!(reduce(scores().values(), |acc: i64, n| acc + n, None), 4);
}

#[test]
fn test_contains_over_slices_and_records() {
   assert!(contains(&[1, 2, 3], &2));
   assert!(!contains(&[1, 2, 3], &9));
   assert!(contains(scores().values(), &3));
   assert!(!contains(scores().values(), &9));
}

#[test]
fn test_every_vacuous_on_empty() {
   let empty: [i32; 0] = [];
   assert!(every(&empty, |_| false));
}

#[test]
fn test_every_short_circuits_on_first_failure() {
   let visited = Cell::new(0);
   let all_small = every(&[1, 2, 99, 3, 4], |n| {
      visited.set(visited.get() + 1);
      *n < 10
   });
   assert!(!all_small);
   assert_eq!(visited.get(), 3); // stopped at 99
}

#[test]
fn test_some_false_on_empty() {
   let empty: [i32; 0] = [];
   assert!(!some(&empty, |_| true));
}

#[test]
fn test_some_short_circuits_on_first_success() {
   let visited = Cell::new(0);
   let any_big = some(&[1, 2, 99, 3, 4], |n| {
      visited.set(visited.get() + 1);
      *n > 10
   });
   assert!(any_big);
   assert_eq!(visited.get(), 3); // stopped at 99
}

#[test]
fn test_some_truthy_default_test() {
   assert!(some_truthy(&[0, 0, 5]));
   assert!(!some_truthy(&[0, 0, 0]));
   assert!(some_truthy(&["", "x"]));
   assert!(!some_truthy(&["", ""]));
   assert!(some_truthy(&[None, Some(1)]));
   assert!(!some_truthy(scores().values().map(|n| *n == 7)));
}

#[test]
fn test_truthy_conventions() {
   assert!(true.is_truthy());
   assert!(!false.is_truthy());
   assert!(3.is_truthy());
   assert!(!0.is_truthy());
   assert!(1.5f64.is_truthy());
   assert!(!0.0f64.is_truthy());
   assert!(!f64::NAN.is_truthy());
   assert!("x".is_truthy());
   assert!(!"".is_truthy());
   assert!(Some(0).is_truthy()); // presence, not inner value
   assert!(!None::<i32>.is_truthy());
}
