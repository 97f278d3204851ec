use underkit::Nested::{Item, List};
use underkit::{
   defaults, each, extend, filter, first_n, flatten, intersection, map, pluck, reduce, shuffle,
   sort_by_prop, uniq, zip, Record,
};

fn person(name: &str, age: i64) -> Record<i64> {
   let mut record = Record::new();
   record.insert("age".to_string(), age);
   record.insert("shoe_size".to_string(), name.len() as i64 + 35);
   record
}

fn main() {
   // Sequence pipeline: dedupe, keep evens, scale.
   let readings = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
   let distinct = uniq(&readings);
   let evens = filter(&distinct, |n| n % 2 == 0);
   println!("distinct: {distinct:?}");
   println!("evens:    {evens:?}");
   println!("scaled:   {:?}", map(&evens, |n| n * 100));
   println!("sum:      {}", reduce(&readings, |acc: i32, n| acc + n, None));

   // Records: merge option layers, then inspect.
   let mut config = Record::from([("retries".to_string(), 2)]);
   extend(&mut config, &[Record::from([("timeout_ms".to_string(), 500)])]);
   defaults(&mut config, &[Record::from([("retries".to_string(), 99)])]);
   each(&config, |(key, value)| println!("config {key} = {value}"));

   // Record sequences: pluck and sort by property.
   let people = [person("ada", 36), person("grace", 45), person("alan", 41)];
   println!("ages:     {:?}", pluck(&people, "age"));
   println!("by age:   {:?}", pluck(&sort_by_prop(&people, "age"), "age"));

   // Positional and structural reshaping.
   println!("zipped:   {:?}", zip(&[&[1, 2, 3][..], &[10, 20][..]]));
   let nested = [Item(1), List(vec![Item(2), List(vec![Item(3)])])];
   println!("flat:     {:?}", flatten(&nested));
   println!(
      "common:   {:?}",
      intersection(&[&readings[..], &[5, 6, 7][..]])
   );

   // Random order, same elements.
   println!("first 3 of a shuffle: {:?}", first_n(&shuffle(&readings), 3));
}
