use std::time::Duration;

use underkit::{delay, memoize, once, TokioScheduler};

fn slow_square(n: &u64) -> u64 {
   std::thread::sleep(Duration::from_millis(50));
   n * n
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
   // Run-once caching: the banner prints a single time.
   let mut banner = once(|| {
      println!("starting up (you will not see this twice)");
      "ready"
   });
   banner.call();
   banner.call();

   // Memoization: the second lookup of 12 skips the slow computation.
   let mut square = memoize(slow_square);
   println!("12^2 = {}", square.call(12));
   println!("12^2 = {} (cached)", square.call(12));
   println!("cached arguments: {}", square.cached_len());

   // Deferred, fire-and-forget scheduling on the tokio runtime.
   delay(
      &TokioScheduler,
      || println!("this line arrives last"),
      Duration::from_millis(100),
   );
   println!("delay() returned immediately");

   // Keep the runtime alive long enough for the deferred task to fire.
   tokio::time::sleep(Duration::from_millis(150)).await;
}
