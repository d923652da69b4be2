//! Basic usage example for randq
//!
//! This example walks through the three containers, their error handling, and the
//! metrics each of them records.

use randq::deque::Deque;
use randq::queue::{Queue, RandomizedQueue};
use randq::{CheckedIterator, Error, MetricsCollector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("randq Usage Example");
    println!("===================");

    // Deque: insert at both ends, iterate front to back
    println!("\n1. Deque:");
    let mut deque = Deque::new();
    deque.add_first("See how they run.");
    deque.add_first("See how they run.");
    deque.add_first("Three blind mice.");
    deque.add_first("Three blind mice.");
    deque.add_last("They all ran after the farmer's wife.");
    deque.add_last("Who cut off their tails with a carving knife.");
    deque.add_last("Did you ever see such a sight in your life.");
    deque.add_last("As three blind mice?");

    println!("   Deque size: {}", deque.len());
    for line in &deque {
        println!("   {}", line);
    }
    println!("   Removed first: {}", deque.remove_first()?);
    println!("   Removed last: {}", deque.remove_last()?);

    // Queue: '-' dequeues, anything else enqueues
    println!("\n2. FIFO Queue:");
    let mut queue = Queue::new();
    let mut printed = Vec::new();
    for token in "to be or not to - be - - that - - - is".split_whitespace() {
        if token != "-" {
            queue.enqueue(token);
        } else if !queue.is_empty() {
            printed.push(queue.dequeue()?);
        }
    }
    println!("   Dequeued: {}", printed.join(" "));
    println!("   Remaining: {}({} left on queue)", queue, queue.len());

    // Randomized queue: uniform removal and independent iterators
    println!("\n3. Randomized Queue:");
    let mut random = RandomizedQueue::new();
    for i in 1..=10 {
        random.enqueue(i);
    }
    println!("   Sample: {}", random.sample()?);
    println!("   Order A: {:?}", random.iter().collect::<Vec<_>>());
    println!("   Order B: {:?}", random.iter().collect::<Vec<_>>());
    println!("   Dequeued: {}", random.dequeue()?);
    println!("   Size: {}, capacity: {}", random.len(), random.capacity());

    // Demonstrate error handling scenarios
    println!("\n4. Error Handling Examples:");

    let mut empty: Deque<i32> = Deque::new();
    match empty.remove_first() {
        Err(Error::EmptyContainer) => println!("   ✓ Empty deque removal rejected"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    match random.try_enqueue(None) {
        Err(Error::NullItem) => println!("   ✓ Absent item rejected, size still {}", random.len()),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    let mut iter = queue.iter();
    while iter.next().is_some() {}
    match iter.try_next() {
        Err(Error::NoMoreElements) => println!("   ✓ Exhausted iterator reported"),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    // Metrics
    println!("\n5. Metrics:");
    while random.dequeue().is_ok() {}
    let metrics = random.metrics();
    println!("   Operations: {}", metrics.total_operations);
    println!("   Success rate: {:.1}%", metrics.success_rate());
    println!(
        "   Resizes: {} grow, {} shrink",
        metrics.grow_events, metrics.shrink_events
    );
    println!("   Peak size: {}", metrics.peak_len);

    println!("\n✅ Usage example completed successfully!");
    Ok(())
}
