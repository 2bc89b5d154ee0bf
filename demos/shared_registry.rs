use sovran_collections::{SafeOrderedMap, SafeSet};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Peer {
    host: String,
    port: u16,
}

/// Demonstrates sharing a registry and a peer set between worker threads
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let registry = Arc::new(SafeOrderedMap::<u64>::new());
    let peers = Arc::new(SafeSet::new());

    let mut handles = vec![];
    for worker in 0..4u16 {
        let registry = Arc::clone(&registry);
        let peers = Arc::clone(&peers);
        handles.push(thread::spawn(move || {
            registry.add(format!("worker-{worker}"), 0);
            for round in 0..25 {
                registry.with_mut(&format!("worker-{worker}"), |jobs| *jobs += 1);
                // Workers discover overlapping peers; the set keeps one of each
                peers.add(Peer {
                    host: format!("10.0.0.{}", round % 5),
                    port: 7000 + worker % 2,
                });
            }
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a worker panicked");
        }
    }

    println!("Jobs per worker:");
    for (name, jobs) in registry.entries() {
        println!("  {name}: {jobs}");
    }

    let total = registry.reduce(0, |acc, _, jobs| acc + jobs);
    println!("Total jobs: {}", total);

    println!("Distinct peers: {}", peers.len());
    let primary = peers.filter(|peer| peer.port == 7000);
    let secondary = peers.difference(&primary);
    println!(
        "Primary: {}, secondary: {}",
        primary.len(),
        secondary.len()
    );
    assert!(primary.union(&secondary).is_superset(&peers));
}
