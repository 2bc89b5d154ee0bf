//! # sovran-collections
//!
//! Thread-safe, order-preserving containers with a functional API.
//!
//! `sovran-collections` provides three containers that can be shared between threads
//! and queried with the same vocabulary of higher-order operations: `all`, `any`,
//! `map`, `filter`, `for_each`, `reduce`, `find`, `take_while`, `drop_while`, plus
//! set algebra and JSON conversion.
//!
//! ## Key Features
//!
//! - **Ordered**: [`SafeOrderedMap`] and [`SafeSet`] iterate in first-insertion order
//! - **Thread-safe**: every container guards its state with a reader/writer lock
//! - **Total**: lookups report absence with `Option`, never with an error
//! - **Order-preserving JSON**: maps decode keys in document order
//! - **Statistics**: descriptive aggregates over numeric slices in [`statistics`]
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_collections::SafeOrderedMap;
//!
//! let stock = SafeOrderedMap::new();
//! stock.add("apples", 12).add("pears", 0).add("plums", 7);
//!
//! // Values come back in the order keys were first added
//! assert_eq!(stock.keys(), vec!["apples", "pears", "plums"]);
//! assert_eq!(stock.values(), vec![12, 0, 7]);
//!
//! // Lookups report absence with Option
//! assert_eq!(stock.get("apples"), Some(12));
//! assert_eq!(stock.get("kiwis"), None);
//!
//! // Derived maps keep the source order and leave the source alone
//! let in_stock = stock.filter(|_, count| *count > 0);
//! assert_eq!(in_stock.keys(), vec!["apples", "plums"]);
//! assert_eq!(stock.len(), 3);
//!
//! let total = stock.reduce(0, |acc, _, count| acc + count);
//! assert_eq!(total, 19);
//! ```
//!
//! ### Set Algebra
//!
//! ```rust
//! use sovran_collections::SafeOrderedMap;
//!
//! let a: SafeOrderedMap<i32> = [("1", 1), ("2", 2), ("3", 3)].into_iter().collect();
//! let b: SafeOrderedMap<i32> = [("2", 2), ("3", 3), ("4", 4)].into_iter().collect();
//!
//! assert_eq!(a.union(&b).values(), vec![1, 2, 3, 4]);
//! assert_eq!(a.difference(&b).values(), vec![1]);
//! assert_eq!(a.intersection(&b).values(), vec![2, 3]);
//! assert!(a.intersection(&b).is_subset(&b));
//! ```
//!
//! ### Sharing State Between Threads
//!
//! ```rust
//! use sovran_collections::SafeOrderedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let sessions = Arc::new(SafeOrderedMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let sessions = Arc::clone(&sessions);
//!         thread::spawn(move || {
//!             for i in 0..10 {
//!                 sessions.add(format!("worker-{worker}-{i}"), i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(sessions.len(), 40);
//! ```
//!
//! ### Sets and Slices
//!
//! ```rust
//! use sovran_collections::{SafeSet, SafeSlice};
//!
//! let visits = SafeSlice::from(vec!["home", "docs", "home", "blog", "home"]);
//! assert_eq!(visits.mode(), vec!["home"]);
//!
//! let pages: SafeSet<&str> = visits.values().into_iter().collect();
//! assert_eq!(pages.values(), vec!["home", "docs", "blog"]);
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_collections::{statistics, CollectionError, SafeOrderedMap};
//!
//! let config = SafeOrderedMap::<u16>::new();
//!
//! match config.load_json(r#"{"port": "eighty"}"#) {
//!     Ok(()) => println!("Loaded {} settings", config.len()),
//!     Err(CollectionError::Json(e)) => println!("Config is malformed: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! match statistics::median::<f64>(&[]) {
//!     Ok(m) => println!("Median: {}", m),
//!     Err(CollectionError::EmptyInput { operation }) => println!("No data for {}", operation),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

mod error;
mod fingerprint;
mod json;
mod ordered_map;
mod set;
mod slice;
pub mod statistics;

pub use error::{CollectionError, Result};
pub use fingerprint::fingerprint;
pub use ordered_map::SafeOrderedMap;
pub use set::SafeSet;
pub use slice::SafeSlice;
pub use statistics::Numeric;
