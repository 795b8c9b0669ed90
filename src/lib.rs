//! A BK-tree indexes items of any discrete metric space so that every item
//! within a distance of a query can be found without comparing against all of
//! them.
//!
//! The distance is supplied by the caller, either as a plain function or
//! closure `Fn(&T, &T) -> u32` or as a type implementing [`Distance`]. The
//! crate ships [`hamming_distance`] for integers and [`levenshtein_distance`]
//! for strings.
//!
//! ```
//! use bktree::{BkTree, hamming_distance};
//!
//! let mut tree = BkTree::from_items(hamming_distance::<u64>, vec![0, 4, 5, 14]);
//! tree.add(15);
//! assert_eq!(tree.len(), 5);
//!
//! let mut found = tree.find(&13, 1).collect::<Vec<_>>();
//! found.sort();
//! assert_eq!(found, [(1, &5), (1, &15)]);
//! ```
//!
//! ## Search
//!
//! Each child is stored under its exact distance `k` from its parent. If the
//! query is at distance `d` from the parent, the triangle inequality puts every
//! item in that child's subtree at least `|k - d|` away from the query, so a
//! search with radius `r` only descends into children with
//! `d - r <= k <= d + r`. This is only correct if the distance is symmetric and
//! obeys the triangle inequality, which is never checked.
//!
//! Insertion and search both walk the tree with loops and an explicit stack.
//! Duplicates chain downwards at distance `0`, so trees can get arbitrarily
//! deep and recursion is never used.
//!
//! ## Concurrency
//!
//! `add` takes `&mut self` and everything else takes `&self`. Put the tree
//! behind an `RwLock` to add and search from several threads.

mod distance;
mod hamming;
mod levenshtein;
mod node;
mod search;
mod tree;

pub use distance::Distance;
pub use hamming::{hamming_distance, Hamming};
pub use levenshtein::levenshtein_distance;
pub use search::Find;
pub use tree::{BkTree, Iter};
