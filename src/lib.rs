//! # seq_order_count
//!
//! Count the orderings of a set of sequences in which every sequence comes
//! before each sequence that contains it as a substring.
//!
//! Sequences are read from two-line records, turned into a must-precede
//! relation by pairwise substring tests, and the linear extensions of that
//! relation are counted by a memoized depth-first search over visited-item
//! sets. Counts are reduced modulo a configurable modulus.
//!
//! ```
//! use seq_order_count::{Counter, Relation, DEFAULT_MODULUS};
//!
//! let relation = Relation::from_sequences(&["ACGT", "TACGTG", "GGG"]).unwrap();
//! let mut counter = Counter::new(&relation, DEFAULT_MODULUS).unwrap();
//! assert_eq!(counter.count(), 3);
//! ```
mod config;
mod counter;
mod error;
mod fasta;
mod item_set;
pub mod logging;
mod relation;
mod report;

#[cfg(test)]
mod tests;

pub use config::{CounterConfig, DEFAULT_MODULUS};
pub use counter::Counter;
pub use error::{Error, Result};
pub use fasta::{parse_sequences, read_sequences};
pub use relation::{duplicate_groups, Relation};
pub use report::{ItemReport, Report};
