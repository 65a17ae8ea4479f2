//! Longest common subsequence length and exhaustive, deduplicated
//! enumeration of every subsequence achieving it.
//!
//! The length grid is the classic LCS dynamic program; alongside it a
//! choice grid records which recurrence case produced each cell, with
//! ties kept as ties. Walking the choice grid backward from the
//! bottom-right corner and forking at every tie visits every optimal
//! alignment, and an open-addressing, double-hashed
//! [`DedupSet`](hashing::DedupSet) keeps strings spelled by more than
//! one alignment from being reported twice.
//!
//! ```
//! use lcs_all::{all_lcs, lcs_length};
//!
//! assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
//!
//! let found = all_lcs("ABCBDAB", "BDCABA").unwrap();
//! assert_eq!(found.length, 4);
//! assert!(found.sequences.iter().any(|s| s == "BDAB"));
//! ```
//!
//! The number of distinct solutions can grow exponentially on tie-heavy
//! inputs and enumeration walks them all; that cost is inherent to the
//! problem. Grid dumps go to the [`log`] trace level, run summaries to
//! debug.

pub mod enumerate;
pub mod error;
pub mod hashing;
pub mod table;

pub use enumerate::{
    all_lcs, all_lcs_with_capacity, enumerate, enumerate_with_capacity, LcsSolutions,
};
pub use error::{Error, Result};
pub use table::{lcs_length, Choice, LcsTable};
