//! # Exhaustive LCS Enumeration
//!
//! Walks the choice grid of an [`LcsTable`] backward from the bottom-right
//! cell, reconstructing **every** common subsequence of maximal length and
//! reporting each distinct string exactly once. [`Choice::Tie`] cells fork
//! the walk into both the up and the left branch, which is what surfaces
//! alternative alignments; since different alignments can spell the same
//! string, each completed candidate passes through a [`DedupSet`] before
//! it is reported.
//!
//! The candidate buffer is a single character array filled back to front
//! and lent mutably down the recursion. Deeper calls only ever write
//! strictly below the caller's fill boundary, so sibling branches never
//! observe each other's writes and no restore step is needed.
//!
//! Worst-case running time is exponential in the number of tie cells;
//! that is inherent to enumerating all solutions and is not mitigated
//! here. Recursion depth stays below `len_a + len_b`.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::hashing::dedup::DedupSet;
use crate::hashing::primes::smallest_prime_at_least;
use crate::table::{Choice, LcsTable};

/// Occupancy target for the dedup set sizing.
const DEDUP_LOAD_FACTOR: f64 = 1.0;

/// Every distinct maximal-length common subsequence of one input pair.
///
/// `sequences` holds each string once, in discovery order: the walk
/// follows the recorded choice of each cell and expands ties up-branch
/// first. No sorted order is promised. `truncated` is set when the dedup
/// set filled up before the walk finished; everything reported is still
/// valid and distinct, but further subsequences may exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsSolutions {
    /// Length of the longest common subsequence.
    pub length: usize,
    /// Each distinct subsequence of that length, discovery order.
    pub sequences: Vec<String>,
    /// True if the walk stopped early on a full dedup set.
    pub truncated: bool,
}

/// Computes the LCS length of `a` and `b` together with every distinct
/// subsequence achieving it.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the dedup capacity computation leaves
/// the `usize` range, which takes astronomical input lengths.
///
/// # Examples
/// ```
/// use lcs_all::all_lcs;
///
/// let found = all_lcs("ABCBDAB", "BDCABA").unwrap();
/// assert_eq!(found.length, 4);
/// assert!(found.sequences.iter().any(|s| s == "BDAB"));
/// ```
pub fn all_lcs(a: &str, b: &str) -> Result<LcsSolutions> {
    enumerate(&LcsTable::build(a, b))
}

/// Like [`all_lcs`] with at least `min_slots` dedup slots, for inputs
/// whose distinct-solution count outgrows the default bound.
pub fn all_lcs_with_capacity(a: &str, b: &str, min_slots: usize) -> Result<LcsSolutions> {
    enumerate_with_capacity(&LcsTable::build(a, b), min_slots)
}

/// Enumerates over an already-built table with the default dedup sizing:
/// `max(len_a, len_b) + 1` intended entries (floored at 3 so the probe
/// stride is defined), rounded up to a prime at load factor 1.0.
///
/// That bound tracks the maximum subsequence *length*, not the number of
/// distinct solutions, so tie-heavy inputs can overrun it. The overrun is
/// reported through [`LcsSolutions::truncated`] rather than an error;
/// [`enumerate_with_capacity`] accepts a larger bound when the full set
/// is required.
pub fn enumerate(table: &LcsTable) -> Result<LcsSolutions> {
    enumerate_with_capacity(table, (table.len_a().max(table.len_b()) + 1).max(3))
}

/// Enumerates over an already-built table, deduplicating through at least
/// `min_slots` slots.
pub fn enumerate_with_capacity(table: &LcsTable, min_slots: usize) -> Result<LcsSolutions> {
    let slots = smallest_prime_at_least(min_slots.max(3), DEDUP_LOAD_FACTOR)?;
    let mut seen = DedupSet::new(slots);
    let longest = table.longest_len();
    let mut sequences = Vec::new();
    // Fully overwritten back to front before any read.
    let mut buf = vec!['\0'; longest];

    let truncated = match walk(
        table,
        table.len_b(),
        table.len_a(),
        &mut buf,
        longest,
        &mut seen,
        &mut sequences,
    ) {
        Ok(()) => false,
        Err(Error::DedupSetFull { slots }) => {
            warn!(
                "dedup set full ({slots} slots) before the walk finished; \
                 reporting the {} subsequence(s) found so far",
                sequences.len()
            );
            true
        }
        Err(other) => return Err(other),
    };

    debug!(
        "enumerated {}x{} inputs: longest {}, {} distinct subsequence(s), \
         dedup occupancy {}/{}{}",
        table.len_a(),
        table.len_b(),
        longest,
        sequences.len(),
        seen.len(),
        seen.capacity(),
        if truncated { ", truncated" } else { "" }
    );

    Ok(LcsSolutions {
        length: longest,
        sequences,
        truncated,
    })
}

/// Depth-first reconstruction. `buf_len` is the fill boundary: positions
/// `buf_len..` already hold the suffix spelled by this call's ancestors,
/// and `buf_len` always equals the length-grid value at `(i, j)`, so it
/// reaches 0 exactly when the walk reaches row 0 or column 0.
fn walk(
    table: &LcsTable,
    i: usize,
    j: usize,
    buf: &mut [char],
    buf_len: usize,
    seen: &mut DedupSet,
    out: &mut Vec<String>,
) -> Result<()> {
    if i == 0 || j == 0 {
        debug_assert_eq!(buf_len, 0, "fill boundary must reach 0 at the grid border");
        let candidate: String = buf[buf_len..].iter().collect();
        if seen.insert_if_absent(&candidate)? {
            out.push(candidate);
        }
        return Ok(());
    }
    match table.choice(i, j) {
        Choice::CharsEqual => {
            buf[buf_len - 1] = table.seq_a()[j - 1];
            walk(table, i - 1, j - 1, buf, buf_len - 1, seen, out)
        }
        Choice::PreferUp => walk(table, i - 1, j, buf, buf_len, seen, out),
        Choice::PreferLeft => walk(table, i, j - 1, buf, buf_len, seen, out),
        Choice::Tie => {
            walk(table, i - 1, j, buf, buf_len, seen, out)?;
            walk(table, i, j - 1, buf, buf_len, seen, out)
        }
    }
}
