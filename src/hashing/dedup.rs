//! # Deduplication Set
//!
//! A fixed-capacity, open-addressing set of owned strings using double
//! hashing, built to record which subsequences an enumeration run has
//! already reported. Both probe functions derive from
//! [`string_key`]:
//!
//! - primary slot: `h1(key) = key mod m`
//! - probe stride: `h2(key) = 1 + (key mod (m - 2))`
//!
//! and probe `i` inspects slot `(h1 + i * h2) mod m`. When the slot count
//! `m` comes from
//! [`smallest_prime_at_least`](crate::hashing::primes::smallest_prime_at_least),
//! the stride is coprime to `m` and every probe sequence is a full cycle
//! over the table, so an insert only fails once every slot is occupied.
//!
//! There is no removal and no growth: a set lives for one enumeration run
//! and its capacity is fixed up front.

use crate::error::{Error, Result};
use crate::hashing::string_key::string_key;

/// Fixed-capacity open-addressing string set with double hashing.
///
/// # Examples
/// ```
/// use lcs_all::hashing::dedup::DedupSet;
///
/// let mut seen = DedupSet::new(7);
/// assert!(seen.insert_if_absent("BDAB").unwrap());
/// assert!(!seen.insert_if_absent("BDAB").unwrap());
/// assert!(seen.contains("BDAB"));
/// assert!(!seen.contains("BCAB"));
/// ```
#[derive(Debug, Clone)]
pub struct DedupSet {
    slots: Vec<Option<String>>,
    len: usize,
}

impl DedupSet {
    /// Creates a set with exactly `slots` slots.
    ///
    /// # Panics
    ///
    /// Panics if `slots <= 2`: the probe stride is keyed modulo
    /// `slots - 2` and needs that divisor to be at least 1.
    pub fn new(slots: usize) -> Self {
        assert!(slots > 2, "DedupSet needs at least 3 slots");
        Self {
            slots: vec![None; slots],
            len: 0,
        }
    }

    /// Number of strings stored so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no string has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts `s` unless an equal string is already stored.
    ///
    /// Returns `Ok(true)` if `s` was inserted and `Ok(false)` if it was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DedupSetFull`] if every slot is probed without
    /// finding an empty slot or a match. The set itself is still intact;
    /// the error means its planned capacity was exceeded, and callers may
    /// keep querying what was stored.
    pub fn insert_if_absent(&mut self, s: &str) -> Result<bool> {
        let m = self.slots.len();
        let (mut slot, stride) = self.probe_start(s);
        for _ in 0..m {
            match self.slots[slot].as_deref() {
                None => {
                    self.slots[slot] = Some(s.to_string());
                    self.len += 1;
                    return Ok(true);
                }
                Some(stored) if stored == s => return Ok(false),
                Some(_) => slot = (slot + stride) % m,
            }
        }
        Err(Error::DedupSetFull { slots: m })
    }

    /// Returns `true` if an equal string was stored earlier.
    ///
    /// Probing stops at the first empty slot: an insert of `s` would have
    /// used that slot or an earlier one, so nothing past it can match.
    pub fn contains(&self, s: &str) -> bool {
        let m = self.slots.len();
        let (mut slot, stride) = self.probe_start(s);
        for _ in 0..m {
            match self.slots[slot].as_deref() {
                None => return false,
                Some(stored) if stored == s => return true,
                Some(_) => slot = (slot + stride) % m,
            }
        }
        false
    }

    /// Primary slot and probe stride for `s`. Advancing by the stride each
    /// probe walks `(h1 + i * h2) mod m` without any multiplication that
    /// could overflow.
    fn probe_start(&self, s: &str) -> (usize, usize) {
        let m = self.slots.len() as u64;
        let key = string_key(s);
        let h1 = (key % m) as usize;
        let h2 = (1 + key % (m - 2)) as usize;
        (h1, h2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_contains() {
        let mut seen = DedupSet::new(11);
        assert!(seen.insert_if_absent("BCBA").unwrap());
        assert!(seen.contains("BCBA"));
        assert!(!seen.contains("BDAB"));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen.capacity(), 11);
    }

    #[test]
    fn duplicates_are_reported_not_stored() {
        let mut seen = DedupSet::new(7);
        assert!(seen.insert_if_absent("AA").unwrap());
        assert!(!seen.insert_if_absent("AA").unwrap());
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn membership_survives_later_inserts() {
        let mut seen = DedupSet::new(23);
        let words = ["A", "AB", "ABC", "B", "BC", "C", ""];
        for (i, word) in words.iter().enumerate() {
            assert!(seen.insert_if_absent(word).unwrap());
            for earlier in &words[..=i] {
                assert!(seen.contains(earlier), "{earlier:?} lost after inserting {word:?}");
            }
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn colliding_keys_resolve_by_probing() {
        // "0" and "5" share the primary slot when m == 5.
        let mut seen = DedupSet::new(5);
        assert!(seen.insert_if_absent("0").unwrap());
        assert!(seen.insert_if_absent("5").unwrap());
        assert!(seen.contains("0"));
        assert!(seen.contains("5"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn filling_every_slot_errors() {
        let mut seen = DedupSet::new(5);
        for d in 0..5 {
            assert!(seen.insert_if_absent(&d.to_string()).unwrap());
        }
        let err = seen.insert_if_absent("one too many").unwrap_err();
        assert_eq!(err, Error::DedupSetFull { slots: 5 });
        // The stored strings are untouched and re-inserts still succeed.
        for d in 0..5 {
            assert!(seen.contains(&d.to_string()));
            assert!(!seen.insert_if_absent(&d.to_string()).unwrap());
        }
        assert!(!seen.contains("one too many"));
    }

    #[test]
    fn empty_string_is_a_first_class_member() {
        let mut seen = DedupSet::new(3);
        assert!(seen.insert_if_absent("").unwrap());
        assert!(seen.contains(""));
        assert!(!seen.insert_if_absent("").unwrap());
    }

    #[test]
    #[should_panic(expected = "at least 3 slots")]
    fn rejects_degenerate_capacities() {
        let _ = DedupSet::new(2);
    }
}
