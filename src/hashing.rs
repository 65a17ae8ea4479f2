//! Hashing support for the enumeration layer: a fixed-capacity
//! open-addressing string set with double hashing, the polynomial key
//! derivation feeding its probe functions, and the prime-based capacity
//! sizing that keeps those probes full-cycle.

pub mod dedup;
pub mod primes;
pub mod string_key;

pub use dedup::DedupSet;
pub use primes::{is_prime, smallest_prime_at_least};
pub use string_key::string_key;
