//! Reference hash and comparison plug-ins for [`ZMap`](super::ZMap)
//!
//! A table never assumes a hash or comparison for its key type; callers pass
//! both to the constructor. The functions here are conveniences with the
//! plug-in signatures [`HashFn`] and [`CompareFn`]:
//!
//! - [`hash_bytes`]: seeded FNV-1a over a byte slice, finished with the
//!   murmur3 avalanche step
//! - [`default_hash`]: the same digest over the byte stream a key's `Hash`
//!   impl writes (its raw representation for integers)
//! - [`fast_hash`]: ahash keyed by the seed
//! - [`ordered_cmp`]: comparison through `Ord`
//!
//! ```rust
//! use zcontainers::hash_map::{default_hash, hash_bytes};
//!
//! let key = 10i32;
//! assert_eq!(default_hash(&key, 7), default_hash(&key, 7));
//! assert_ne!(hash_bytes(b"abc", 1), hash_bytes(b"abc", 2));
//! ```

use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash, Hasher};

/// Hash plug-in: key and per-table seed to a 32-bit digest
pub type HashFn<K> = fn(&K, u32) -> u32;

/// Comparison plug-in: keys are equal when it returns `Ordering::Equal`
pub type CompareFn<K> = fn(&K, &K) -> Ordering;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

// Fixed ahash keys; the per-table seed supplies the variable one.
const AHASH_K1: u64 = 0x243f_6a88_85a3_08d3;
const AHASH_K2: u64 = 0x1319_8a2e_0370_7344;
const AHASH_K3: u64 = 0xa409_3822_299f_31d0;

/// murmur3 32-bit finalizer
#[inline]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[inline]
fn fnv1a(mut state: u32, bytes: &[u8]) -> u32 {
    for &byte in bytes {
        state ^= u32::from(byte);
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// Seeded bytewise digest
#[inline]
pub fn hash_bytes(bytes: &[u8], seed: u32) -> u32 {
    fmix32(fnv1a(FNV_OFFSET_BASIS ^ seed, bytes))
}

/// Streaming [`Hasher`] computing [`hash_bytes`] over everything written
#[derive(Debug, Clone, Copy)]
pub struct SeededHasher {
    state: u32,
}

impl SeededHasher {
    /// Start a digest keyed by `seed`
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self {
            state: FNV_OFFSET_BASIS ^ seed,
        }
    }
}

impl Hasher for SeededHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = fnv1a(self.state, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(fmix32(self.state))
    }
}

/// Reference hash: bytewise digest of the key's `Hash` byte stream
///
/// Note that slices and strings hash a length prefix as well, so
/// `default_hash(&"abc", s)` differs from `hash_bytes(b"abc", s)`.
pub fn default_hash<K: Hash + ?Sized>(key: &K, seed: u32) -> u32 {
    let mut hasher = SeededHasher::new(seed);
    key.hash(&mut hasher);
    hasher.finish() as u32
}

/// ahash-backed hash keyed by the table seed
pub fn fast_hash<K: Hash + ?Sized>(key: &K, seed: u32) -> u32 {
    let state = ahash::RandomState::with_seeds(u64::from(seed), AHASH_K1, AHASH_K2, AHASH_K3);
    let hash = BuildHasher::hash_one(&state, key);
    (hash ^ (hash >> 32)) as u32
}

/// Comparison plug-in for keys with a total order
#[inline]
pub fn ordered_cmp<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Fresh per-table seed drawn from ahash's runtime entropy
pub fn random_seed() -> u32 {
    let hash = BuildHasher::hash_one(&ahash::RandomState::new(), 0x5eed_u64);
    (hash ^ (hash >> 32)) as u32
}
