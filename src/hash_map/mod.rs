//! Hash table with caller-supplied hash and comparison functions
//!
//! - [`ZMap`]: open addressing, linear probing, tombstone deletion
//! - [`hash_functions`]: reference plug-ins and the [`HashFn`]/[`CompareFn`]
//!   signatures

pub mod hash_functions;
mod zmap;

pub use hash_functions::{
    default_hash, fast_hash, fmix32, hash_bytes, ordered_cmp, random_seed, CompareFn, HashFn,
    SeededHasher,
};
pub use zmap::{Iter, IterMut, ZMap, MIN_SLOTS};
