//! ZMap - open-addressing hash table with plug-in hash and comparison
//!
//! Keys and values are stored inline in a power-of-two slot array probed
//! linearly. The hash function and the key comparison are plain function
//! pointers supplied at construction, so a table never requires `Hash` or
//! `Eq` of its key type. Each table carries its own 32-bit seed, passed to the
//! hash function on every call.
//!
//! - Removal leaves a tombstone so later probe chains stay intact
//! - Insertion reuses the first tombstone on the probe path
//! - Occupied plus tombstoned slots never exceed the configured load factor;
//!   crossing it rehashes (growing by as many doublings as live entries
//!   need, otherwise at the same size to purge tombstones)
//!
//! # Examples
//!
//! ```rust
//! use zcontainers::hash_map::{default_hash, ordered_cmp, ZMap};
//!
//! let mut map: ZMap<i32, f32> = ZMap::new(default_hash, ordered_cmp);
//! map.put(10, 4.2).unwrap();
//! assert_eq!(map.get(&10), Some(&4.2));
//! assert_eq!(map.get(&11), None);
//! ```

use super::hash_functions::{default_hash, ordered_cmp, random_seed, CompareFn, HashFn};
use crate::config::{Config, TableConfig};
use crate::containers::ZVec;
use crate::error::{Result, ZError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

/// Smallest slot array a table allocates
pub const MIN_SLOTS: usize = 8;

#[derive(Clone)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied { hash: u32, key: K, value: V },
}

/// Hash table with caller-supplied hash and comparison functions
#[derive(Clone)]
pub struct ZMap<K, V> {
    slots: ZVec<Slot<K, V>>,
    count: usize,
    tombstones: usize,
    hash_fn: HashFn<K>,
    cmp_fn: CompareFn<K>,
    seed: u32,
    initial_capacity: usize,
    max_load_factor: f32,
}

impl<K, V> ZMap<K, V> {
    /// Create an empty table with the default configuration and a random seed.
    ///
    /// No slots are allocated until the first insertion.
    pub fn new(hash_fn: HashFn<K>, cmp_fn: CompareFn<K>) -> Self {
        let config = TableConfig::default();
        Self::from_parts(hash_fn, cmp_fn, random_seed(), &config)
    }

    /// Create an empty table with a fixed seed
    pub fn with_seed(hash_fn: HashFn<K>, cmp_fn: CompareFn<K>, seed: u32) -> Self {
        let config = TableConfig::default();
        Self::from_parts(hash_fn, cmp_fn, seed, &config)
    }

    /// Create an empty table from a validated configuration
    pub fn with_config(hash_fn: HashFn<K>, cmp_fn: CompareFn<K>, config: TableConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(random_seed);
        Ok(Self::from_parts(hash_fn, cmp_fn, seed, &config))
    }

    fn from_parts(hash_fn: HashFn<K>, cmp_fn: CompareFn<K>, seed: u32, config: &TableConfig) -> Self {
        Self {
            slots: ZVec::new(),
            count: 0,
            tombstones: 0,
            hash_fn,
            cmp_fn,
            seed,
            initial_capacity: config.initial_capacity,
            max_load_factor: config.max_load_factor,
        }
    }

    /// Number of live entries
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when no entries are live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots currently allocated
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Seed passed to the hash function
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Fraction of slots holding live entries
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.count as f64 / self.slots.len() as f64
        }
    }

    /// Configured ceiling for occupied plus tombstoned slots
    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    #[inline]
    fn hash_of(&self, key: &K) -> u32 {
        (self.hash_fn)(key, self.seed)
    }

    fn find(&self, key: &K, hash: u32) -> Option<usize> {
        let slots = self.slots.as_slice();
        if slots.is_empty() {
            return None;
        }
        let mask = slots.len() - 1;
        let mut index = hash as usize & mask;
        for _ in 0..slots.len() {
            match &slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { hash: h, key: k, .. }
                    if *h == hash && (self.cmp_fn)(key, k) == Ordering::Equal =>
                {
                    return Some(index);
                }
                _ => {}
            }
            index = (index + 1) & mask;
        }
        None
    }

    /// First empty or tombstoned slot on the probe path of `hash`
    fn insertion_slot(&self, hash: u32) -> Result<usize> {
        let slots = self.slots.as_slice();
        let mask = slots.len().wrapping_sub(1);
        let mut index = hash as usize & mask;
        for _ in 0..slots.len() {
            if !matches!(slots[index], Slot::Occupied { .. }) {
                return Ok(index);
            }
            index = (index + 1) & mask;
        }
        Err(ZError::invalid_data("hash table has no free slot"))
    }

    fn exceeds_load(&self, used: usize, slots: usize) -> bool {
        used as f64 > slots as f64 * f64::from(self.max_load_factor)
    }

    /// Smallest power-of-two slot count, at least `floor`, that holds `live`
    /// entries within the load factor
    fn target_slots(&self, live: usize, floor: usize) -> Result<usize> {
        let mut target = floor
            .max(MIN_SLOTS)
            .checked_next_power_of_two()
            .ok_or_else(|| ZError::out_of_memory(usize::MAX))?;
        while self.exceeds_load(live, target) {
            target = target
                .checked_mul(2)
                .ok_or_else(|| ZError::out_of_memory(usize::MAX))?;
        }
        Ok(target)
    }

    /// Make room for one more entry, rehashing if the load factor would be crossed
    fn reserve_one(&mut self) -> Result<()> {
        let slots = self.slots.len();
        if slots == 0 {
            let initial = self.target_slots(1, self.initial_capacity)?;
            return self.rehash(initial);
        }
        if !self.exceeds_load(self.count + self.tombstones + 1, slots) {
            return Ok(());
        }
        // Same size when purging tombstones is enough.
        let target = self.target_slots(self.count + 1, slots)?;
        self.rehash(target)
    }

    fn rehash(&mut self, new_slots: usize) -> Result<()> {
        let mut slots = ZVec::with_capacity(new_slots)?;
        for _ in 0..new_slots {
            slots.push(Slot::Empty)?;
        }

        log::debug!(
            "ZMap rehash: {} -> {} slots ({} live, {} tombstones dropped)",
            self.slots.len(),
            new_slots,
            self.count,
            self.tombstones
        );

        let mut old = mem::replace(&mut self.slots, slots);
        self.tombstones = 0;
        let mask = new_slots - 1;
        let table = self.slots.as_mut_slice();
        while let Some(slot) = old.pop() {
            if let Slot::Occupied { hash, key, value } = slot {
                let mut index = hash as usize & mask;
                while matches!(table[index], Slot::Occupied { .. }) {
                    index = (index + 1) & mask;
                }
                table[index] = Slot::Occupied { hash, key, value };
            }
        }
        Ok(())
    }

    /// Insert or overwrite the value for `key`.
    ///
    /// Returns the previous value when the key was already present. On
    /// allocation failure the table is left unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        let hash = self.hash_of(&key);
        if let Some(index) = self.find(&key, hash) {
            if let Slot::Occupied { value: existing, .. } = &mut self.slots[index] {
                return Ok(Some(mem::replace(existing, value)));
            }
        }

        self.reserve_one()?;
        let index = self.insertion_slot(hash)?;
        if matches!(self.slots[index], Slot::Tombstone) {
            self.tombstones -= 1;
        }
        self.slots[index] = Slot::Occupied { hash, key, value };
        self.count += 1;
        Ok(None)
    }

    /// Value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find(key, self.hash_of(key))?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Mutable value stored for `key`
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key, self.hash_of(key))?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Stored key and value for `key`
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let index = self.find(key, self.hash_of(key))?;
        match &self.slots[index] {
            Slot::Occupied { key, value, .. } => Some((key, value)),
            _ => None,
        }
    }

    /// True when `key` has a live entry
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key, self.hash_of(key)).is_some()
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key, self.hash_of(key))?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.count -= 1;
                self.tombstones += 1;
                Some(value)
            }
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    /// Drop every entry, keeping the slot array
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.count = 0;
        self.tombstones = 0;
    }

    /// Drop every entry and release the slot array
    pub fn free(&mut self) {
        self.slots.free();
        self.count = 0;
        self.tombstones = 0;
    }

    /// Iterate over live entries in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.count,
        }
    }

    /// Iterate over live entries with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let remaining = self.count;
        IterMut {
            slots: self.slots.iter_mut(),
            remaining,
        }
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over values
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Ord, V> ZMap<K, V> {
    /// Table using [`default_hash`] and [`ordered_cmp`]
    pub fn with_default_fns() -> Self {
        Self::new(default_hash::<K>, ordered_cmp::<K>)
    }
}

impl<K: Hash + Ord, V> Default for ZMap<K, V> {
    fn default() -> Self {
        Self::with_default_fns()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ZMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a ZMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ZMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over the live entries of a [`ZMap`]
pub struct Iter<'a, K, V> {
    slots: slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value, .. } = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    fn default() -> Self {
        Self {
            slots: [].iter(),
            remaining: 0,
        }
    }
}

/// Iterator over the live entries of a [`ZMap`] with mutable values
pub struct IterMut<'a, K, V> {
    slots: slice::IterMut<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value, .. } = slot {
                self.remaining -= 1;
                return Some((&*key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> Default for IterMut<'_, K, V> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
            remaining: 0,
        }
    }
}
