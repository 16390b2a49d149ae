//! Property-based testing for the containers
//!
//! Each container is driven with random operation sequences and checked
//! against a std model.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use zcontainers::hash_map::{default_hash, ordered_cmp};
use zcontainers::ops;
use zcontainers::{ZList, ZMap, ZStr, ZVec};

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Sequence operations applied to a container and its model
#[derive(Debug, Clone)]
enum SeqOp<T> {
    Push(T),
    Pop,
    Clear,
}

fn seq_ops_strategy<T: Arbitrary + Clone + 'static>() -> impl Strategy<Value = Vec<SeqOp<T>>> {
    prop::collection::vec(
        prop_oneof![
            6 => any::<T>().prop_map(SeqOp::Push),
            3 => Just(SeqOp::Pop),
            1 => Just(SeqOp::Clear),
        ],
        0..500,
    )
}

/// Table operations applied to a `ZMap` and a `HashMap`
#[derive(Debug, Clone)]
enum MapOp {
    Put(u16, i64),
    Remove(u16),
    Get(u16),
    Clear,
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    // Narrow key range so overwrites and removals hit existing keys.
    prop::collection::vec(
        prop_oneof![
            6 => (0u16..512, any::<i64>()).prop_map(|(k, v)| MapOp::Put(k, v)),
            3 => (0u16..512).prop_map(MapOp::Remove),
            3 => (0u16..512).prop_map(MapOp::Get),
            1 => Just(MapOp::Clear),
        ],
        0..1000,
    )
}

// =============================================================================
// ZVEC PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_zvec_length_invariant(
        elements in prop::collection::vec(any::<i32>(), 0..5000)
    ) {
        let mut vec = ZVec::new();
        for &elem in &elements {
            ops::push(&mut vec, elem).unwrap();
        }

        prop_assert_eq!(ops::len(&vec), elements.len());
        prop_assert!(ops::cap(&vec) >= ops::len(&vec));
        for (i, &expected) in elements.iter().enumerate() {
            prop_assert_eq!(ops::at(&vec, i), Some(&expected));
        }
        prop_assert_eq!(ops::at(&vec, elements.len()), None);
    }

    #[test]
    fn prop_zvec_push_pop_symmetry(
        elements in prop::collection::vec(any::<u64>(), 0..1000)
    ) {
        let mut vec = ZVec::new();
        for &elem in &elements {
            ops::push(&mut vec, elem).unwrap();
        }

        for &expected in elements.iter().rev() {
            prop_assert_eq!(ops::pop(&mut vec), Some(expected));
        }
        prop_assert_eq!(ops::pop(&mut vec), None);
        prop_assert!(ops::is_empty(&vec));
    }

    #[test]
    fn prop_zvec_matches_model(ops_seq in seq_ops_strategy::<i16>()) {
        let mut vec = ZVec::new();
        let mut model = Vec::new();

        for op in ops_seq {
            match op {
                SeqOp::Push(v) => {
                    ops::push(&mut vec, v).unwrap();
                    model.push(v);
                }
                SeqOp::Pop => prop_assert_eq!(ops::pop(&mut vec), model.pop()),
                SeqOp::Clear => {
                    ops::clear(&mut vec);
                    model.clear();
                }
            }
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert_eq!(ops::front(&vec), model.first());
            prop_assert_eq!(ops::back(&vec), model.last());
        }
    }

    #[test]
    fn prop_zvec_push_then_pop_is_identity(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        extra in any::<i32>()
    ) {
        let mut vec: ZVec<i32> = elements.iter().copied().collect();
        ops::push(&mut vec, extra).unwrap();
        prop_assert_eq!(ops::pop(&mut vec), Some(extra));
        prop_assert_eq!(vec.as_slice(), elements.as_slice());
    }
}

// =============================================================================
// ZLIST PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_zlist_matches_model(ops_seq in seq_ops_strategy::<u32>()) {
        let mut list = ZList::new();
        let mut model = VecDeque::new();

        for op in ops_seq {
            match op {
                SeqOp::Push(v) => {
                    ops::push(&mut list, v).unwrap();
                    model.push_back(v);
                }
                SeqOp::Pop => prop_assert_eq!(ops::pop(&mut list), model.pop_back()),
                SeqOp::Clear => {
                    ops::clear(&mut list);
                    model.clear();
                }
            }
            prop_assert_eq!(ops::len(&list), model.len());
            prop_assert_eq!(ops::front(&list), model.front());
            prop_assert_eq!(ops::back(&list), model.back());
        }

        let forward: Vec<u32> = list.iter().copied().collect();
        let expected: Vec<u32> = model.iter().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let backward: Vec<u32> = list.iter().rev().copied().collect();
        let expected_rev: Vec<u32> = model.iter().rev().copied().collect();
        prop_assert_eq!(backward, expected_rev);
    }

    #[test]
    fn prop_zlist_at_walks_link_order(
        elements in prop::collection::vec(any::<i8>(), 0..100)
    ) {
        let list: ZList<i8> = elements.iter().copied().collect();
        for (i, expected) in elements.iter().enumerate() {
            prop_assert_eq!(ops::at(&list, i), Some(expected));
        }
        prop_assert_eq!(ops::at(&list, elements.len()), None);
    }
}

// =============================================================================
// ZSTR PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_zstr_terminator_invariant(ops_seq in seq_ops_strategy::<u8>()) {
        let mut s = ZStr::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops_seq {
            match op {
                // Interior zero bytes are ordinary data.
                SeqOp::Push(b) => {
                    ops::push(&mut s, b).unwrap();
                    model.push(b);
                }
                SeqOp::Pop => prop_assert_eq!(ops::pop(&mut s), model.pop()),
                SeqOp::Clear => {
                    ops::clear(&mut s);
                    model.clear();
                }
            }
            prop_assert_eq!(s.as_bytes(), model.as_slice());
            let with_nul = s.as_bytes_with_nul();
            prop_assert_eq!(with_nul.len(), model.len() + 1);
            prop_assert_eq!(with_nul[model.len()], 0);
            prop_assert!(s.capacity() == 0 || s.capacity() > s.len());
        }
    }

    #[test]
    fn prop_zstr_text_round_trips(text in "[a-zA-Z0-9 ]{0,64}", suffix in "[a-z]{0,8}") {
        let mut s = ZStr::from_text(&text).unwrap();
        s.push_str(&suffix).unwrap();
        let expected = format!("{}{}", text, suffix);
        prop_assert_eq!(s.as_str().unwrap(), expected.as_str());
        prop_assert_eq!(ops::len(&s), expected.len());
    }
}

// =============================================================================
// ZMAP PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_zmap_matches_model(seed in any::<u32>(), ops_seq in map_ops_strategy()) {
        let mut map: ZMap<u16, i64> = ZMap::with_seed(default_hash, ordered_cmp, seed);
        let mut model = HashMap::new();

        for op in ops_seq {
            match op {
                MapOp::Put(k, v) => {
                    prop_assert_eq!(map.put(k, v).unwrap(), model.insert(k, v));
                }
                MapOp::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k)),
                MapOp::Get(k) => prop_assert_eq!(ops::at(&map, &k), model.get(&k)),
                MapOp::Clear => {
                    ops::clear(&mut map);
                    model.clear();
                }
            }
            prop_assert_eq!(ops::len(&map), model.len());
        }

        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(v));
        }
        prop_assert_eq!(map.iter().count(), model.len());
        prop_assert!(ops::cap(&map) == 0 || ops::cap(&map).is_power_of_two());
    }

    #[test]
    fn prop_zmap_size_counts_distinct_keys(
        keys in prop::collection::vec(any::<u32>(), 0..2000)
    ) {
        let mut map: ZMap<u32, usize> = ZMap::with_default_fns();
        for (i, &k) in keys.iter().enumerate() {
            map.put(k, i).unwrap();
        }

        let mut latest = HashMap::new();
        for (i, &k) in keys.iter().enumerate() {
            latest.insert(k, i);
        }
        prop_assert_eq!(map.len(), latest.len());
        for (k, i) in &latest {
            prop_assert_eq!(map.get(k), Some(i));
        }
    }
}
