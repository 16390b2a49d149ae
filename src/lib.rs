//! # zcontainers: Type-Specialized Containers with Uniform Operations
//!
//! Four container kinds, each specialized per element type, plus one
//! operation vocabulary that works across all of them and resolves at
//! compile time.
//!
//! ## Key Features
//!
//! - **ZVec**: contiguous growable vector with explicit allocation errors
//! - **ZStr**: byte string that always keeps a terminator after its text
//! - **ZList**: doubly linked list
//! - **ZMap**: open-addressing hash table with plug-in hash and comparison
//! - **Uniform operations**: `len`, `push`, `at`, `z_foreach!` and friends,
//!   dispatched on the static handle type with a fallback for unsupported
//!   operations
//! - **Named specializations**: `define_vec!`, `define_list!`, `define_map!`
//!
//! ## Quick Start
//!
//! ```rust
//! use zcontainers::hash_map::{default_hash, ordered_cmp};
//! use zcontainers::ops::{at, len, push};
//! use zcontainers::{z_foreach, ZList, ZMap, ZStr, ZVec};
//!
//! let mut v: ZVec<i32> = ZVec::new();
//! push(&mut v, 10)?;
//! push(&mut v, 20)?;
//! assert_eq!(at(&v, 1), Some(&20));
//!
//! let mut s = ZStr::from_text("Hello")?;
//! push(&mut s, b'!')?;
//! assert_eq!(len(&s), 6);
//!
//! let mut list: ZList<f32> = ZList::new();
//! push(&mut list, 1.5)?;
//! z_foreach!(x in &list => { assert_eq!(*x, 1.5); });
//!
//! let mut users: ZMap<i32, &str> = ZMap::new(default_hash, ordered_cmp);
//! users.put(10, "User_A")?;
//! assert_eq!(at(&users, &10), Some(&"User_A"));
//! assert_eq!(at(&users, &99), None);
//! # Ok::<(), zcontainers::ZError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod dispatch;
pub mod error;
pub mod generate;
pub mod hash_map;
pub mod ops;
pub mod string;

pub use config::{Config, TableConfig};
pub use containers::{ZList, ZVec};
pub use dispatch::{Cursor, Position};
pub use error::{Result, ZError};
pub use hash_map::ZMap;
pub use string::ZStr;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing zcontainers v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_exports() {
        let mut v: ZVec<u8> = ZVec::new();
        ops::push(&mut v, 1).unwrap();
        let s = ZStr::new();
        let list: ZList<u8> = ZList::new();
        let map: ZMap<u8, u8> = ZMap::default();
        assert_eq!(ops::len(&v) + ops::len(&s) + ops::len(&list) + ops::len(&map), 1);
        assert!(TableConfig::default().validate().is_ok());
    }
}
