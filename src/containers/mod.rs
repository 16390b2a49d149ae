//! Sequence containers
//!
//! - **`ZVec<T>`** - contiguous growable vector using realloc for growth
//! - **`ZList<T>`** - doubly linked list with O(1) operations at both ends

mod zlist;
mod zvec;

pub use zlist::{Iter as ListIter, IterMut as ListIterMut, ZList};
pub use zvec::{ZVec, MIN_CAPACITY};
