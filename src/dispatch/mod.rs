//! Compile-time dispatch of the uniform container operations
//!
//! Each operation family is a trait implemented on *handle types*: a shared
//! reference `&C` and an exclusive reference `&mut C` are separate
//! implementations, so read-only access through `&C` yields `&Item` while
//! access through `&mut C` yields `&mut Item`. Resolution happens entirely in
//! the type checker; a call through [`ops`](crate::ops) inlines to the
//! container's native method.
//!
//! Every trait method has a default body: the *fallback*. A type opts into
//! the fallback for all operations with
//! [`register_fallback!`](crate::register_fallback); the built-in containers
//! use it for the operations they do not support (for example `push` on a
//! hash table). Fallbacks never panic:
//!
//! | Operation | Fallback |
//! |-----------|----------|
//! | `len`, `cap` | `0` |
//! | `is_empty` | `false` |
//! | `del`, `clear` | no-op |
//! | `push` | `Err(ZError::Unsupported)` |
//! | `pop`, `at`, `front`, `back` | `None` |
//! | `begin` | empty cursor at position 0 |
//! | `end` | position 0 |
//!
//! Mutating operations (`del`, `clear`, `push`, `pop`) are only implemented
//! on `&mut C`; passing `&C` is a type error rather than a silent no-op.

use crate::error::{Result, ZError};
use std::any::type_name;

pub mod cursor;
mod impls;

pub use cursor::{Cursor, Position};

#[inline]
fn fallback<H>(operation: &'static str) {
    log::trace!("`{}` resolved to the fallback for {}", operation, type_name::<H>());
}

/// Number of live elements
pub trait Length: Sized {
    /// Element count; fallback `0`
    #[inline]
    fn z_len(self) -> usize {
        fallback::<Self>("len");
        0
    }
}

/// Allocated capacity
pub trait Capacity: Sized {
    /// Capacity in elements (slots for hash tables); fallback `0`
    #[inline]
    fn z_cap(self) -> usize {
        fallback::<Self>("cap");
        0
    }
}

/// Emptiness test
pub trait IsEmpty: Sized {
    /// True when there are no live elements; fallback `false`
    #[inline]
    fn z_is_empty(self) -> bool {
        fallback::<Self>("is_empty");
        false
    }
}

/// Release storage, leaving the container empty and reusable
pub trait Destroy: Sized {
    /// Drop every element and free the backing storage; fallback no-op
    #[inline]
    fn z_del(self) {
        fallback::<Self>("del");
    }
}

/// Drop every element, keeping storage
pub trait Clear: Sized {
    /// Remove all elements; fallback no-op
    #[inline]
    fn z_clear(self) {
        fallback::<Self>("clear");
    }
}

/// Append at the back
pub trait Push<V>: Sized {
    /// Append `value`; fallback drops it and reports `Unsupported`
    #[inline]
    fn z_push(self, value: V) -> Result<()> {
        drop(value);
        fallback::<Self>("push");
        Err(ZError::unsupported("push", type_name::<Self>()))
    }
}

/// Remove from the back
pub trait Pop: Sized {
    /// Removed element type
    type Output;

    /// Remove and return the last element; fallback `None`
    #[inline]
    fn z_pop(self) -> Option<Self::Output> {
        fallback::<Self>("pop");
        None
    }
}

/// Element lookup by index (sequences) or key (tables)
pub trait At<I>: Sized {
    /// Reference type yielded for the element
    type Output;

    /// Element at `index`, `None` when absent; fallback `None`
    #[inline]
    fn z_at(self, index: I) -> Option<Self::Output> {
        let _ = index;
        fallback::<Self>("at");
        None
    }
}

/// First element
pub trait Front: Sized {
    /// Reference type yielded for the element
    type Output;

    /// First element, `None` when empty; fallback `None`
    #[inline]
    fn z_front(self) -> Option<Self::Output> {
        fallback::<Self>("front");
        None
    }
}

/// Last element
pub trait Back: Sized {
    /// Reference type yielded for the element
    type Output;

    /// Last element, `None` when empty; fallback `None`
    #[inline]
    fn z_back(self) -> Option<Self::Output> {
        fallback::<Self>("back");
        None
    }
}

/// Open an iteration cursor
pub trait Begin: Sized {
    /// Iterator wrapped by the cursor
    type Iter: Iterator + Default;

    /// Cursor on the first element; fallback is an empty cursor
    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        fallback::<Self>("begin");
        Cursor::new(Self::Iter::default())
    }
}

/// One-past-the-end position
pub trait End: Sized {
    /// Position after the last element; fallback [`Position::START`]
    #[inline]
    fn z_end(self) -> Position {
        fallback::<Self>("end");
        Position::START
    }
}
