//! Uniform container operations
//!
//! One function per operation, resolved at compile time from the static type
//! of the handle. Pass `&c` for read-only access and `&mut c` for mutation;
//! the two resolve to different implementations (see [`dispatch`](crate::dispatch)).
//!
//! ```rust
//! use zcontainers::ops::{at, len, pop, push};
//! use zcontainers::ZVec;
//!
//! let mut v: ZVec<i32> = ZVec::new();
//! push(&mut v, 10)?;
//! push(&mut v, 20)?;
//! assert_eq!(len(&v), 2);
//! assert_eq!(at(&v, 1), Some(&20));
//!
//! if let Some(first) = at(&mut v, 0) {
//!     *first += 1;
//! }
//! assert_eq!(pop(&mut v), Some(20));
//! assert_eq!(at(&v, 0), Some(&11));
//! # Ok::<(), zcontainers::ZError>(())
//! ```

use crate::dispatch::{
    At, Back, Begin, Capacity, Clear, Cursor, Destroy, End, Front, IsEmpty, Length, Pop, Position,
    Push,
};
use crate::error::Result;

/// Number of live elements
#[inline]
pub fn len<H: Length>(handle: H) -> usize {
    handle.z_len()
}

/// Allocated capacity (slot count for hash tables)
#[inline]
pub fn cap<H: Capacity>(handle: H) -> usize {
    handle.z_cap()
}

/// True when the container holds no elements
#[inline]
pub fn is_empty<H: IsEmpty>(handle: H) -> bool {
    handle.z_is_empty()
}

/// Release the container's storage; it stays usable and empty
#[inline]
pub fn del<H: Destroy>(handle: H) {
    handle.z_del()
}

/// Drop all elements, keeping storage
#[inline]
pub fn clear<H: Clear>(handle: H) {
    handle.z_clear()
}

/// Append `value` at the back
#[inline]
pub fn push<H: Push<V>, V>(handle: H, value: V) -> Result<()> {
    handle.z_push(value)
}

/// Remove and return the last element
#[inline]
pub fn pop<H: Pop>(handle: H) -> Option<H::Output> {
    handle.z_pop()
}

/// Element at a position (sequences) or for a key (hash tables)
#[inline]
pub fn at<H: At<I>, I>(handle: H, index: I) -> Option<H::Output> {
    handle.z_at(index)
}

/// Last element
#[inline]
pub fn back<H: Back>(handle: H) -> Option<H::Output> {
    handle.z_back()
}

/// First element
#[inline]
pub fn front<H: Front>(handle: H) -> Option<H::Output> {
    handle.z_front()
}

/// Cursor positioned on the first element
#[inline]
pub fn begin<H: Begin>(handle: H) -> Cursor<H::Iter> {
    handle.z_begin()
}

/// Position one past the last element
#[inline]
pub fn end<H: End>(handle: H) -> Position {
    handle.z_end()
}

/// Run a block for every element of a container, from `begin` to `end`.
///
/// The handle decides the element binding: `&c` binds `&Item`, `&mut c`
/// binds `&mut Item`. `break` and `continue` behave as in a `for` loop.
///
/// ```rust
/// use zcontainers::{z_foreach, ZList, ZVec};
///
/// let mut v: ZVec<i32> = (1..=3).collect();
/// z_foreach!(x in &mut v => { *x *= 10; });
///
/// let mut sum = 0;
/// z_foreach!(x in &v => { sum += *x; });
/// assert_eq!(sum, 60);
///
/// let list: ZList<f32> = [1.5, 2.5].into_iter().collect();
/// let mut seen = Vec::new();
/// z_foreach!(x in &list => { seen.push(*x); });
/// assert_eq!(seen, vec![1.5, 2.5]);
/// ```
#[macro_export]
macro_rules! z_foreach {
    ($item:pat in $handle:expr => $body:block) => {{
        let __handle = $handle;
        let __end = $crate::ops::end(&*__handle);
        let mut __cursor = $crate::ops::begin(__handle);
        while __cursor != __end {
            match __cursor.advance() {
                ::core::option::Option::Some($item) => $body,
                ::core::option::Option::None => break,
            }
        }
    }};
}
