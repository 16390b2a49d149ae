//! ZVec: contiguous growable array using realloc for growth
//!
//! Storage starts unallocated and grows geometrically: the first allocation
//! reserves [`MIN_CAPACITY`] slots, every later one doubles. Growth goes
//! through `realloc`, so the allocator can often extend the block in place.
//! A failed allocation is reported as [`ZError::OutOfMemory`] and leaves the
//! vector exactly as it was.

use crate::error::{Result, ZError};
use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Smallest non-zero capacity a vector grows to
pub const MIN_CAPACITY: usize = 8;

/// Contiguous growable array of `T`
///
/// Invariant: `len <= cap`, and the buffer is allocated whenever `cap > 0`.
/// Popped and cleared elements are dropped exactly once.
///
/// # Examples
///
/// ```rust
/// use zcontainers::ZVec;
///
/// let mut vec = ZVec::new();
/// vec.push(10).unwrap();
/// vec.push(20).unwrap();
/// assert_eq!(vec.len(), 2);
/// assert_eq!(*vec.at(1).unwrap(), 20);
/// ```
pub struct ZVec<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> ZVec<T> {
    /// Create a new empty vector without allocating
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Create a vector with room for exactly `cap` elements
    pub fn with_capacity(cap: usize) -> Result<Self> {
        let mut vec = Self::new();
        if cap > 0 {
            vec.realloc_exact(cap)?;
        }
        Ok(vec)
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the vector holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Raw pointer to the first slot, null when unallocated
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Mutable raw pointer to the first slot, null when unallocated
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// View the live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.ptr {
            Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }

    /// View the live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.ptr {
            Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
            None => &mut [],
        }
    }

    /// Reserve space for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| ZError::out_of_memory(usize::MAX))?;

        if required <= self.cap {
            return Ok(());
        }

        self.grow(required)
    }

    /// Geometric growth: at least `min_cap`, at least double, never below
    /// [`MIN_CAPACITY`].
    fn grow(&mut self, min_cap: usize) -> Result<()> {
        let target_cap = min_cap
            .max(self.cap.saturating_mul(2))
            .max(MIN_CAPACITY);
        self.realloc_exact(target_cap)
    }

    fn realloc_exact(&mut self, new_cap: usize) -> Result<()> {
        if mem::size_of::<T>() == 0 {
            // Zero-sized elements never need storage.
            self.ptr = Some(NonNull::dangling());
            self.cap = usize::MAX;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap)
            .map_err(|_| ZError::out_of_memory(new_cap.saturating_mul(mem::size_of::<T>())))?;

        let new_ptr = match self.ptr {
            Some(ptr) if self.cap > 0 => {
                let old_layout = Layout::array::<T>(self.cap)
                    .map_err(|_| ZError::out_of_memory(new_layout.size()))?;
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                }
            }
            _ => unsafe { alloc::alloc(new_layout) as *mut T },
        };

        let ptr = NonNull::new(new_ptr).ok_or_else(|| ZError::out_of_memory(new_layout.size()))?;
        log::debug!(
            "ZVec<{}> realloc: {} -> {} slots",
            std::any::type_name::<T>(),
            self.cap,
            new_cap
        );

        self.ptr = Some(ptr);
        self.cap = new_cap;
        Ok(())
    }

    /// Append an element, growing storage when full
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.cap {
            self.grow(self.len + 1)?;
        }

        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.as_ptr().add(self.len)) })
        }
    }

    /// Bounds-checked element access
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| ZError::out_of_bounds(index, self.len))
    }

    /// Bounds-checked mutable element access
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| ZError::out_of_bounds(index, len))
    }

    /// Element access, `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element access, `None` past the end
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// First element
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// First element, mutably
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Last element, mutably
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Drop every element; capacity is retained
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // Length goes to zero first so a panicking destructor cannot cause a
        // second drop of the same elements.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(elems);
        }
    }

    /// Drop every element and release the storage, returning to the
    /// unallocated state of [`ZVec::new`]
    pub fn free(&mut self) {
        self.clear();
        if let Some(ptr) = self.ptr.take() {
            if self.cap > 0 && mem::size_of::<T>() > 0 {
                if let Ok(layout) = Layout::array::<T>(self.cap) {
                    unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
                }
            }
        }
        self.cap = 0;
    }

    /// Append clones of every element in `items`
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.reserve(items.len())?;
        for item in items {
            unsafe {
                ptr::write(self.as_mut_ptr().add(self.len), item.clone());
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Iterate over the elements in storage order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements in storage order
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for ZVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ZVec<T> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T> Deref for ZVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for ZVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for ZVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ZVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for ZVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for ZVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ZVec<T> {}

/// Deep copy.
///
/// # Panics
///
/// Panics if the allocation for the copy fails, matching `Vec::clone`.
impl<T: Clone> Clone for ZVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        if let Err(err) = copy.extend_from_slice(self.as_slice()) {
            panic!("ZVec clone failed: {err}");
        }
        copy
    }
}

/// # Panics
///
/// Panics if growing the vector fails, matching `Vec`'s `FromIterator`.
impl<T> FromIterator<T> for ZVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        for item in iter {
            if let Err(err) = vec.push(item) {
                panic!("ZVec collect failed: {err}");
            }
        }
        vec
    }
}

impl<'a, T> IntoIterator for &'a ZVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ZVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Safety: ZVec<T> owns its elements like Vec<T>
unsafe impl<T: Send> Send for ZVec<T> {}

// Safety: shared access only hands out &T
unsafe impl<T: Sync> Sync for ZVec<T> {}
