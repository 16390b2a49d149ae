//! ZList: doubly linked list of individually allocated nodes
//!
//! Each node is boxed on push and freed on pop, so node addresses stay stable
//! for the life of the element. Front/back access and push/pop at either end
//! are O(1); positional access walks from the head.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

/// Doubly linked list owning every node reachable from `head`
///
/// Invariant: either empty (`head == tail == None`, `len == 0`) or a single
/// acyclic chain of exactly `len` nodes from `head` to `tail`.
///
/// # Examples
///
/// ```rust
/// use zcontainers::ZList;
///
/// let mut list = ZList::new();
/// list.push_back(1.5f32);
/// list.push_back(2.5);
/// assert_eq!(list.front(), Some(&1.5));
/// assert_eq!(list.at(1), Some(&2.5));
/// ```
pub struct ZList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> ZList<T> {
    /// Create an empty list
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocate a node and link it after the tail
    pub fn push_back(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        });
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Allocate a node and link it before the head
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            prev: None,
            next: self.head,
        });
        let node = NonNull::from(Box::leak(node));

        match self.head {
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Unlink and free the tail node
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| {
            let node = unsafe { Box::from_raw(tail.as_ptr()) };
            self.tail = node.prev;
            match self.tail {
                Some(prev) => unsafe { (*prev.as_ptr()).next = None },
                None => self.head = None,
            }
            self.len -= 1;
            node.value
        })
    }

    /// Unlink and free the head node
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            match self.head {
                Some(next) => unsafe { (*next.as_ptr()).prev = None },
                None => self.tail = None,
            }
            self.len -= 1;
            node.value
        })
    }

    /// Head value
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Head value, mutably
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Tail value
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Tail value, mutably
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        cursor
    }

    /// Value at `index`, walking from the head in O(index)
    pub fn at(&self, index: usize) -> Option<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable value at `index`, walking from the head in O(index)
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Free every node
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Free every node; the list header stays usable
    #[inline]
    pub fn free(&mut self) {
        self.clear();
    }

    /// Iterate in link order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Iterate mutably in link order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ZList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ZList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ZList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ZList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ZList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ZList<T> {}

impl<T> FromIterator<T> for ZList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ZList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a ZList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ZList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Safety: the list owns its nodes exclusively, like Box<T>
unsafe impl<T: Send> Send for ZList<T> {}

// Safety: shared access only hands out &T
unsafe impl<T: Sync> Sync for ZList<T> {}

// Safety: the iterators behave like &'a T and &'a mut T over the nodes
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

/// Borrowing iterator over a [`ZList`] in link order
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.remaining -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.remaining -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Default for Iter<'a, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            remaining: 0,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Mutable iterator over a [`ZList`] in link order
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            let node = &mut *node.as_ptr();
            self.remaining -= 1;
            self.head = node.next;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail.map(|node| unsafe {
            let node = &mut *node.as_ptr();
            self.remaining -= 1;
            self.tail = node.prev;
            &mut node.value
        })
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> Default for IterMut<'a, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            remaining: 0,
            _marker: PhantomData,
        }
    }
}
