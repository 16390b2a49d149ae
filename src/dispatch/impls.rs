//! Operation registrations for the built-in containers.
//!
//! Each impl is a trampoline onto the container's native method. Operations
//! a container does not support are registered with an empty impl, which
//! selects the trait's fallback body.

use super::{At, Back, Begin, Capacity, Clear, Cursor, Destroy, End, Front, IsEmpty, Length, Pop, Position, Push};
use crate::containers::{ListIter, ListIterMut, ZList, ZVec};
use crate::error::Result;
use crate::hash_map::ZMap;
use crate::string::ZStr;
use std::convert::Infallible;
use std::iter::Empty;
use std::slice;

// Length, emptiness and end position are read-only; they resolve for both
// handle kinds of every container.
macro_rules! register_reads {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<'a, $($gen)*> Length for &'a $ty {
                #[inline]
                fn z_len(self) -> usize {
                    self.len()
                }
            }

            impl<'a, $($gen)*> Length for &'a mut $ty {
                #[inline]
                fn z_len(self) -> usize {
                    self.len()
                }
            }

            impl<'a, $($gen)*> IsEmpty for &'a $ty {
                #[inline]
                fn z_is_empty(self) -> bool {
                    self.is_empty()
                }
            }

            impl<'a, $($gen)*> IsEmpty for &'a mut $ty {
                #[inline]
                fn z_is_empty(self) -> bool {
                    self.is_empty()
                }
            }

            impl<'a, $($gen)*> Destroy for &'a mut $ty {
                #[inline]
                fn z_del(self) {
                    self.free();
                }
            }

            impl<'a, $($gen)*> Clear for &'a mut $ty {
                #[inline]
                fn z_clear(self) {
                    self.clear();
                }
            }
        )+
    };
}

register_reads!([T] ZVec<T>, [] ZStr, [T] ZList<T>, [K, V] ZMap<K, V>);

// ---- capacity ----

impl<T> Capacity for &ZVec<T> {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

impl<T> Capacity for &mut ZVec<T> {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

impl Capacity for &ZStr {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

impl Capacity for &mut ZStr {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

impl<K, V> Capacity for &ZMap<K, V> {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

impl<K, V> Capacity for &mut ZMap<K, V> {
    #[inline]
    fn z_cap(self) -> usize {
        self.capacity()
    }
}

// Linked lists have no capacity.
impl<T> Capacity for &ZList<T> {}
impl<T> Capacity for &mut ZList<T> {}

// ---- ZVec ----

impl<T> Push<T> for &mut ZVec<T> {
    #[inline]
    fn z_push(self, value: T) -> Result<()> {
        self.push(value)
    }
}

impl<T> Pop for &mut ZVec<T> {
    type Output = T;

    #[inline]
    fn z_pop(self) -> Option<T> {
        self.pop()
    }
}

impl<'a, T> At<usize> for &'a ZVec<T> {
    type Output = &'a T;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a T> {
        self.get(index)
    }
}

impl<'a, T> At<usize> for &'a mut ZVec<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a mut T> {
        self.get_mut(index)
    }
}

impl<'a, T> Front for &'a ZVec<T> {
    type Output = &'a T;

    #[inline]
    fn z_front(self) -> Option<&'a T> {
        self.first()
    }
}

impl<'a, T> Front for &'a mut ZVec<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_front(self) -> Option<&'a mut T> {
        self.first_mut()
    }
}

impl<'a, T> Back for &'a ZVec<T> {
    type Output = &'a T;

    #[inline]
    fn z_back(self) -> Option<&'a T> {
        self.last()
    }
}

impl<'a, T> Back for &'a mut ZVec<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_back(self) -> Option<&'a mut T> {
        self.last_mut()
    }
}

impl<'a, T> Begin for &'a ZVec<T> {
    type Iter = slice::Iter<'a, T>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter())
    }
}

impl<'a, T> Begin for &'a mut ZVec<T> {
    type Iter = slice::IterMut<'a, T>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter_mut())
    }
}

impl<T> End for &ZVec<T> {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

impl<T> End for &mut ZVec<T> {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

// ---- ZStr ----

impl Push<u8> for &mut ZStr {
    #[inline]
    fn z_push(self, byte: u8) -> Result<()> {
        self.push(byte)
    }
}

impl Pop for &mut ZStr {
    type Output = u8;

    #[inline]
    fn z_pop(self) -> Option<u8> {
        self.pop()
    }
}

impl<'a> At<usize> for &'a ZStr {
    type Output = &'a u8;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a u8> {
        self.get(index)
    }
}

impl<'a> At<usize> for &'a mut ZStr {
    type Output = &'a mut u8;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a mut u8> {
        self.get_mut(index)
    }
}

impl<'a> Front for &'a ZStr {
    type Output = &'a u8;

    #[inline]
    fn z_front(self) -> Option<&'a u8> {
        self.front()
    }
}

impl<'a> Front for &'a mut ZStr {
    type Output = &'a mut u8;

    #[inline]
    fn z_front(self) -> Option<&'a mut u8> {
        self.front_mut()
    }
}

impl<'a> Back for &'a ZStr {
    type Output = &'a u8;

    #[inline]
    fn z_back(self) -> Option<&'a u8> {
        self.back()
    }
}

impl<'a> Back for &'a mut ZStr {
    type Output = &'a mut u8;

    #[inline]
    fn z_back(self) -> Option<&'a mut u8> {
        self.back_mut()
    }
}

impl<'a> Begin for &'a ZStr {
    type Iter = slice::Iter<'a, u8>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter())
    }
}

impl<'a> Begin for &'a mut ZStr {
    type Iter = slice::IterMut<'a, u8>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter_mut())
    }
}

impl End for &ZStr {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

impl End for &mut ZStr {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

// ---- ZList ----

impl<T> Push<T> for &mut ZList<T> {
    #[inline]
    fn z_push(self, value: T) -> Result<()> {
        self.push_back(value);
        Ok(())
    }
}

impl<T> Pop for &mut ZList<T> {
    type Output = T;

    #[inline]
    fn z_pop(self) -> Option<T> {
        self.pop_back()
    }
}

impl<'a, T> At<usize> for &'a ZList<T> {
    type Output = &'a T;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a T> {
        self.at(index)
    }
}

impl<'a, T> At<usize> for &'a mut ZList<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_at(self, index: usize) -> Option<&'a mut T> {
        self.at_mut(index)
    }
}

impl<'a, T> Front for &'a ZList<T> {
    type Output = &'a T;

    #[inline]
    fn z_front(self) -> Option<&'a T> {
        self.front()
    }
}

impl<'a, T> Front for &'a mut ZList<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_front(self) -> Option<&'a mut T> {
        self.front_mut()
    }
}

impl<'a, T> Back for &'a ZList<T> {
    type Output = &'a T;

    #[inline]
    fn z_back(self) -> Option<&'a T> {
        self.back()
    }
}

impl<'a, T> Back for &'a mut ZList<T> {
    type Output = &'a mut T;

    #[inline]
    fn z_back(self) -> Option<&'a mut T> {
        self.back_mut()
    }
}

impl<'a, T> Begin for &'a ZList<T> {
    type Iter = ListIter<'a, T>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter())
    }
}

impl<'a, T> Begin for &'a mut ZList<T> {
    type Iter = ListIterMut<'a, T>;

    #[inline]
    fn z_begin(self) -> Cursor<Self::Iter> {
        Cursor::new(self.iter_mut())
    }
}

impl<T> End for &ZList<T> {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

impl<T> End for &mut ZList<T> {
    #[inline]
    fn z_end(self) -> Position {
        Position::new(self.len())
    }
}

// ---- ZMap ----

impl<'a, 'k, K, V> At<&'k K> for &'a ZMap<K, V> {
    type Output = &'a V;

    #[inline]
    fn z_at(self, key: &'k K) -> Option<&'a V> {
        self.get(key)
    }
}

impl<'a, 'k, K, V> At<&'k K> for &'a mut ZMap<K, V> {
    type Output = &'a mut V;

    #[inline]
    fn z_at(self, key: &'k K) -> Option<&'a mut V> {
        self.get_mut(key)
    }
}

// Tables have no sequence order: push, pop, ends and cursors fall back.
impl<K, V, X> Push<X> for &mut ZMap<K, V> {}

impl<K, V> Pop for &mut ZMap<K, V> {
    type Output = Infallible;
}

impl<K, V> Front for &ZMap<K, V> {
    type Output = Infallible;
}

impl<K, V> Front for &mut ZMap<K, V> {
    type Output = Infallible;
}

impl<K, V> Back for &ZMap<K, V> {
    type Output = Infallible;
}

impl<K, V> Back for &mut ZMap<K, V> {
    type Output = Infallible;
}

impl<K, V> Begin for &ZMap<K, V> {
    type Iter = Empty<Infallible>;
}

impl<K, V> Begin for &mut ZMap<K, V> {
    type Iter = Empty<Infallible>;
}

impl<K, V> End for &ZMap<K, V> {}
impl<K, V> End for &mut ZMap<K, V> {}
