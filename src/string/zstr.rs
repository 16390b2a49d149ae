//! ZStr: growable byte string with a guaranteed trailing terminator
//!
//! The buffer is a [`ZVec<u8>`] that, once it holds any text, always ends
//! with a `0` byte that is not counted in [`ZStr::len`]. The raw view
//! [`ZStr::as_bytes_with_nul`] therefore exposes `len()` text bytes followed
//! by the terminator, and [`ZStr::capacity`] accounts for the terminator
//! slot.

use crate::containers::ZVec;
use crate::error::{check_bounds, Result, ZError};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;
use std::str::{self, FromStr};

const EMPTY_WITH_NUL: &[u8] = b"\0";

/// Growable, NUL-terminated byte string
///
/// # Examples
///
/// ```rust
/// use zcontainers::ZStr;
///
/// let mut s = ZStr::from_text("Hello").unwrap();
/// s.push(b'!').unwrap();
/// assert_eq!(s, "Hello!");
/// assert_eq!(s.len(), 6);
/// assert_eq!(s.as_bytes_with_nul(), b"Hello!\0");
/// ```
#[derive(Clone, Default)]
pub struct ZStr {
    // Empty, or text bytes followed by a single 0.
    buf: ZVec<u8>,
}

impl ZStr {
    /// Create an empty string without allocating
    #[inline]
    pub const fn new() -> Self {
        Self { buf: ZVec::new() }
    }

    /// Create an empty string with room for `cap` text bytes plus the
    /// terminator
    pub fn with_capacity(cap: usize) -> Result<Self> {
        let total = cap
            .checked_add(1)
            .ok_or_else(|| ZError::out_of_memory(usize::MAX))?;
        Ok(Self {
            buf: ZVec::with_capacity(total)?,
        })
    }

    /// Copy `text` into a new string
    pub fn from_text(text: &str) -> Result<Self> {
        let mut s = Self::with_capacity(text.len())?;
        s.push_str(text)?;
        Ok(s)
    }

    /// Number of text bytes, excluding the terminator
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Check if the string holds no text
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated bytes, including the terminator slot
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Append one byte
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.buf.is_empty() {
            self.buf.reserve(2)?;
            self.buf.push(byte)?;
            return self.buf.push(0);
        }

        // Grow first so a failed allocation leaves the text untouched, then
        // overwrite the old terminator.
        self.buf.push(0)?;
        let n = self.buf.len();
        self.buf[n - 2] = byte;
        Ok(())
    }

    /// Append every byte of `text`
    pub fn push_str(&mut self, text: &str) -> Result<()> {
        self.append_bytes(text.as_bytes())
    }

    /// Append raw bytes
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let terminator = usize::from(self.buf.is_empty());
        self.buf.reserve(bytes.len() + terminator)?;

        self.buf.pop();
        self.buf.extend_from_slice(bytes)?;
        self.buf.push(0)
    }

    /// Remove and return the last text byte
    pub fn pop(&mut self) -> Option<u8> {
        let n = self.buf.len();
        if n < 2 {
            return None;
        }
        let byte = self.buf[n - 2];
        self.buf[n - 2] = 0;
        self.buf.pop();
        Some(byte)
    }

    /// Drop all text; capacity is retained
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drop all text and release the storage
    #[inline]
    pub fn free(&mut self) {
        self.buf.free();
    }

    /// Text bytes, excluding the terminator
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.buf.as_slice()[..len]
    }

    /// Mutable text bytes, excluding the terminator
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.buf.as_mut_slice()[..len]
    }

    /// Raw text view: `len()` bytes followed by the terminator
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.buf.is_empty() {
            EMPTY_WITH_NUL
        } else {
            self.buf.as_slice()
        }
    }

    /// The text as `&str`
    pub fn as_str(&self) -> Result<&str> {
        str::from_utf8(self.as_bytes())
            .map_err(|e| ZError::invalid_data(format!("ZStr is not valid UTF-8: {}", e)))
    }

    /// Bounds-checked byte access
    pub fn at(&self, index: usize) -> Result<&u8> {
        check_bounds(index, self.len())?;
        Ok(&self.buf[index])
    }

    /// Bounds-checked mutable byte access
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8> {
        check_bounds(index, self.len())?;
        Ok(&mut self.buf[index])
    }

    /// Byte access, `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }

    /// Mutable byte access, `None` past the end
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut u8> {
        self.as_bytes_mut().get_mut(index)
    }

    /// First text byte
    #[inline]
    pub fn front(&self) -> Option<&u8> {
        self.as_bytes().first()
    }

    /// First text byte, mutably
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().first_mut()
    }

    /// Last text byte
    #[inline]
    pub fn back(&self) -> Option<&u8> {
        self.as_bytes().last()
    }

    /// Last text byte, mutably
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().last_mut()
    }

    /// Iterate over the text bytes
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Iterate mutably over the text bytes
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, u8> {
        self.as_bytes_mut().iter_mut()
    }
}

impl FromStr for ZStr {
    type Err = ZError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}

impl TryFrom<&str> for ZStr {
    type Error = ZError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}

impl fmt::Display for ZStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ZStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZStr({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for ZStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ZStr {}

impl PartialEq<str> for ZStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ZStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for ZStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ZStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for ZStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> IntoIterator for &'a ZStr {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut ZStr {
    type Item = &'a mut u8;
    type IntoIter = slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
