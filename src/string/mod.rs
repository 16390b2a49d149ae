//! Growable byte string with a maintained terminator

mod zstr;

pub use zstr::ZStr;
