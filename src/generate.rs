//! Named specializations and fallback registration
//!
//! The generic containers are already specialized per element type by
//! monomorphization. The macros here add *named* instantiations: a newtype
//! over the generic container that is distinct from every other
//! instantiation (two `define_vec!` types over the same element type do not
//! interchange) and that registers itself with every dispatch trait by
//! forwarding to the inner container.
//!
//! Attributes written before the visibility are applied to the newtype, which
//! is how optional derives such as `Clone` or `Debug` are requested:
//!
//! ```rust
//! use zcontainers::{define_list, define_map, define_vec, ops, z_foreach};
//! use zcontainers::hash_map::{default_hash, ordered_cmp};
//!
//! define_vec!(#[derive(Clone, Debug)] pub Ints, i32);
//! define_list!(pub Floats, f32);
//! define_map!(pub Users, i32 => &'static str);
//!
//! let mut ints = Ints::new();
//! ops::push(&mut ints, 10)?;
//! assert_eq!(ops::at(&ints, 0), Some(&10));
//!
//! let mut floats = Floats::new();
//! ops::push(&mut floats, 1.5)?;
//! let mut total = 0.0;
//! z_foreach!(x in &floats => { total += *x; });
//! assert_eq!(total, 1.5);
//!
//! let mut users = Users::new(default_hash, ordered_cmp);
//! users.put(10, "User_A")?;
//! assert_eq!(ops::at(&users, &10), Some(&"User_A"));
//! # Ok::<(), zcontainers::ZError>(())
//! ```
//!
//! A type that should accept the uniform operations without supporting any
//! of them registers the fallback:
//!
//! ```rust
//! use zcontainers::{ops, register_fallback};
//!
//! struct Widget;
//! register_fallback!(Widget);
//!
//! let mut w = Widget;
//! assert_eq!(ops::len(&w), 0);
//! assert!(ops::push(&mut w, 1u8).is_err());
//! assert!(ops::pop(&mut w).is_none());
//! ```

/// Forward the order-independent dispatch traits of a newtype to its field.
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_common_ops {
    ($name:ident, $inner:ty) => {
        impl<'a> $crate::dispatch::Length for &'a $name {
            #[inline]
            fn z_len(self) -> usize {
                $crate::dispatch::Length::z_len(&self.0)
            }
        }

        impl<'a> $crate::dispatch::Length for &'a mut $name {
            #[inline]
            fn z_len(self) -> usize {
                $crate::dispatch::Length::z_len(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::IsEmpty for &'a $name {
            #[inline]
            fn z_is_empty(self) -> bool {
                $crate::dispatch::IsEmpty::z_is_empty(&self.0)
            }
        }

        impl<'a> $crate::dispatch::IsEmpty for &'a mut $name {
            #[inline]
            fn z_is_empty(self) -> bool {
                $crate::dispatch::IsEmpty::z_is_empty(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Capacity for &'a $name {
            #[inline]
            fn z_cap(self) -> usize {
                $crate::dispatch::Capacity::z_cap(&self.0)
            }
        }

        impl<'a> $crate::dispatch::Capacity for &'a mut $name {
            #[inline]
            fn z_cap(self) -> usize {
                $crate::dispatch::Capacity::z_cap(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Destroy for &'a mut $name {
            #[inline]
            fn z_del(self) {
                $crate::dispatch::Destroy::z_del(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Clear for &'a mut $name {
            #[inline]
            fn z_clear(self) {
                $crate::dispatch::Clear::z_clear(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Pop for &'a mut $name {
            type Output = <&'a mut $inner as $crate::dispatch::Pop>::Output;

            #[inline]
            fn z_pop(self) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::Pop::z_pop(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Front for &'a $name {
            type Output = <&'a $inner as $crate::dispatch::Front>::Output;

            #[inline]
            fn z_front(self) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::Front::z_front(&self.0)
            }
        }

        impl<'a> $crate::dispatch::Front for &'a mut $name {
            type Output = <&'a mut $inner as $crate::dispatch::Front>::Output;

            #[inline]
            fn z_front(self) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::Front::z_front(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Back for &'a $name {
            type Output = <&'a $inner as $crate::dispatch::Back>::Output;

            #[inline]
            fn z_back(self) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::Back::z_back(&self.0)
            }
        }

        impl<'a> $crate::dispatch::Back for &'a mut $name {
            type Output = <&'a mut $inner as $crate::dispatch::Back>::Output;

            #[inline]
            fn z_back(self) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::Back::z_back(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::Begin for &'a $name {
            type Iter = <&'a $inner as $crate::dispatch::Begin>::Iter;

            #[inline]
            fn z_begin(self) -> $crate::dispatch::Cursor<Self::Iter> {
                $crate::dispatch::Begin::z_begin(&self.0)
            }
        }

        impl<'a> $crate::dispatch::Begin for &'a mut $name {
            type Iter = <&'a mut $inner as $crate::dispatch::Begin>::Iter;

            #[inline]
            fn z_begin(self) -> $crate::dispatch::Cursor<Self::Iter> {
                $crate::dispatch::Begin::z_begin(&mut self.0)
            }
        }

        impl<'a> $crate::dispatch::End for &'a $name {
            #[inline]
            fn z_end(self) -> $crate::dispatch::Position {
                $crate::dispatch::End::z_end(&self.0)
            }
        }

        impl<'a> $crate::dispatch::End for &'a mut $name {
            #[inline]
            fn z_end(self) -> $crate::dispatch::Position {
                $crate::dispatch::End::z_end(&mut self.0)
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $inner;

            #[inline]
            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut $inner {
                &mut self.0
            }
        }

        impl ::core::convert::From<$inner> for $name {
            #[inline]
            fn from(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl ::core::convert::From<$name> for $inner {
            #[inline]
            fn from(outer: $name) -> Self {
                outer.0
            }
        }

        impl<'a> ::core::iter::IntoIterator for &'a $name {
            type Item = <&'a $inner as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&'a $inner as ::core::iter::IntoIterator>::IntoIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                (&self.0).into_iter()
            }
        }

        impl<'a> ::core::iter::IntoIterator for &'a mut $name {
            type Item = <&'a mut $inner as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&'a mut $inner as ::core::iter::IntoIterator>::IntoIter;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                (&mut self.0).into_iter()
            }
        }
    };
}

/// Forward push and positional access for sequence newtypes.
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_sequence_ops {
    ($name:ident, $inner:ty, $elem:ty) => {
        $crate::__forward_common_ops!($name, $inner);

        impl $name {
            /// Create an empty container
            #[inline]
            pub const fn new() -> Self {
                Self(<$inner>::new())
            }
        }

        impl ::core::default::Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'a> $crate::dispatch::Push<$elem> for &'a mut $name {
            #[inline]
            fn z_push(self, value: $elem) -> $crate::Result<()> {
                $crate::dispatch::Push::z_push(&mut self.0, value)
            }
        }

        impl<'a> $crate::dispatch::At<usize> for &'a $name {
            type Output = <&'a $inner as $crate::dispatch::At<usize>>::Output;

            #[inline]
            fn z_at(self, index: usize) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::At::z_at(&self.0, index)
            }
        }

        impl<'a> $crate::dispatch::At<usize> for &'a mut $name {
            type Output = <&'a mut $inner as $crate::dispatch::At<usize>>::Output;

            #[inline]
            fn z_at(self, index: usize) -> ::core::option::Option<Self::Output> {
                $crate::dispatch::At::z_at(&mut self.0, index)
            }
        }

        impl ::core::iter::FromIterator<$elem> for $name {
            fn from_iter<I: ::core::iter::IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

/// Declare a named vector specialization: `define_vec!(pub Name, T)`.
#[macro_export]
macro_rules! define_vec {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty $(,)?) => {
        $(#[$meta])*
        $vis struct $name($crate::ZVec<$elem>);

        $crate::__forward_sequence_ops!($name, $crate::ZVec<$elem>, $elem);
    };
}

/// Declare a named linked-list specialization: `define_list!(pub Name, T)`.
#[macro_export]
macro_rules! define_list {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty $(,)?) => {
        $(#[$meta])*
        $vis struct $name($crate::ZList<$elem>);

        $crate::__forward_sequence_ops!($name, $crate::ZList<$elem>, $elem);
    };
}

/// Declare a named hash table specialization: `define_map!(pub Name, K => V)`.
///
/// Construct with `Name::new(hash_fn, cmp_fn)` (or `with_seed` /
/// `with_config`), the same as [`ZMap`](crate::ZMap).
#[macro_export]
macro_rules! define_map {
    ($(#[$meta:meta])* $vis:vis $name:ident, $key:ty => $val:ty $(,)?) => {
        $(#[$meta])*
        $vis struct $name($crate::ZMap<$key, $val>);

        $crate::__forward_common_ops!($name, $crate::ZMap<$key, $val>);

        #[allow(dead_code)]
        impl $name {
            /// Create an empty table with a random seed
            #[inline]
            pub fn new(
                hash_fn: $crate::hash_map::HashFn<$key>,
                cmp_fn: $crate::hash_map::CompareFn<$key>,
            ) -> Self {
                Self($crate::ZMap::new(hash_fn, cmp_fn))
            }

            /// Create an empty table with a fixed seed
            #[inline]
            pub fn with_seed(
                hash_fn: $crate::hash_map::HashFn<$key>,
                cmp_fn: $crate::hash_map::CompareFn<$key>,
                seed: u32,
            ) -> Self {
                Self($crate::ZMap::with_seed(hash_fn, cmp_fn, seed))
            }

            /// Create an empty table from a validated configuration
            #[inline]
            pub fn with_config(
                hash_fn: $crate::hash_map::HashFn<$key>,
                cmp_fn: $crate::hash_map::CompareFn<$key>,
                config: $crate::config::TableConfig,
            ) -> $crate::Result<Self> {
                $crate::ZMap::with_config(hash_fn, cmp_fn, config).map(Self)
            }
        }

        impl<'a, __X> $crate::dispatch::Push<__X> for &'a mut $name {}

        impl<'a, 'k> $crate::dispatch::At<&'k $key> for &'a $name {
            type Output = &'a $val;

            #[inline]
            fn z_at(self, key: &'k $key) -> ::core::option::Option<&'a $val> {
                self.0.get(key)
            }
        }

        impl<'a, 'k> $crate::dispatch::At<&'k $key> for &'a mut $name {
            type Output = &'a mut $val;

            #[inline]
            fn z_at(self, key: &'k $key) -> ::core::option::Option<&'a mut $val> {
                self.0.get_mut(key)
            }
        }
    };
}

/// Register the fallback implementation of every uniform operation for one
/// or more types.
#[macro_export]
macro_rules! register_fallback {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::dispatch::Length for &$ty {}
            impl $crate::dispatch::Length for &mut $ty {}
            impl $crate::dispatch::Capacity for &$ty {}
            impl $crate::dispatch::Capacity for &mut $ty {}
            impl $crate::dispatch::IsEmpty for &$ty {}
            impl $crate::dispatch::IsEmpty for &mut $ty {}
            impl $crate::dispatch::Destroy for &mut $ty {}
            impl $crate::dispatch::Clear for &mut $ty {}
            impl<__V> $crate::dispatch::Push<__V> for &mut $ty {}

            impl $crate::dispatch::Pop for &mut $ty {
                type Output = ::core::convert::Infallible;
            }

            impl<__I> $crate::dispatch::At<__I> for &$ty {
                type Output = ::core::convert::Infallible;
            }

            impl<__I> $crate::dispatch::At<__I> for &mut $ty {
                type Output = ::core::convert::Infallible;
            }

            impl $crate::dispatch::Front for &$ty {
                type Output = ::core::convert::Infallible;
            }

            impl $crate::dispatch::Front for &mut $ty {
                type Output = ::core::convert::Infallible;
            }

            impl $crate::dispatch::Back for &$ty {
                type Output = ::core::convert::Infallible;
            }

            impl $crate::dispatch::Back for &mut $ty {
                type Output = ::core::convert::Infallible;
            }

            impl $crate::dispatch::Begin for &$ty {
                type Iter = ::core::iter::Empty<::core::convert::Infallible>;
            }

            impl $crate::dispatch::Begin for &mut $ty {
                type Iter = ::core::iter::Empty<::core::convert::Infallible>;
            }

            impl $crate::dispatch::End for &$ty {}
            impl $crate::dispatch::End for &mut $ty {}
        )+
    };
}
