//! Bidirectional compile-time associations between key types and value types.
//!
//! A type map is declared with [`type_map!`](crate::type_map!), which defines a marker type
//! carrying the association:
//!
//! ```
//! use fieldwise::{type_map, type_map::*};
//! use static_assertions::assert_type_eq_all;
//!
//! pub struct A;
//! pub struct B;
//! pub struct X;
//! pub struct Y;
//!
//! type_map! {
//!     pub struct Scenario {
//!         A => X,
//!         B => Y,
//!     }
//! }
//!
//! assert_type_eq_all!(Get<Scenario, A>, X);
//! assert_type_eq_all!(GetV<Scenario, Y>, B);
//!
//! let _: TypeHolder<X> = Scenario::get::<A>();
//! let _: TypeHolder<B> = Scenario::get_v::<Y>();
//! assert_eq!(Scenario::LEN, 2);
//! ```
//!
//! Looking up a key that was never associated fails to build:
//!
//! ```compile_fail
//! use fieldwise::{type_map, type_map::*};
//!
//! type_map! { struct Small { u8 => u16 } }
//!
//! let _ = Small::get::<u32>();
//! ```
//!
//! and so does associating a key, or a value, more than once:
//!
//! ```compile_fail
//! use fieldwise::type_map;
//!
//! type_map! {
//!     struct Twice {
//!         u8 => u16,
//!         u8 => u32,
//!     }
//! }
//! ```
//!
//! ```compile_fail
//! use fieldwise::type_map;
//!
//! type_map! {
//!     struct Twice {
//!         u8 => u16,
//!         i8 => u16,
//!     }
//! }
//! ```
//!
//! A pair associates two distinct types, so a key cannot map to itself:
//!
//! ```compile_fail
//! use fieldwise::type_map;
//!
//! type_map! {
//!     struct Identity {
//!         u8 => u8,
//!     }
//! }
//! ```

use std::{any::type_name, marker::PhantomData};

use crate::{
    logic::True,
    tuple::{AllOf, HasLength, Predicate},
};

/// One association of the key type `K` with the value type `V`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Pair<K, V> {
    #[derivative(Debug = "ignore")]
    marker: PhantomData<fn() -> (K, V)>,
}

/// The [`Predicate`] satisfied by [`Pair`]s, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IsPair;

impl<K, V> Predicate<Pair<K, V>> for IsPair {
    type Outcome = True;
}

/// A value standing in for the type `T`, returned by type map lookups.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct TypeHolder<T: ?Sized> {
    #[derivative(Debug = "ignore")]
    marker: PhantomData<fn() -> PhantomData<T>>,
}

impl<T: ?Sized> TypeHolder<T> {
    /// Hold the type `T`.
    pub const fn new() -> Self {
        TypeHolder {
            marker: PhantomData,
        }
    }

    /// The name of `T`, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// A declared association between key types and value types, implemented by
/// [`type_map!`](crate::type_map!).
pub trait TypeMap: Sized {
    /// The inductive list of [`Pair`]s, in declaration order.
    type Pairs: AllOf<IsPair, Outcome = True> + HasLength;

    /// The number of pairs.
    const LEN: usize = <Self::Pairs as HasLength>::LEN;

    /// The value type associated with the key type `K`.
    fn get<K>() -> TypeHolder<Get<Self, K>>
    where
        Self: Lookup<K>,
    {
        TypeHolder::new()
    }

    /// The key type associated with the value type `V`.
    fn get_v<V>() -> TypeHolder<GetV<Self, V>>
    where
        Self: ReverseLookup<V>,
    {
        TypeHolder::new()
    }
}

/// Resolve the key `K` to its value.
pub trait Lookup<K>: TypeMap {
    /// The associated value type.
    type Value;
}

/// Resolve the value `V` to its key.
pub trait ReverseLookup<V>: TypeMap {
    /// The associated key type.
    type Key;
}

/// Implemented once for every pair of distinct types, and twice for a pair of one type, so that
/// naming the impl of a `Pair<K, K>` is ambiguous and fails to build.
#[doc(hidden)]
pub trait Distinct<Ambiguity> {
    /// Named by [`type_map!`](crate::type_map!) for each pair.
    fn check() {}
}

impl<T: ?Sized> Distinct<()> for T {}

impl<T> Distinct<u8> for Pair<T, T> {}

/// The value type associated with the key `K` in the map `M`.
pub type Get<M, K> = <M as Lookup<K>>::Value;

/// The key type associated with the value `V` in the map `M`.
pub type GetV<M, V> = <M as ReverseLookup<V>>::Key;

/// Declare a type map: a marker type associating each key type with a value type, in both
/// directions.
///
/// Each key and each value may appear at most once; a repeat is a conflicting implementation and
/// fails to build. A key may not be its own value either. See the
/// [`type_map`](mod@crate::type_map) module for examples.
#[macro_export]
macro_rules! type_map {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $($key:ty => $value:ty),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name;

        impl $crate::type_map::TypeMap for $name {
            type Pairs = <($($crate::type_map::Pair<$key, $value>,)*) as $crate::tuple::Tuple>::AsList;
        }

        $(
            const _: fn() = || {
                let _ = <$crate::type_map::Pair<$key, $value> as $crate::type_map::Distinct<_>>::check;
            };

            impl $crate::type_map::Lookup<$key> for $name {
                type Value = $value;
            }

            impl $crate::type_map::ReverseLookup<$value> for $name {
                type Key = $key;
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    use super::*;

    type_map! {
        /// Widening of unsigned integers.
        struct Widen {
            u8 => u16,
            u16 => u32,
            u32 => u64,
        }
    }

    assert_type_eq_all!(Get<Widen, u16>, u32);
    assert_type_eq_all!(GetV<Widen, u16>, u8);
    assert_impl_all!(Widen: Lookup<u8>, Lookup<u32>, ReverseLookup<u64>);
    assert_not_impl_any!(Widen: Lookup<u64>, ReverseLookup<u8>);
    assert_impl_all!(Pair<u8, u16>: Distinct<()>);
    assert_not_impl_any!(Pair<u8, u16>: Distinct<u8>);
    assert_impl_all!(Pair<u8, u8>: Distinct<()>, Distinct<u8>);

    type_map! {
        struct Empty {}
    }

    #[test]
    fn lengths_count_pairs() {
        assert_eq!(Widen::LEN, 3);
        assert_eq!(Empty::LEN, 0);
    }

    #[test]
    fn lookups_hold_the_associated_type() {
        assert_eq!(Widen::get::<u32>().type_name(), "u64");
        assert_eq!(Widen::get_v::<u32>().type_name(), "u16");
    }
}
