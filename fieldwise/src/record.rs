//! Records and the per-arity decomposition table.
//!
//! A record is any plain struct deriving [`Record`](derive@crate::Record). The derive counts the
//! declared fields and picks the entry of the decomposition table for that arity: the native tuple
//! of the field types, whose [`Fields`] impl knows how to alias, mutably alias, copy, and lay out
//! as columns each slot.

use crate::{convert::from_tuple, unary::Unary, FlatTuple};

/// The decomposition shapes of a native tuple of field types, implemented for every arity from 0
/// to [`MAX_ARITY`](crate::MAX_ARITY).
///
/// ```
/// use fieldwise::Fields;
/// use static_assertions::assert_type_eq_all;
///
/// assert_eq!(<(u8, String) as Fields>::ARITY, 2);
/// assert_type_eq_all!(<(u8, String) as Fields>::Refs<'static>, (&'static u8, &'static String));
/// assert_type_eq_all!(<(u8, String) as Fields>::Columns, (Vec<u8>, Vec<String>));
/// ```
pub trait Fields: Sized {
    /// The number of slots.
    const ARITY: usize;

    /// The number of slots, at the type level.
    type Arity: Unary;

    /// One shared reference per slot.
    type Refs<'a>
    where
        Self: 'a;

    /// One mutable reference per slot.
    type Muts<'a>
    where
        Self: 'a;

    /// One `Vec` per slot: the struct-of-arrays form of a sequence of these tuples.
    type Columns;

    /// Alias every slot.
    fn refs(&self) -> Self::Refs<'_>;

    /// Mutably alias every slot.
    fn muts(&mut self) -> Self::Muts<'_>;

    /// Empty columns, each with room for `capacity` rows.
    fn columns(capacity: usize) -> Self::Columns;
}

/// Copy a tuple of shared references slot by slot into a tuple of owned values.
pub trait ClonedFields: Fields {
    /// Clone each aliased slot.
    fn cloned(refs: Self::Refs<'_>) -> Self;
}

/// A plain data structure whose fields, in declaration order, can be reflected as a tuple.
///
/// Implement this with `#[derive(Record)]`: the derive counts the fields from the declaration, so
/// nothing about the record needs to be stated by hand.
///
/// ```
/// use fieldwise::Record;
///
/// #[derive(Record, Debug, PartialEq)]
/// struct Named {
///     name: String,
///     index: i32,
/// }
///
/// let mut named = Named { name: "first".into(), index: 1 };
/// assert_eq!(Named::ARITY, 2);
///
/// let (name, index) = named.fields_mut();
/// name.push_str("!");
/// *index += 1;
/// assert_eq!(named, Named { name: "first!".into(), index: 2 });
/// ```
///
/// Only structs are records:
///
/// ```compile_fail
/// #[derive(fieldwise::Record)]
/// enum Either { Left(u8), Right(u16) }
/// ```
///
/// and only up to [`MAX_ARITY`](crate::MAX_ARITY) fields:
///
/// ```compile_fail
/// #[derive(fieldwise::Record)]
/// struct TooWide(
///     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
///     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
///     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
///     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
///     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
/// );
/// ```
pub trait Record: Sized {
    /// The native tuple of the field types, in declaration order.
    type Fields: Fields;

    /// The number of fields, counted from the declaration.
    const ARITY: usize;

    /// Move every field into a tuple.
    fn into_fields(self) -> Self::Fields;

    /// Build the record from a tuple of its fields.
    fn from_fields(fields: Self::Fields) -> Self;

    /// Alias every field.
    fn fields(&self) -> <Self::Fields as Fields>::Refs<'_>;

    /// Mutably alias every field.
    fn fields_mut(&mut self) -> <Self::Fields as Fields>::Muts<'_>;

    /// A flat tuple aliasing every field: [`convert`](crate::convert) with the
    /// [`Reference`](crate::field_policy::Reference) policy.
    fn as_tuple(&self) -> FlatTuple<<Self::Fields as Fields>::Refs<'_>> {
        FlatTuple::new(self.fields())
    }

    /// A flat tuple mutably aliasing every field.
    fn as_tuple_mut(&mut self) -> FlatTuple<<Self::Fields as Fields>::Muts<'_>> {
        FlatTuple::new(self.fields_mut())
    }

    /// A flat tuple of copies of every field: [`convert`](crate::convert) with the
    /// [`Value`](crate::field_policy::Value) policy.
    fn to_tuple(&self) -> FlatTuple<Self::Fields>
    where
        Self::Fields: ClonedFields,
    {
        FlatTuple::new(ClonedFields::cloned(self.fields()))
    }

    /// A flat tuple owning every field.
    fn into_tuple(self) -> FlatTuple<Self::Fields> {
        FlatTuple::new(self.into_fields())
    }

    /// Build the record from a flat tuple of its fields.
    fn from_tuple(tuple: FlatTuple<Self::Fields>) -> Self {
        from_tuple(tuple)
    }
}

/// The number of fields of the record `R`.
///
/// ```
/// use fieldwise::{fields_count, Record};
///
/// #[derive(Record)]
/// struct Unit;
///
/// #[derive(Record)]
/// struct Pair(u8, u8);
///
/// const PAIR: usize = fields_count::<Pair>();
/// assert_eq!(fields_count::<Unit>(), 0);
/// assert_eq!(PAIR, 2);
/// ```
pub const fn fields_count<R: Record>() -> usize {
    R::ARITY
}

/// The number of fields of the record `R`, as a unary type-level number.
pub type Arity<R> = <<R as Record>::Fields as Fields>::Arity;
