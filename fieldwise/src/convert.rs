//! Converting records into flat tuples under a field policy.
//!
//! The policy decides whether the tuple owns copies of the fields or aliases them:
//!
//! ```
//! use fieldwise::prelude::*;
//!
//! #[derive(Record, Clone)]
//! struct StructString {
//!     name: String,
//!     index: i32,
//! }
//!
//! let mut record = StructString { name: "original".into(), index: 0 };
//!
//! let copy = convert(&record, Value);
//! {
//!     let mut alias = convert(&mut record, Reference);
//!     **alias.get_mut::<0>() = "modified".into();
//!     **alias.get_mut::<1>() = 12;
//! }
//!
//! assert_eq!(record.name, "modified");
//! assert_eq!(record.index, 12);
//! assert_eq!(copy.get::<0>(), "original");
//! ```
//!
//! An aliasing tuple borrows its source, so it cannot outlive it:
//!
//! ```compile_fail
//! use fieldwise::prelude::*;
//!
//! #[derive(Record)]
//! struct Wrapper { inner: u32 }
//!
//! let tuple = {
//!     let record = Wrapper { inner: 1 };
//!     convert(&record, Reference)
//! };
//! assert_eq!(**tuple.get::<0>(), 1);
//! ```

use std::{fmt::Debug, hash::Hash};

use crate::{
    record::{ClonedFields, Fields, Record},
    FlatTuple, MAX_ARITY,
};

/// The field policies: how a converted tuple holds each field of its source.
pub mod field_policy {
    /// Copy each field into its own slot. The tuple is fully independent of its source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Value;

    /// Alias each field: a slot is a reference to the field of the exact record converted, and
    /// writes through a mutable slot land in the record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Reference;
}

use field_policy::{Reference, Value};

/// The recognized field policies, at the value level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyKind {
    /// Fields are copied into the tuple.
    Value,
    /// Fields are aliased into the tuple.
    Reference,
}

/// A field policy tag, either [`Value`] or [`Reference`].
pub trait FieldPolicy:
    sealed::FieldPolicy + Debug + Clone + Copy + Eq + Hash + Default + 'static
{
    /// Which policy this is.
    const KIND: PolicyKind;
}

impl FieldPolicy for Value {
    const KIND: PolicyKind = PolicyKind::Value;
}

impl FieldPolicy for Reference {
    const KIND: PolicyKind = PolicyKind::Reference;
}

/// A borrowed record that can be decomposed into a flat tuple under the policy `P`.
///
/// Implemented for `&R` and `&mut R`: under [`Value`] both yield copies of the fields, under
/// [`Reference`] a shared borrow yields `&T` slots and a mutable borrow yields `&mut T` slots.
pub trait Decompose<P: FieldPolicy> {
    /// The record being decomposed.
    type Source: Record;

    /// The native tuple of slots produced.
    type Output;

    /// Decompose into a flat tuple.
    fn decompose(self) -> FlatTuple<Self::Output>;
}

impl<'a, R> Decompose<Value> for &'a R
where
    R: Record,
    R::Fields: ClonedFields,
{
    type Source = R;
    type Output = R::Fields;

    fn decompose(self) -> FlatTuple<R::Fields> {
        self.to_tuple()
    }
}

impl<'a, R> Decompose<Value> for &'a mut R
where
    R: Record,
    R::Fields: ClonedFields,
{
    type Source = R;
    type Output = R::Fields;

    fn decompose(self) -> FlatTuple<R::Fields> {
        self.to_tuple()
    }
}

impl<'a, R: Record> Decompose<Reference> for &'a R {
    type Source = R;
    type Output = <R::Fields as Fields>::Refs<'a>;

    fn decompose(self) -> FlatTuple<Self::Output> {
        FlatTuple::new(self.fields())
    }
}

impl<'a, R: Record> Decompose<Reference> for &'a mut R {
    type Source = R;
    type Output = <R::Fields as Fields>::Muts<'a>;

    fn decompose(self) -> FlatTuple<Self::Output> {
        FlatTuple::new(self.fields_mut())
    }
}

/// Validation of a record's shape, evaluated when a conversion is instantiated.
trait Shape: Record {
    const VALID: () = assert!(
        Self::ARITY == <Self::Fields as Fields>::ARITY && Self::ARITY <= MAX_ARITY,
        "unsupported record shape"
    );
}

impl<R: Record> Shape for R {}

/// Convert a borrowed record into a flat tuple of its fields, in declaration order, under the
/// field `policy`.
///
/// The build fails with "unsupported record shape" if the record's counted arity disagrees with
/// its decomposition or exceeds [`MAX_ARITY`]. Derived records always agree; a hand-written impl
/// might not:
///
/// ```compile_fail
/// use fieldwise::prelude::*;
///
/// struct Miscounted(u8);
///
/// impl Record for Miscounted {
///     type Fields = (u8,);
///     const ARITY: usize = 3;
///
///     fn into_fields(self) -> (u8,) {
///         (self.0,)
///     }
///
///     fn from_fields((a,): (u8,)) -> Self {
///         Miscounted(a)
///     }
///
///     fn fields(&self) -> (&u8,) {
///         (&self.0,)
///     }
///
///     fn fields_mut(&mut self) -> (&mut u8,) {
///         (&mut self.0,)
///     }
/// }
///
/// let _ = convert(&Miscounted(1), Value); // unsupported record shape
/// ```
pub fn convert<S, P>(source: S, policy: P) -> FlatTuple<S::Output>
where
    P: FieldPolicy,
    S: Decompose<P>,
{
    #[allow(clippy::let_unit_value)]
    let () = <S::Source as Shape>::VALID;
    convert_unchecked(source, policy)
}

/// [`convert`] without the shape validation, for callers that already trust the record.
///
/// A hand-written [`Record`] impl whose `ARITY` disagrees with its `Fields` is not diagnosed;
/// the tuple produced is then whatever that impl decomposes to. This is never memory-unsafe.
pub fn convert_unchecked<S, P>(source: S, policy: P) -> FlatTuple<S::Output>
where
    P: FieldPolicy,
    S: Decompose<P>,
{
    let _ = policy;
    source.decompose()
}

/// Rebuild a record from a flat tuple of its fields.
pub fn from_tuple<R: Record>(tuple: FlatTuple<R::Fields>) -> R {
    R::from_fields(tuple.into_inner())
}

mod sealed {
    pub trait FieldPolicy {}
    impl FieldPolicy for super::Value {}
    impl FieldPolicy for super::Reference {}
}
