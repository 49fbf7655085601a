//! Type sequences: conversions between flat tuples and their inductive list structures, and the
//! queries the rest of the crate is built on.
//!
//! Sequences are written as native tuples for readability, and computed over as inductive lists
//! `(T0, (T1, (T2, ())))`. The traits [`Tuple`] and [`List`] convert between the two equivalent
//! representations, for tuples of every arity up to [`MAX_ARITY`](crate::MAX_ARITY).
//!
//! Every query here is evaluated entirely by the type checker; there are no instances involved.
//!
//! ```
//! use fieldwise::{logic::*, tuple::*, unary::*};
//! use static_assertions::assert_type_eq_all;
//!
//! struct IsUnsigned;
//! impl Predicate<u8> for IsUnsigned { type Outcome = True; }
//! impl Predicate<u32> for IsUnsigned { type Outcome = True; }
//! impl Predicate<i64> for IsUnsigned { type Outcome = False; }
//!
//! type Seq = (i64, u8, u32);
//!
//! assert_eq!(count::<Seq>(), 3);
//! assert_type_eq_all!(Nth<Seq, 2>, u32);
//! assert_type_eq_all!(IndexOf<Seq, IsUnsigned>, UnaryOf<1>);
//! assert!(!<All<Seq, IsUnsigned>>::VALUE);
//! ```

use crate::{
    logic::{Bool, True},
    unary::*,
};

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;

    /// The length of a type-level list, as a `usize`.
    const LEN: usize = <Self::Length as Unary>::VALUE;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// The number of elements in the sequence written as the tuple `T`.
pub const fn count<T: Tuple>() -> usize
where
    T::AsList: HasLength,
{
    <T::AsList as HasLength>::LEN
}

/// Index into a type-level list by a unary number.
///
/// There is no impl for an index past the end of the list, so selecting out of range fails to
/// build:
///
/// ```compile_fail
/// use fieldwise::tuple::Nth;
///
/// let _: Nth<(u8, u16), 2> = 0;
/// ```
pub trait Select<N: Unary> {
    /// The element at position `N`.
    type Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = <Ts as Select<N>>::Selected;
}

/// The `N`th element of the sequence written as the tuple `T`.
pub type Nth<T, const N: usize> = <<T as Tuple>::AsList as Select<UnaryOf<N>>>::Selected;

/// A type-level predicate over element types, implemented on a marker type `Self` for each `T`
/// it can decide.
pub trait Predicate<T> {
    /// Whether `T` satisfies the predicate.
    type Outcome: Bool;
}

/// The outcome of a search through a type-level list.
pub trait Position: sealed::Position {
    /// The zero-based index of the match, or `None` if nothing matched.
    const INDEX: Option<usize>;

    /// The same outcome, one element further along the list.
    type Succ: Position;
}

/// A successful search, matching at index `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Found<N>(pub N);

/// An unsuccessful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NotFound;

impl<N: Unary> Position for Found<N> {
    const INDEX: Option<usize> = Some(N::VALUE);
    type Succ = Found<S<N>>;
}

impl Position for NotFound {
    const INDEX: Option<usize> = None;
    type Succ = NotFound;
}

/// Extract the index of a [`Found`] search result.
///
/// [`NotFound`] has no index, so dereferencing a failed search fails to build rather than yield a
/// wrong slot:
///
/// ```compile_fail
/// use fieldwise::{logic::*, tuple::*};
///
/// struct IsBool;
/// impl Predicate<u8> for IsBool { type Outcome = False; }
///
/// let _ = <IndexOf<(u8, u8), IsBool> as fieldwise::unary::Unary>::VALUE;
/// ```
pub trait Unwrap: Position {
    /// The index of the match.
    type Index: Unary;
}

impl<N: Unary> Unwrap for Found<N> {
    type Index = N;
}

/// Find the first element of a type-level list satisfying the predicate `P`.
pub trait FindIf<P> {
    /// Where the first match is, if anywhere.
    type Position: Position;
}

impl<P> FindIf<P> for () {
    type Position = NotFound;
}

impl<P, T, Ts> FindIf<P> for (T, Ts)
where
    P: Predicate<T>,
    Ts: FindIf<P>,
    <P::Outcome as Bool>::If<Found<Z>, <Ts::Position as Position>::Succ>: Position,
{
    type Position = <P::Outcome as Bool>::If<Found<Z>, <Ts::Position as Position>::Succ>;
}

/// The search result for the first element of the tuple `T` satisfying `P`.
pub type Find<T, P> = <<T as Tuple>::AsList as FindIf<P>>::Position;

/// The index of the first element of the tuple `T` satisfying `P`; fails to build if there is
/// none.
pub type IndexOf<T, P> = <Find<T, P> as Unwrap>::Index;

/// Check whether every element of a type-level list satisfies the predicate `P`.
pub trait AllOf<P> {
    /// Whether the predicate holds for every element.
    type Outcome: Bool;
}

impl<P> AllOf<P> for () {
    type Outcome = True;
}

impl<P, T, Ts> AllOf<P> for (T, Ts)
where
    P: Predicate<T>,
    Ts: AllOf<P>,
{
    type Outcome = <P::Outcome as Bool>::And<<Ts as AllOf<P>>::Outcome>;
}

/// Whether every element of the tuple `T` satisfies `P`.
pub type All<T, P> = <<T as Tuple>::AsList as AllOf<P>>::Outcome;

mod sealed {
    pub trait Position {}
    impl<N> Position for super::Found<N> {}
    impl Position for super::NotFound {}
}
