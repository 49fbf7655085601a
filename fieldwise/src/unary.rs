//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Flat tuple slots are addressed at the type level by these numbers: `get::<2>()` is resolved
//! through the slot impl for `S<S<Z>>`. Constants and unary numbers are linked by [`ToUnary`] and
//! [`ToConstant`] for every value up to [`MAX_ARITY`](crate::MAX_ARITY).

/// Zero, the index of the first slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One past `N`: `S<Z>` indexes the second slot, `S<S<Z>>` the third.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary spelling of the constant `N`, e.g. `UnaryOf<2>` is `S<S<Z>>`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A type-level natural number, readable back as a `usize`.
///
/// ```
/// use fieldwise::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<32>>::VALUE, 32);
/// ```
pub trait Unary: sealed::Unary + Copy + Send + Sync + 'static {
    /// The number as a value.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Implemented only by [`Number`].
pub trait Constant: sealed::Constant {}

/// A `usize` lifted into a type, so that it can carry trait impls.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Spell a [`Number`] in unary.
///
/// Only numbers up to [`MAX_ARITY`](crate::MAX_ARITY) convert, so an index past the widest tuple
/// is rejected before slot lookup is even attempted:
///
/// ```compile_fail
/// use fieldwise::unary::*;
///
/// let _ = <UnaryOf<1000>>::VALUE;
/// ```
pub trait ToUnary {
    /// The unary spelling.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// The inverse of [`ToUnary`].
pub trait ToConstant: Unary {
    /// The constant spelling.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

fieldwise_macro::generate_unary_conversion_impls!();

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}
}
