//! Type-level booleans, the outcomes of [`Predicate`](crate::tuple::Predicate)s over type
//! sequences.

/// Type-level truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// Type-level falsehood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// A type-level boolean, with its value-level equivalent.
///
/// # Examples
///
/// ```
/// use fieldwise::logic::*;
///
/// assert!(<And<True, Not<False>>>::VALUE);
/// assert!(!<And<True, False>>::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;

    /// Conjunction with `B`.
    type And<B: Bool>: Bool;

    /// Negation.
    type Not: Bool;

    /// `Then` if this is [`True`], `Else` otherwise.
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type And<B: Bool> = B;
    type Not = False;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type And<B: Bool> = False;
    type Not = True;
    type If<Then, Else> = Else;
}

/// Conjunction of two type-level booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// Negation of a type-level boolean.
pub type Not<A> = <A as Bool>::Not;

/// Branch on a type-level boolean.
///
/// ```
/// use fieldwise::logic::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(If<True, u8, u16>, u8);
/// assert_type_eq_all!(If<False, u8, u16>, u16);
/// ```
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

mod sealed {
    pub trait Bool {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
