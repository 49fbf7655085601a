//! The flat tuple: a fixed-arity heterogeneous container addressable by position or by unique
//! element type.

use crate::{
    record::Fields,
    unary::{Number, ToUnary, Unary, UnaryOf},
    visit::{ForEach, ForEachMut, ZipForEach, ZipForEachMut},
};

/// A fixed-arity, heterogeneous, ordered container wrapping a native tuple.
///
/// Slots are addressed by position with [`get`](FlatTuple::get), checked when building:
///
/// ```
/// use fieldwise::FlatTuple;
///
/// let mut t = FlatTuple::new((1u8, "two", 3.0f64));
/// assert_eq!(*t.get::<1>(), "two");
/// *t.get_mut::<0>() += 1;
/// assert_eq!(*t.get::<0>(), 2);
/// ```
///
/// ```compile_fail
/// use fieldwise::FlatTuple;
///
/// let t = FlatTuple::new((1u8, "two"));
/// let _ = t.get::<2>(); // index out of bounds
/// ```
///
/// or by the type of a slot, when exactly one slot has that type:
///
/// ```
/// use fieldwise::FlatTuple;
///
/// let t = FlatTuple::new((1u8, "two", 3.0f64));
/// assert_eq!(*t.by_type::<f64, _>(), 3.0);
/// ```
///
/// ```compile_fail
/// use fieldwise::FlatTuple;
///
/// let t = FlatTuple::new((1u8, 2u8));
/// let _ = t.by_type::<u8, _>(); // ambiguous element type
/// ```
///
/// ```compile_fail
/// use fieldwise::FlatTuple;
///
/// let t = FlatTuple::new((1u8, 2u8));
/// let _ = t.by_type::<u16, _>(); // absent element type
/// ```
///
/// A slot aliasing a value is found by the value's type too, but only a mutable alias can be
/// written through:
///
/// ```
/// use fieldwise::FlatTuple;
///
/// let (mut count, name) = (1u32, String::from("n"));
/// let mut t = FlatTuple::new((&mut count, &name));
/// *t.by_type_mut::<u32, _>() += 1;
/// assert_eq!(t.by_type::<String, _>(), "n");
/// assert_eq!(count, 2);
/// ```
///
/// ```compile_fail
/// use fieldwise::FlatTuple;
///
/// let name = String::from("n");
/// let mut t = FlatTuple::new((&name,));
/// t.by_type_mut::<String, _>().push('!'); // shared alias
/// ```
///
/// Construction and the wrapped tuple are usable in constant contexts:
///
/// ```
/// use fieldwise::FlatTuple;
///
/// const ORIGIN: FlatTuple<(i32, i32)> = FlatTuple::new((0, 0));
/// const X: i32 = ORIGIN.0 .0;
/// assert_eq!(X, 0);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FlatTuple<T>(pub T);

/// Positional access to the slot at the unary index `N`, for every native tuple up to
/// [`MAX_ARITY`](crate::MAX_ARITY).
pub trait Field<N: Unary> {
    /// The type of the slot.
    type Output;

    /// A reference to the slot.
    fn field(&self) -> &Self::Output;

    /// A mutable reference to the slot.
    fn field_mut(&mut self) -> &mut Self::Output;
}

/// Access to the slot of type `T`, found at the index `I`.
///
/// Callers leave `I` to inference: it is determined exactly when a single slot has type `T`. The
/// index is either a unary number, for a slot holding `T` itself, or [`Aliased`] around one, for a
/// slot holding `&T` or `&mut T`. So on a [`Reference`](crate::Reference) tuple a field can be
/// looked up by its own type as well as by the type of its slot.
pub trait Locate<T, I> {
    /// A reference to the slot.
    fn locate(&self) -> &T;
}

/// Mutable access to the slot of type `T`, found at the index `I`.
///
/// A slot holding `&T` is shared, so it is located but never mutably.
pub trait LocateMut<T, I>: Locate<T, I> {
    /// A mutable reference to the slot.
    fn locate_mut(&mut self) -> &mut T;
}

/// The index of a slot aliasing a `T` through `&T` or `&mut T`, at the unary index `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Aliased<I>(pub I);

impl<T> FlatTuple<T> {
    /// Wrap a native tuple.
    pub const fn new(slots: T) -> Self {
        FlatTuple(slots)
    }

    /// Unwrap into the native tuple.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// A reference to the slot at index `N`.
    pub fn get<const N: usize>(&self) -> &<T as Field<UnaryOf<N>>>::Output
    where
        Number<N>: ToUnary,
        T: Field<UnaryOf<N>>,
    {
        self.0.field()
    }

    /// A mutable reference to the slot at index `N`.
    pub fn get_mut<const N: usize>(&mut self) -> &mut <T as Field<UnaryOf<N>>>::Output
    where
        Number<N>: ToUnary,
        T: Field<UnaryOf<N>>,
    {
        self.0.field_mut()
    }

    /// A reference to the unique slot of type `U`.
    pub fn by_type<U, I>(&self) -> &U
    where
        T: Locate<U, I>,
    {
        self.0.locate()
    }

    /// A mutable reference to the unique slot of type `U`.
    pub fn by_type_mut<U, I>(&mut self) -> &mut U
    where
        T: LocateMut<U, I>,
    {
        self.0.locate_mut()
    }

    /// Visit every slot in index order.
    pub fn for_each<V>(&self, visitor: &mut V)
    where
        T: ForEach<V>,
    {
        ForEach::for_each(&self.0, visitor)
    }

    /// Visit every slot mutably in index order.
    pub fn for_each_mut<V>(&mut self, visitor: &mut V)
    where
        T: ForEachMut<V>,
    {
        self.0.for_each_mut(visitor)
    }

    /// Visit the slots of this tuple and `other` pairwise in index order. Both tuples must have
    /// the same arity.
    pub fn zip_for_each<U, V>(&self, other: &FlatTuple<U>, visitor: &mut V)
    where
        T: ZipForEach<U, V>,
    {
        self.0.zip_for_each(&other.0, visitor)
    }

    /// Visit the slots of this tuple and mutable slots of `other` pairwise in index order.
    pub fn zip_for_each_mut<U, V>(&self, other: &mut FlatTuple<U>, visitor: &mut V)
    where
        T: ZipForEachMut<U, V>,
    {
        self.0.zip_for_each_mut(&mut other.0, visitor)
    }
}

impl<T: Fields> FlatTuple<T> {
    /// The number of slots.
    pub const ARITY: usize = T::ARITY;

    /// A tuple aliasing every slot of this one.
    pub fn as_refs(&self) -> FlatTuple<T::Refs<'_>> {
        FlatTuple(self.0.refs())
    }

    /// A tuple mutably aliasing every slot of this one.
    pub fn as_muts(&mut self) -> FlatTuple<T::Muts<'_>> {
        FlatTuple(self.0.muts())
    }
}

impl<T> From<T> for FlatTuple<T> {
    fn from(slots: T) -> Self {
        FlatTuple(slots)
    }
}

/// Construct a [`FlatTuple`](crate::FlatTuple) from a list of values, one per slot.
///
/// ```
/// use fieldwise::flat_tuple;
///
/// let t = flat_tuple!(1, "one", 1.0);
/// assert_eq!(t.0, (1, "one", 1.0));
/// assert_eq!(flat_tuple!().0, ());
/// ```
#[macro_export]
macro_rules! flat_tuple {
    ($($slot:expr),* $(,)?) => {
        $crate::FlatTuple::new(($($slot,)*))
    };
}
