//! Element-wise traversal of flat tuples.
//!
//! A closure cannot be generic over the slot type, so traversals take a *visitor*: a value
//! implementing [`Visit<T>`] (or one of its variants) for every slot type `T` it will meet. The
//! traversal traits are implemented for every native tuple up to
//! [`MAX_ARITY`](crate::MAX_ARITY), and visit slots strictly in index order.
//!
//! ```
//! use fieldwise::{visit::*, FlatTuple};
//!
//! struct Sum(f64);
//!
//! impl Visit<u8> for Sum {
//!     fn visit(&mut self, _: usize, slot: &u8) {
//!         self.0 += f64::from(*slot);
//!     }
//! }
//!
//! impl Visit<f32> for Sum {
//!     fn visit(&mut self, _: usize, slot: &f32) {
//!         self.0 += f64::from(*slot);
//!     }
//! }
//!
//! let mut sum = Sum(0.0);
//! for_each(&FlatTuple::new((1u8, 2.5f32, 3u8)), &mut sum);
//! assert_eq!(sum.0, 6.5);
//! ```
//!
//! Zipped traversals only exist between tuples of the same arity:
//!
//! ```compile_fail
//! use fieldwise::{visit::*, FlatTuple};
//!
//! struct Nothing;
//!
//! impl<A, B> VisitZip<A, B> for Nothing {
//!     fn visit_zip(&mut self, _: usize, _: &A, _: &B) {}
//! }
//!
//! let (a, b) = (FlatTuple::new((1, 2)), FlatTuple::new((1, 2, 3)));
//! zip_for_each(&a, &b, &mut Nothing); // arity mismatch
//! ```

use crate::FlatTuple;

/// Visit a slot of type `T`.
pub trait Visit<T> {
    /// Called once for the slot at `index`.
    fn visit(&mut self, index: usize, slot: &T);
}

/// Visit a slot of type `T` mutably.
pub trait VisitMut<T> {
    /// Called once for the slot at `index`.
    fn visit_mut(&mut self, index: usize, slot: &mut T);
}

/// Visit a pair of slots of types `A` and `B` sharing an index.
pub trait VisitZip<A, B> {
    /// Called once for the slots at `index`.
    fn visit_zip(&mut self, index: usize, left: &A, right: &B);
}

/// Visit a pair of slots sharing an index, the right one mutably.
pub trait VisitZipMut<A, B> {
    /// Called once for the slots at `index`.
    fn visit_zip_mut(&mut self, index: usize, left: &A, right: &mut B);
}

/// A native tuple whose every slot can be visited by `V`.
pub trait ForEach<V> {
    /// Visit every slot in index order.
    fn for_each(&self, visitor: &mut V);
}

/// A native tuple whose every slot can be visited mutably by `V`.
pub trait ForEachMut<V> {
    /// Visit every slot mutably in index order.
    fn for_each_mut(&mut self, visitor: &mut V);
}

/// A native tuple whose slots can be visited by `V` pairwise with those of `Other`, a tuple of
/// the same arity.
pub trait ZipForEach<Other, V> {
    /// Visit every pair of slots in index order.
    fn zip_for_each(&self, other: &Other, visitor: &mut V);
}

/// Like [`ZipForEach`], but with mutable access to the slots of `Other`.
pub trait ZipForEachMut<Other, V> {
    /// Visit every pair of slots in index order.
    fn zip_for_each_mut(&self, other: &mut Other, visitor: &mut V);
}

/// Visit every slot of `tuple` in index order.
pub fn for_each<T, V>(tuple: &FlatTuple<T>, visitor: &mut V)
where
    T: ForEach<V>,
{
    tuple.for_each(visitor)
}

/// Visit every slot of `tuple` mutably in index order.
pub fn for_each_mut<T, V>(tuple: &mut FlatTuple<T>, visitor: &mut V)
where
    T: ForEachMut<V>,
{
    tuple.for_each_mut(visitor)
}

/// Visit the slots of `left` and `right` pairwise in index order.
pub fn zip_for_each<A, B, V>(left: &FlatTuple<A>, right: &FlatTuple<B>, visitor: &mut V)
where
    A: ZipForEach<B, V>,
{
    left.zip_for_each(right, visitor)
}

/// Visit the slots of `left` and the slots of `right` mutably, pairwise in index order.
pub fn zip_for_each_mut<A, B, V>(left: &FlatTuple<A>, right: &mut FlatTuple<B>, visitor: &mut V)
where
    A: ZipForEachMut<B, V>,
{
    left.zip_for_each_mut(right, visitor)
}
