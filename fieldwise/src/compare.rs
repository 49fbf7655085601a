//! Deep structural equality over records.
//!
//! [`compare`] aliases both records as flat tuples and zips them with an [`Equality`] visitor.
//! Leaf slots compare by value; a slot that is itself a record deriving
//! [`Compare`](derive@crate::Compare) re-enters [`compare`] for its own fields, so equality
//! recurses to every nesting depth:
//!
//! ```
//! use fieldwise::prelude::*;
//!
//! #[derive(Record, Compare, Clone, Default)]
//! struct Inner {
//!     value: f64,
//!     tag: String,
//! }
//!
//! #[derive(Record, Compare, Clone, Default)]
//! struct Outer {
//!     inner: Inner,
//!     count: usize,
//! }
//!
//! let a = Outer::default();
//! let mut b = a.clone();
//! assert!(compare(&a, &b));
//!
//! b.inner.tag.push('!');
//! assert!(!compare(&a, &b));
//! ```
//!
//! Tuples, the standard maps and sets, `Cow` and the time, path and non-zero leaves compare out
//! of the box. Any other `PartialEq` type takes part when wrapped in [`ByEq`].
//!
//! Records are finite trees of owned values, so recursion always terminates. Shared graphs
//! (`Rc`, `Arc`) have no [`Compare`] impl, and cyclic structures are not supported.

use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ffi::{OsStr, OsString},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    time::{Duration, Instant, SystemTime},
};

use crate::{
    convert::{convert, field_policy::Reference},
    record::{Fields, Record},
    visit::{VisitZip, ZipForEach},
};

/// Structural equality: field-by-field for records, by value for leaves.
pub trait Compare {
    /// Whether `self` and `other` are structurally equal.
    fn compare(&self, other: &Self) -> bool;
}

macro_rules! compare_by_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl Compare for $t {
                fn compare(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

compare_by_eq!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str,
    String, Path, PathBuf, OsStr, OsString, Duration, Instant, SystemTime, Ordering, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, NonZeroI8, NonZeroI16,
    NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
);

impl<T: Compare + ?Sized> Compare for &T {
    fn compare(&self, other: &Self) -> bool {
        T::compare(*self, *other)
    }
}

impl<T: Compare + ?Sized> Compare for &mut T {
    fn compare(&self, other: &Self) -> bool {
        T::compare(&**self, &**other)
    }
}

impl<T: Compare + ?Sized> Compare for Box<T> {
    fn compare(&self, other: &Self) -> bool {
        T::compare(self, other)
    }
}

impl<T: Compare> Compare for Option<T> {
    fn compare(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Compare> Compare for [T] {
    fn compare(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.compare(b))
    }
}

impl<T: Compare, const N: usize> Compare for [T; N] {
    fn compare(&self, other: &Self) -> bool {
        self[..].compare(&other[..])
    }
}

impl<T: Compare> Compare for Vec<T> {
    fn compare(&self, other: &Self) -> bool {
        self[..].compare(&other[..])
    }
}

impl<T: Compare> Compare for VecDeque<T> {
    fn compare(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.compare(b))
    }
}

impl<T: ?Sized> Compare for PhantomData<T> {
    fn compare(&self, _: &Self) -> bool {
        true
    }
}

impl<B> Compare for Cow<'_, B>
where
    B: Compare + ToOwned + ?Sized,
{
    fn compare(&self, other: &Self) -> bool {
        B::compare(self, other)
    }
}

/// Maps are equal when they hold the same keys, compared by `Eq`, with structurally equal values.
impl<K, V, S> Compare for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Compare,
    S: BuildHasher,
{
    fn compare(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| value.compare(v)))
    }
}

impl<K: PartialEq, V: Compare> Compare for BTreeMap<K, V> {
    fn compare(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.compare(vb))
    }
}

impl<K, S> Compare for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn compare(&self, other: &Self) -> bool {
        self == other
    }
}

impl<K: PartialEq> Compare for BTreeSet<K> {
    fn compare(&self, other: &Self) -> bool {
        self == other
    }
}

/// Compare the wrapped value by its `PartialEq` impl.
///
/// `Compare` covers the standard leaves, containers and tuples. A field of any other type with a
/// `PartialEq` impl joins a derived comparison by being wrapped:
///
/// ```
/// use fieldwise::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Opaque(u64);
///
/// #[derive(Record, Compare, Clone)]
/// struct Entry {
///     key: String,
///     payload: ByEq<Opaque>,
/// }
///
/// let a = Entry { key: "k".into(), payload: ByEq(Opaque(1)) };
/// let mut b = a.clone();
/// assert!(compare(&a, &b));
///
/// b.payload.0 = Opaque(2);
/// assert!(!compare(&a, &b));
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByEq<T>(pub T);

impl<T> ByEq<T> {
    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: PartialEq> Compare for ByEq<T> {
    fn compare(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> From<T> for ByEq<T> {
    fn from(value: T) -> Self {
        ByEq(value)
    }
}

impl<T> Deref for ByEq<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for ByEq<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

/// A zipped visitor accumulating structural equality of paired slots.
///
/// Once a pair differs, the remaining pairs are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equality {
    equal: bool,
}

impl Equality {
    /// Start out equal: the empty zip is equal.
    pub const fn new() -> Self {
        Equality { equal: true }
    }

    /// Whether every pair visited so far compared equal.
    pub const fn is_equal(&self) -> bool {
        self.equal
    }
}

impl Default for Equality {
    fn default() -> Self {
        Equality::new()
    }
}

impl<T: Compare> VisitZip<T, T> for Equality {
    fn visit_zip(&mut self, _: usize, left: &T, right: &T) {
        self.equal = self.equal && left.compare(right);
    }
}

/// Whether every field of `a` equals the corresponding field of `b`, recursively.
pub fn compare<'a, R>(a: &'a R, b: &'a R) -> bool
where
    R: Record,
    <R::Fields as Fields>::Refs<'a>: ZipForEach<<R::Fields as Fields>::Refs<'a>, Equality>,
{
    let (a, b) = (convert(a, Reference), convert(b, Reference));
    let mut equality = Equality::new();
    a.zip_for_each(&b, &mut equality);
    equality.is_equal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_compare_by_value() {
        assert!(1u8.compare(&1));
        assert!(!"a".compare("b"));
        assert!(Some(vec![1.5f32]).compare(&Some(vec![1.5])));
        assert!(!Some(1).compare(&None));
        assert!(![1, 2].compare(&[1, 3]));
        assert!(!vec![1].compare(&vec![1, 1]));
    }

    #[test]
    fn tuples_compare_slot_by_slot() {
        assert!(().compare(&()));
        assert!((1u8, "a").compare(&(1, "a")));
        assert!(!(1u8, 2u8).compare(&(1, 3)));
        assert!(((1, (2.0, 'c')),).compare(&((1, (2.0, 'c')),)));
    }

    #[test]
    fn maps_compare_values_structurally() {
        let a: HashMap<_, _> = [("x", vec![(1, 2)]), ("y", vec![])].into_iter().collect();
        let mut b = a.clone();
        assert!(a.compare(&b));
        b.insert("y", vec![(0, 0)]);
        assert!(!a.compare(&b));

        let c: BTreeMap<_, _> = [(1, Some(1.5))].into_iter().collect();
        assert!(c.compare(&c.clone()));
        assert!(!c.compare(&[(2, Some(1.5))].into_iter().collect()));
        assert!(!c.compare(&BTreeMap::new()));
    }

    #[test]
    fn sets_and_borrowed_leaves_compare_by_value() {
        let set: HashSet<_> = [1, 2].into_iter().collect();
        assert!(set.compare(&[2, 1].into_iter().collect()));
        assert!(!BTreeSet::from([1]).compare(&BTreeSet::from([2])));
        assert!(Cow::Borrowed("a").compare(&Cow::Owned(String::from("a"))));
        assert!(Duration::from_millis(5).compare(&Duration::from_micros(5000)));
        assert!(!Ordering::Less.compare(&Ordering::Greater));
    }

    #[test]
    fn by_eq_defers_to_partial_eq() {
        #[derive(PartialEq)]
        struct Opaque(u8);

        assert!(ByEq(Opaque(1)).compare(&ByEq(Opaque(1))));
        assert!(!ByEq(Opaque(1)).compare(&Opaque(2).into()));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert!(!f64::NAN.compare(&f64::NAN));
    }

    #[test]
    fn equality_short_circuits() {
        let mut equality = Equality::new();
        equality.visit_zip(0, &1, &2);
        equality.visit_zip(1, &3, &3);
        assert!(!equality.is_equal());
    }
}
