//! Conversions between the array-of-structs, struct-of-arrays and tuple-of-arrays layouts.
//!
//! A struct-of-arrays is itself a record whose fields are [`Column`]s, one per field of the
//! element record and in the same order:
//!
//! ```
//! use fieldwise::prelude::*;
//!
//! #[derive(Record, Debug, Clone, PartialEq)]
//! struct Point {
//!     x: f32,
//!     label: String,
//! }
//!
//! #[derive(Record, Default)]
//! struct Points {
//!     xs: Vec<f32>,
//!     labels: Vec<String>,
//! }
//!
//! let points = vec![
//!     Point { x: 1.0, label: "a".into() },
//!     Point { x: 2.0, label: "b".into() },
//! ];
//!
//! let mut columns = Points::default();
//! struct_of_arrays_with_resize(&points, &mut columns);
//! assert_eq!(columns.xs, [1.0, 2.0]);
//!
//! let mut rows = vec![Point { x: 0.0, label: String::new() }; 2];
//! array_of_structs(&columns, &mut rows).unwrap();
//! assert_eq!(rows, points);
//! ```
//!
//! Columns must line up with the fields they hold:
//!
//! ```compile_fail
//! use fieldwise::prelude::*;
//!
//! #[derive(Record)]
//! struct Point { x: f32, y: f32 }
//!
//! #[derive(Record)]
//! struct Wrong { xs: Vec<f32>, ys: Vec<i64> }
//!
//! let mut wrong = Wrong { xs: vec![0.0], ys: vec![0] };
//! let _ = struct_of_arrays(&[Point { x: 1.0, y: 2.0 }], &mut wrong);
//! ```
//!
//! Every conversion logs at `trace` level through the [`log`] facade.

use std::collections::VecDeque;

use log::trace;

use crate::{
    error::LayoutError,
    record::{Fields, Record},
    visit::{ForEach, ForEachMut, Visit, VisitMut, VisitZipMut, ZipForEachMut},
    FlatTuple,
};

/// An indexable container of rows.
pub trait Column {
    /// The type of each row.
    type Item;

    /// The number of rows.
    fn len(&self) -> usize;

    /// Whether there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row at `index`, if there is one.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// The row at `index` mutably, if there is one.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
}

/// A column whose length can change.
pub trait GrowableColumn: Column {
    /// Append a row.
    fn push(&mut self, item: Self::Item);

    /// Truncate or extend to `len` rows, filling with defaults.
    fn resize_default(&mut self, len: usize)
    where
        Self::Item: Default;
}

impl<T> Column for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T> GrowableColumn for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }
}

impl<T> Column for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

impl<T> GrowableColumn for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item)
    }

    fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }
}

impl<T, const N: usize> Column for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T> Column for Box<[T]> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

/// Finds the first column shorter than `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckLen {
    expected: usize,
    short: Option<LayoutError>,
}

impl CheckLen {
    fn new(expected: usize) -> Self {
        CheckLen {
            expected,
            short: None,
        }
    }

    fn check(&mut self, column: usize, found: usize) {
        if self.short.is_none() && found < self.expected {
            self.short = Some(LayoutError::ColumnTooShort {
                column,
                expected: self.expected,
                found,
            });
        }
    }

    fn finish(self) -> Result<(), LayoutError> {
        self.short.map_or(Ok(()), Err)
    }
}

impl<'c, C: Column> Visit<&'c C> for CheckLen {
    fn visit(&mut self, index: usize, column: &&'c C) {
        self.check(index, column.len())
    }
}

impl<'c, C: Column> Visit<&'c mut C> for CheckLen {
    fn visit(&mut self, index: usize, column: &&'c mut C) {
        self.check(index, column.len())
    }
}

/// Resizes every column to `len` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    len: usize,
}

impl<'c, C> VisitMut<&'c mut C> for Resize
where
    C: GrowableColumn,
    C::Item: Default,
{
    fn visit_mut(&mut self, index: usize, column: &mut &'c mut C) {
        trace!("resizing column {} from {} to {} rows", index, column.len(), self.len);
        column.resize_default(self.len)
    }
}

/// Writes one record's fields into row `row` of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteRow {
    row: usize,
}

impl<'s, 'c, T, C> VisitZipMut<&'s T, &'c mut C> for WriteRow
where
    T: Clone,
    C: Column<Item = T>,
{
    fn visit_zip_mut(&mut self, _: usize, field: &&'s T, column: &mut &'c mut C) {
        if let Some(slot) = column.get_mut(self.row) {
            T::clone_from(slot, field);
        }
    }
}

/// Reads row `row` of each column into one record's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRow {
    row: usize,
}

impl<'s, 'd, T, C> VisitZipMut<&'s C, &'d mut T> for ReadRow
where
    T: Clone,
    C: Column<Item = T>,
{
    fn visit_zip_mut(&mut self, _: usize, column: &&'s C, field: &mut &'d mut T) {
        if let Some(value) = column.get(self.row) {
            T::clone_from(field, value);
        }
    }
}

/// Appends one record's fields to each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PushRow;

impl<'s, T, C> VisitZipMut<&'s T, C> for PushRow
where
    T: Clone,
    C: GrowableColumn<Item = T>,
{
    fn visit_zip_mut(&mut self, _: usize, field: &&'s T, column: &mut C) {
        column.push(T::clone(field))
    }
}

/// Write `source[i]`'s fields into row `i` of each column of `dest`, for every `i`.
///
/// Every column of `dest` must already hold at least `source.len()` rows; rows past that are left
/// untouched. If any column is too short, nothing is written.
pub fn struct_of_arrays<'s, 'd, R, D>(source: &'s [R], dest: &'d mut D) -> Result<(), LayoutError>
where
    R: Record,
    D: Record,
    <D::Fields as Fields>::Muts<'d>: ForEach<CheckLen>,
    <R::Fields as Fields>::Refs<'s>: ZipForEachMut<<D::Fields as Fields>::Muts<'d>, WriteRow>,
{
    let mut columns = dest.fields_mut();
    let mut check = CheckLen::new(source.len());
    ForEach::for_each(&columns, &mut check);
    check.finish()?;
    write_rows(source, &mut columns);
    Ok(())
}

/// [`struct_of_arrays`], first resizing every column of `dest` to `source.len()` rows.
pub fn struct_of_arrays_with_resize<'s, 'd, R, D>(source: &'s [R], dest: &'d mut D)
where
    R: Record,
    D: Record,
    <D::Fields as Fields>::Muts<'d>: ForEachMut<Resize>,
    <R::Fields as Fields>::Refs<'s>: ZipForEachMut<<D::Fields as Fields>::Muts<'d>, WriteRow>,
{
    let mut columns = dest.fields_mut();
    columns.for_each_mut(&mut Resize { len: source.len() });
    write_rows(source, &mut columns);
}

fn write_rows<'s, R, M>(source: &'s [R], columns: &mut M)
where
    R: Record,
    <R::Fields as Fields>::Refs<'s>: ZipForEachMut<M, WriteRow>,
{
    trace!("writing {} rows of {} fields into columns", source.len(), R::ARITY);
    for (row, record) in source.iter().enumerate() {
        record.fields().zip_for_each_mut(columns, &mut WriteRow { row });
    }
}

/// Read row `i` of each column of `source` into the fields of `dest[i]`, for every `i`.
///
/// Every column of `source` must hold at least `dest.len()` rows. If any column is too short,
/// nothing is written.
pub fn array_of_structs<'s, 'd, S, R>(source: &'s S, dest: &'d mut [R]) -> Result<(), LayoutError>
where
    S: Record,
    R: Record,
    <S::Fields as Fields>::Refs<'s>: ForEach<CheckLen>,
    <S::Fields as Fields>::Refs<'s>: ZipForEachMut<<R::Fields as Fields>::Muts<'d>, ReadRow>,
{
    let columns = source.fields();
    let mut check = CheckLen::new(dest.len());
    ForEach::for_each(&columns, &mut check);
    check.finish()?;

    trace!("reading {} rows of {} fields from columns", dest.len(), R::ARITY);
    for (row, record) in dest.iter_mut().enumerate() {
        let mut fields = R::fields_mut(record);
        columns.zip_for_each_mut(&mut fields, &mut ReadRow { row });
    }
    Ok(())
}

/// Gather the fields of every record of `source` into one `Vec` per field, in order.
///
/// ```
/// use fieldwise::prelude::*;
///
/// #[derive(Record)]
/// struct Sample(u8, char);
///
/// let columns = tuple_of_arrays(&[Sample(1, 'a'), Sample(2, 'b')]);
/// assert_eq!(columns.0, (vec![1, 2], vec!['a', 'b']));
/// ```
pub fn tuple_of_arrays<'s, R>(source: &'s [R]) -> FlatTuple<<R::Fields as Fields>::Columns>
where
    R: Record,
    <R::Fields as Fields>::Refs<'s>: ZipForEachMut<<R::Fields as Fields>::Columns, PushRow>,
{
    trace!("gathering {} rows of {} fields into columns", source.len(), R::ARITY);
    let mut columns = <R::Fields as Fields>::columns(source.len());
    for record in source {
        record.fields().zip_for_each_mut(&mut columns, &mut PushRow);
    }
    FlatTuple::new(columns)
}
