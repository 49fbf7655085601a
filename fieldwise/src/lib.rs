/*!
![license: MIT](https://img.shields.io/badge/license-MIT-blue)

> **fieldwise (adverb):** one field at a time, in order.
>
> **fieldwise (crate):** Static structural reflection over plain Rust records.

Derive [`Record`](derive@Record) for a plain struct and it gains a uniform tuple view of its fields,
computed entirely at build time: no field names, no runtime type information, no annotations
beyond the derive itself. On top of that view this crate builds generic algorithms which work for
*any* record:

- **conversion** into a [`FlatTuple`] that either copies the fields ([`Value`]) or aliases them
  ([`Reference`]), so writes through the tuple land in the record;
- **traversal** of one tuple, or of two tuples of the same arity in lockstep, with a
  [visitor](visit);
- **deep structural equality** with [`compare`], recursing into nested records;
- **layout conversion** between arrays of records, records of arrays and tuples of arrays
  ([`struct_of_arrays`], [`array_of_structs`], [`tuple_of_arrays`]);
- **printing** a tuple as `{ v0, v1, ..., vn-1 };` with [`print`].

Alongside these, the [`type_map`](mod@type_map) module offers compile-time bidirectional maps
between types, built on the same [type sequences](tuple) as the rest of the crate.

## Quick reference

| Operation | Rust |
| :-------- | :--- |
| count a record's fields | [`fields_count::<R>()`](fields_count), `R::ARITY` |
| record to tuple (copies) | [`convert(&r, Value)`](convert), [`r.to_tuple()`](Record::to_tuple) |
| record to tuple (aliases) | [`convert(&r, Reference)`](convert), [`convert(&mut r, Reference)`](convert) |
| skip shape validation | [`convert_unchecked`] |
| tuple slot by position | [`t.get::<N>()`](FlatTuple::get), [`t.get_mut::<N>()`](FlatTuple::get_mut) |
| tuple slot by type | [`t.by_type::<T, _>()`](FlatTuple::by_type), [`t.by_type_mut::<T, _>()`](FlatTuple::by_type_mut) |
| visit every slot | [`for_each`](visit::for_each), [`for_each_mut`](visit::for_each_mut) |
| visit two tuples pairwise | [`zip_for_each`](visit::zip_for_each), [`zip_for_each_mut`](visit::zip_for_each_mut) |
| structural equality | [`compare(&a, &b)`](compare), `#[derive(Compare)]`, [`ByEq`] |
| layouts | [`struct_of_arrays`], [`struct_of_arrays_with_resize`], [`array_of_structs`], [`tuple_of_arrays`] |
| type maps | [`type_map!`], [`TypeMap::get`](type_map::TypeMap::get), [`TypeMap::get_v`](type_map::TypeMap::get_v) |
| printing | [`print(&mut sink, &t)`](print), `t.to_string()` |

Every misuse the type system can see is a build failure rather than a runtime error: an index
past the end of a tuple, a type lookup matching zero or several slots, zipping tuples of different
arities, mismatched columns in a layout conversion, and duplicate keys or values in a type map. The
one runtime failure is a caller-supplied column holding too few rows, reported as a
[`LayoutError`].

## Example

```
use fieldwise::prelude::*;

#[derive(Record, Compare, Debug, Clone, PartialEq)]
struct Particle {
    mass: f64,
    charge: i8,
    name: String,
}

let mut p = Particle { mass: 1.0, charge: -1, name: "electron".into() };
assert_eq!(Particle::ARITY, 3);

// Alias the fields, and write through the aliases.
{
    let mut fields = convert(&mut p, Reference);
    **fields.get_mut::<0>() = 0.511;
    fields.by_type_mut::<String, _>().push('!');
}
assert_eq!(p.name, "electron!");

// Copy the fields, and print them.
let copy = convert(&p, Value);
assert_eq!(copy.to_string(), "{ 0.511, -1, electron! };");

assert!(compare(&p, &from_tuple(copy)));
```

## Limits

Records may have at most [`MAX_ARITY`] fields (32, or 64 with the `wide` feature), since the
decomposition table is generated for each arity up to that bound. Records must be structs; enums
and unions are rejected by the derive.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

// The derives name this crate by its absolute path, which must also resolve inside it.
extern crate self as fieldwise;

pub mod compare;
pub mod convert;
pub mod error;
pub mod flat;
pub mod layout;
pub mod logic;
pub mod print;
pub mod record;
pub mod tuple;
pub mod type_map;
pub mod unary;
pub mod visit;

pub use compare::{compare, ByEq, Compare, Equality};
pub use convert::{
    convert, convert_unchecked, field_policy, from_tuple, Decompose, FieldPolicy, PolicyKind,
};
pub use error::LayoutError;
pub use field_policy::{Reference, Value};
pub use fieldwise_macro::{Compare, Record};
pub use flat::FlatTuple;
pub use layout::{
    array_of_structs, struct_of_arrays, struct_of_arrays_with_resize, tuple_of_arrays, Column,
    GrowableColumn,
};
pub use print::print;
pub use record::{fields_count, Arity, ClonedFields, Fields, Record};
pub use type_map::TypeMap;

fieldwise_macro::impl_arities!();

/// The prelude module for quickly getting started with fieldwise.
///
/// This module is designed to be imported as `use fieldwise::prelude::*;`, which brings into scope
/// the derives, the conversions and algorithms, and the traits their methods live on.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        array_of_structs, compare, convert, convert_unchecked, fields_count, flat_tuple,
        from_tuple, print, struct_of_arrays, struct_of_arrays_with_resize, tuple_of_arrays,
        type_map, ByEq, Compare, FlatTuple, Record, Reference, TypeMap, Value,
    };
    #[doc(no_inline)]
    pub use crate::visit::{Visit, VisitMut, VisitZip, VisitZipMut};
}
