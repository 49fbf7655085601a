//! Token generation behind the `fieldwise` procedural macros.
//!
//! Everything here produces [`proc_macro2::TokenStream`]s, so it can be driven from tests without a
//! real proc-macro context. The `fieldwise-macro` crate is a thin shim that forwards to:
//!
//! - [`RecordShape`], which parses a `#[derive(Record)]`/`#[derive(Compare)]` input and counts its
//!   fields;
//! - [`arity::impl_arities`], which emits the per-arity table of trait impls for native tuples;
//! - [`unary::conversion_impls`], which emits the `usize` ↔ unary number conversions.

use {
    lazy_static::lazy_static,
    proc_macro2::{Ident, Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::quote,
    thiserror::Error,
};

pub mod arity;
pub mod record;
pub mod unary;

pub use record::RecordShape;

/// The largest record arity covered by the decomposition table.
///
/// Records with more fields are rejected when deriving. Enable the `wide` feature to raise the
/// bound.
#[cfg(not(feature = "wide"))]
pub const MAX_ARITY: usize = 32;

/// The largest record arity covered by the decomposition table.
#[cfg(feature = "wide")]
pub const MAX_ARITY: usize = 64;

/// The reasons a type cannot be reflected as a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unsupported record shape: `{0}` is an enum, but only structs can be records")]
    Enum(String),
    #[error("unsupported record shape: `{0}` is a union, but only structs can be records")]
    Union(String),
    #[error(
        "unsupported record shape: `{name}` has {found} fields, but the maximum supported arity \
         is {max}"
    )]
    TooManyFields {
        name: String,
        found: usize,
        max: usize,
    },
}

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("fieldwise") {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => "fieldwise".to_owned(),
    };
}

/// The absolute path of the runtime crate, as seen from the crate invoking a derive.
///
/// Inside `fieldwise` itself this resolves through `extern crate self as fieldwise`.
pub fn crate_path() -> TokenStream {
    let c = Ident::new(&CRATE_NAME, Span::call_site());
    quote! { ::#c }
}
