extern crate proc_macro;

use {
    fieldwise_compiler::{arity, unary, RecordShape, MAX_ARITY},
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput, Error},
};

/// Derive `Record` for a struct: count its fields and destructure it into the decomposition table
/// entry of that arity. See the `fieldwise` crate documentation for details.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match RecordShape::from_derive_input(input) {
        Ok(shape) => shape.to_record_impl().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Derive structural `Compare` for a record, recursing into fields that are records themselves.
/// See the `fieldwise` crate documentation for details.
#[proc_macro_derive(Compare)]
pub fn derive_compare(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match RecordShape::from_derive_input(input) {
        Ok(shape) => shape.to_compare_impl().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_arities(input: TokenStream) -> TokenStream {
    if let Err(error) = no_arguments(input, "impl_arities") {
        return error.to_compile_error().into();
    }
    arity::impl_arities(MAX_ARITY).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    if let Err(error) = no_arguments(input, "generate_unary_conversion_impls") {
        return error.to_compile_error().into();
    }
    unary::conversion_impls(MAX_ARITY).into()
}

fn no_arguments(input: TokenStream, name: &str) -> Result<(), Error> {
    let input = proc_macro2::TokenStream::from(input);
    if input.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            input,
            format!("`{}!` takes no arguments; the bound is fixed by `MAX_ARITY`", name),
        ))
    }
}
